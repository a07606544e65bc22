// src/application/ports/mailer.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Delivers a login code to an address. Actual mail transport is an
/// external collaborator; the production impl just logs.
#[async_trait]
pub trait OtpMailer: Send + Sync {
    async fn deliver(&self, email: &str, code: &str) -> ApplicationResult<()>;
}
