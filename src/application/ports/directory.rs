// src/application/ports/directory.rs
use crate::application::error::ApplicationResult;
use crate::domain::user::User;
use async_trait::async_trait;

/// Email → principal binding behind the passcode login. The first
/// successful verification for an address registers it.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn resolve_or_register(&self, email: &str) -> ApplicationResult<User>;
}
