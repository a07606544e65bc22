// src/infrastructure/mailer.rs
use crate::application::ApplicationResult;
use crate::application::ports::mailer::OtpMailer;
use async_trait::async_trait;

/// Stand-in for the real mail collaborator: writes the code to the log
/// so local logins work without an SMTP setup.
#[derive(Default, Clone)]
pub struct TracingOtpMailer;

#[async_trait]
impl OtpMailer for TracingOtpMailer {
    async fn deliver(&self, email: &str, code: &str) -> ApplicationResult<()> {
        tracing::info!(email = %email, code = %code, "login code (would be emailed)");
        Ok(())
    }
}
