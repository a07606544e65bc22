// src/application/ports/otp.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Pending one-time-passcode challenge. Only the digest of the code is
/// ever stored; the plain code exists in the mail on its way out and
/// nowhere else.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    pub email: String,
    pub code_digest: Vec<u8>,
    pub expires_at: DateTime<Utc>,
    pub attempts_left: u8,
}

impl OtpChallenge {
    pub fn spend_attempt(mut self) -> Self {
        self.attempts_left = self.attempts_left.saturating_sub(1);
        self
    }
}

#[async_trait]
pub trait OtpChallengeStore: Send + Sync {
    /// Replaces any pending challenge for the same address.
    async fn put(&self, challenge: OtpChallenge) -> ApplicationResult<()>;

    /// Removes and returns the pending challenge, making every
    /// challenge single-use by construction.
    async fn take(&self, email: &str) -> ApplicationResult<Option<OtpChallenge>>;
}
