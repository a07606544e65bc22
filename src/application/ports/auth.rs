// src/application/ports/auth.rs
use crate::domain::user::User;
use async_trait::async_trait;
use thiserror::Error;

/// Failure shape shared by every auth strategy. The status is optional
/// so remote verifiers can forward their own; callers fall back to 401.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
    pub status: Option<u16>,
}

impl AuthFailure {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn status_or_default(&self) -> u16 {
        self.status.unwrap_or(401)
    }
}

pub type AuthResult = Result<User, AuthFailure>;

/// Resolves "who is the current caller" from whatever credentials the
/// request carried. Exactly one of user or failure comes back; there is
/// no partially-authenticated state.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn get_user(&self) -> AuthResult;
}
