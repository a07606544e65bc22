// src/application/ports/security.rs
use crate::application::error::ApplicationResult;
use crate::application::ports::auth::AuthResult;
use crate::domain::user::User;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, user: &User) -> ApplicationResult<IssuedToken>;
}

/// Verification failures funnel into the same `AuthFailure` shape the
/// session path produces, so callers need not distinguish strategies.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AuthResult;
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub user: User,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Session) -> ApplicationResult<()>;

    /// Expired sessions are reported as absent.
    async fn get(&self, session_id: &str) -> ApplicationResult<Option<Session>>;

    async fn remove(&self, session_id: &str) -> ApplicationResult<()>;
}
