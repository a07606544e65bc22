// src/infrastructure/security/auth_clients.rs
use crate::application::ports::auth::{AuthClient, AuthFailure, AuthResult};
use crate::application::ports::security::{SessionStore, TokenVerifier};
use async_trait::async_trait;
use std::sync::Arc;

/// Bearer-token strategy: the token presented in the `Authorization`
/// header resolves the identity directly.
pub struct BearerAuthClient {
    verifier: Arc<dyn TokenVerifier>,
    token: String,
}

impl BearerAuthClient {
    pub fn new(verifier: Arc<dyn TokenVerifier>, token: impl Into<String>) -> Self {
        Self {
            verifier,
            token: token.into(),
        }
    }
}

#[async_trait]
impl AuthClient for BearerAuthClient {
    async fn get_user(&self) -> AuthResult {
        self.verifier.verify(&self.token).await
    }
}

/// Session-cookie strategy: a missing or dead session is itself an
/// Unauthorized failure, before any identity resolution.
pub struct SessionAuthClient {
    sessions: Arc<dyn SessionStore>,
    session_id: Option<String>,
}

impl SessionAuthClient {
    pub fn new(sessions: Arc<dyn SessionStore>, session_id: Option<String>) -> Self {
        Self {
            sessions,
            session_id,
        }
    }
}

#[async_trait]
impl AuthClient for SessionAuthClient {
    async fn get_user(&self) -> AuthResult {
        let Some(session_id) = self.session_id.as_deref() else {
            return Err(AuthFailure::unauthorized("Unauthorized"));
        };

        match self.sessions.get(session_id).await {
            Ok(Some(session)) => Ok(session.user),
            Ok(None) => Err(AuthFailure::unauthorized("Unauthorized")),
            Err(err) => Err(AuthFailure::new(err.to_string(), 500)),
        }
    }
}
