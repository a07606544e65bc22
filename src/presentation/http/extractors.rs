// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::middleware::CurrentUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Pulls the identity bound by the authorization gate. Reaching a
/// handler without it means a protected route was wired up without the
/// gate, which is a wiring bug, not an auth failure.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Self>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "authenticated user not bound to request",
            ))
        })
    }
}
