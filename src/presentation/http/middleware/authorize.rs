// src/presentation/http/middleware/authorize.rs
use crate::application::error::ApplicationError;
use crate::domain::user::User;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::middleware::inject::AuthClientHandle;
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Identity resolved for the current request, bound into extensions by
/// the authorization gate for downstream handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authorization gate. Resolves the caller through the auth client the
/// injection middleware bound to this request; a failure aborts the
/// request with the failure's status (401 when it carries none) and its
/// message as a plain-text body. Failures are never retried here.
pub async fn require_user(mut req: Request, next: Next) -> Response {
    let Some(AuthClientHandle(client)) = req.extensions().get::<AuthClientHandle>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "auth client not bound to request",
        ))
        .into_response();
    };

    match client.get_user().await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            next.run(req).await
        }
        Err(failure) => {
            let status = StatusCode::from_u16(failure.status_or_default())
                .unwrap_or(StatusCode::UNAUTHORIZED);
            (status, failure.message).into_response()
        }
    }
}
