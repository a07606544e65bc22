// src/presentation/http/middleware/inject.rs
use crate::application::ports::auth::AuthClient;
use crate::infrastructure::security::{BearerAuthClient, SessionAuthClient};
use crate::presentation::http::cookies;
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::sync::Arc;

/// Per-request handle to the auth client chosen for this request.
#[derive(Clone)]
pub struct AuthClientHandle(pub Arc<dyn AuthClient>);

/// Dependency injection, in two flavors at once. The repository set is
/// static (process-wide, cloned into every request); the auth client is
/// factory-produced per request because its strategy depends on the
/// incoming headers. Downstream stages only ever see the contracts.
pub async fn inject_dependencies(
    State(state): State<HttpState>,
    mut req: Request,
    next: Next,
) -> Response {
    let auth_client = build_auth_client(req.headers(), &state);
    req.extensions_mut().insert(state.repositories.clone());
    req.extensions_mut().insert(AuthClientHandle(auth_client));
    next.run(req).await
}

/// Bearer token wins when an `Authorization` header is present;
/// otherwise the session cookie (possibly absent) decides.
fn build_auth_client(headers: &HeaderMap, state: &HttpState) -> Arc<dyn AuthClient> {
    if let Some(header) = headers.typed_get::<Authorization<Bearer>>() {
        Arc::new(BearerAuthClient::new(
            Arc::clone(&state.tokens),
            header.token(),
        ))
    } else {
        let session_id = cookies::extract_cookie(headers, &state.cookie.name);
        Arc::new(SessionAuthClient::new(
            Arc::clone(&state.sessions),
            session_id,
        ))
    }
}
