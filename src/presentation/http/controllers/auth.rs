// src/presentation/http/controllers/auth.rs
use crate::application::dto::{AuthTokenDto, MessageResponse, UserDto};
use crate::presentation::http::cookies;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::middleware::CurrentUser;
use crate::presentation::http::state::HttpState;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, header},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OtpRequestBody {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct OtpVerifyBody {
    pub email: String,
    pub code: String,
}

pub async fn request_code(
    State(state): State<HttpState>,
    Json(body): Json<OtpRequestBody>,
) -> HttpResult<Json<MessageResponse>> {
    state.auth.request_code(&body.email).await.into_http()?;
    Ok(Json(MessageResponse {
        message: "Login code sent".into(),
    }))
}

/// A successful verification answers with the bearer token and opens
/// the session-cookie path at the same time.
pub async fn verify_code(
    State(state): State<HttpState>,
    Json(body): Json<OtpVerifyBody>,
) -> HttpResult<([(HeaderName, String); 1], Json<AuthTokenDto>)> {
    let (token, session) = state
        .auth
        .verify_code(&body.email, &body.code)
        .await
        .into_http()?;

    let cookie = state.cookie.build_set_cookie(&session.id);
    Ok(([(header::SET_COOKIE, cookie)], Json(token)))
}

pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserDto> {
    Json(user.into())
}

pub async fn logout(
    State(state): State<HttpState>,
    headers: HeaderMap,
) -> HttpResult<([(HeaderName, String); 1], Json<MessageResponse>)> {
    if let Some(session_id) = cookies::extract_cookie(&headers, &state.cookie.name) {
        state.auth.logout(&session_id).await.into_http()?;
    }

    Ok((
        [(header::SET_COOKIE, state.cookie.build_delete_cookie())],
        Json(MessageResponse {
            message: "Signed out".into(),
        }),
    ))
}
