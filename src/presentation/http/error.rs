use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::{DomainError, DomainResult};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// HTTP rendering of a failed request: status plus a plain-text
/// message body.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    pub fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            DomainError::Persistence(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

impl<T> IntoHttpResult<T> for DomainResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        let cases = [
            (DomainError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (DomainError::NotFound("n".into()), StatusCode::NOT_FOUND),
            (DomainError::Conflict("c".into()), StatusCode::CONFLICT),
            (
                DomainError::Persistence("p".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_domain(err).status, status);
        }
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let err = HttpError::from_error(ApplicationError::unauthorized("nope"));
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "nope");
    }
}
