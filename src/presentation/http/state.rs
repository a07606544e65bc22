// src/presentation/http/state.rs
use crate::application::auth::AuthService;
use crate::application::ports::security::{SessionStore, TokenVerifier};
use crate::domain::article::ArticleRepository;
use crate::presentation::http::cookies::CookieConfig;
use std::sync::Arc;

/// The named repository set bound into each request's extensions by the
/// injection middleware. Handlers only ever see the contracts, which is
/// what keeps the two storage backends interchangeable.
#[derive(Clone)]
pub struct Repositories {
    pub articles: Arc<dyn ArticleRepository>,
}

#[derive(Clone)]
pub struct HttpState {
    pub repositories: Repositories,
    pub auth: Arc<AuthService>,
    pub tokens: Arc<dyn TokenVerifier>,
    pub sessions: Arc<dyn SessionStore>,
    pub cookie: CookieConfig,
}
