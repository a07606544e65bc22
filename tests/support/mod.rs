// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, header};
use axum::response::Response;
use pressroom::application::auth::{AuthPolicy, AuthService};
use pressroom::application::ports::security::{SessionStore, TokenIssuer};
use pressroom::application::ports::time::Clock;
use pressroom::application::ports::util::IdGenerator;
use pressroom::domain::article::ArticleRepository;
use pressroom::domain::user::{User, UserId};
use pressroom::infrastructure::directory::InMemoryUserDirectory;
use pressroom::infrastructure::repositories::InMemoryArticleRepository;
use pressroom::infrastructure::security::{
    HmacTokenManager, InMemoryOtpChallengeStore, InMemorySessionStore,
};
use pressroom::infrastructure::time::SystemClock;
use pressroom::infrastructure::util::UuidGenerator;
use pressroom::presentation::http::cookies::CookieConfig;
use pressroom::presentation::http::routes::build_router;
use pressroom::presentation::http::state::{HttpState, Repositories};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

pub struct TestApp {
    pub router: Router,
    pub articles: Arc<InMemoryArticleRepository>,
    pub mailer: Arc<mocks::CaptureMailer>,
    tokens: Arc<HmacTokenManager>,
}

impl TestApp {
    /// Mint a valid bearer header for an arbitrary principal.
    pub async fn bearer_for(&self, user_id: &str) -> String {
        let user = User {
            id: UserId::new(user_id).unwrap(),
            email: None,
        };
        let issued = self.tokens.issue(&user).await.unwrap();
        format!("Bearer {}", issued.token)
    }
}

pub fn make_test_app() -> TestApp {
    let articles = Arc::new(InMemoryArticleRepository::default());
    let mailer = Arc::new(mocks::CaptureMailer::default());
    let (router, tokens) = build_test_router(articles.clone(), mailer.clone());
    TestApp {
        router,
        articles,
        mailer,
        tokens,
    }
}

/// Same wiring with an arbitrary repository behind the contract, e.g.
/// a failing one.
pub fn router_with_repo(articles: Arc<dyn ArticleRepository>) -> (Router, Arc<HmacTokenManager>) {
    build_test_router(articles, Arc::new(mocks::CaptureMailer::default()))
}

fn build_test_router(
    articles: Arc<dyn ArticleRepository>,
    mailer: Arc<mocks::CaptureMailer>,
) -> (Router, Arc<HmacTokenManager>) {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);

    let tokens = Arc::new(
        HmacTokenManager::new(TEST_SECRET, Duration::from_secs(3600), Arc::clone(&clock)).unwrap(),
    );
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new(Arc::clone(&clock)));

    let auth = Arc::new(AuthService::new(
        Arc::new(InMemoryOtpChallengeStore::new()),
        Arc::new(InMemoryUserDirectory::new(Arc::clone(&ids))),
        Arc::clone(&sessions),
        tokens.clone(),
        mailer,
        clock,
        ids,
        AuthPolicy::default(),
    ));

    let state = HttpState {
        repositories: Repositories { articles },
        auth,
        tokens: tokens.clone(),
        sessions,
        cookie: CookieConfig::default(),
    };

    (build_router(state), tokens)
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, json: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(json).unwrap()))
        .unwrap()
}
