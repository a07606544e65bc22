// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, auth};
use crate::presentation::http::middleware::{inject_dependencies, require_user};
use crate::presentation::http::state::HttpState;
use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let article_routes = Router::new()
        .route(
            "/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route_layer(middleware::from_fn(require_user));

    let auth_routes = Router::new()
        .route("/otp/request", post(auth::request_code))
        .route("/otp/verify", post(auth::verify_code))
        .merge(
            Router::new()
                .route("/me", get(auth::me))
                .route("/logout", post(auth::logout))
                .route_layer(middleware::from_fn(require_user)),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api/articles", article_routes)
        .nest("/api/auth", auth_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            inject_dependencies,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
