// src/presentation/http/controllers/articles.rs
use crate::application::dto::{ArticleResponse, ArticlesResponse, MessageResponse};
use crate::domain::article::{
    ArticleId, ArticlePatch, ArticleTitle, ListParams, NewArticle, Visibility,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::middleware::CurrentUser;
use crate::presentation::http::state::Repositories;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const ARTICLE_NOT_FOUND: &str = "Article not found";

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    /// Optional; the storage backend fills it in when absent.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub visibility: Option<Visibility>,
}

/// An id that cannot name any record maps to the same 404 a missing
/// record does.
fn parse_id(raw: String) -> HttpResult<ArticleId> {
    ArticleId::new(raw).map_err(|_| HttpError::not_found(ARTICLE_NOT_FOUND))
}

pub async fn get_article(
    Extension(repos): Extension<Repositories>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let id = parse_id(id)?;
    let article = repos
        .articles
        .find_by_id(&id)
        .await
        .into_http()?
        .ok_or_else(|| HttpError::not_found(ARTICLE_NOT_FOUND))?;

    Ok(Json(ArticleResponse {
        article: article.into(),
    }))
}

pub async fn list_articles(
    Extension(repos): Extension<Repositories>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlesResponse>> {
    let articles = repos
        .articles
        .list(ListParams::new(params.limit, params.offset))
        .await
        .into_http()?;

    Ok(Json(ArticlesResponse {
        articles: articles.into_iter().map(Into::into).collect(),
    }))
}

pub async fn create_article(
    Extension(repos): Extension<Repositories>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    // The author is always the authenticated caller, never the body.
    let article = NewArticle {
        title: ArticleTitle::new(payload.title).into_http()?,
        content: payload.content,
        author_id: user.id,
        created_at: payload.created_at,
        visibility: payload.visibility,
    };

    let article = repos.articles.insert(article).await.into_http()?;
    Ok(Json(ArticleResponse {
        article: article.into(),
    }))
}

pub async fn update_article(
    Extension(repos): Extension<Repositories>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let id = parse_id(id)?;
    let existing = repos.articles.find_by_id(&id).await.into_http()?;
    if existing.is_none() {
        return Err(HttpError::not_found(ARTICLE_NOT_FOUND));
    }

    let patch = ArticlePatch {
        title: payload
            .title
            .map(ArticleTitle::new)
            .transpose()
            .into_http()?,
        content: payload.content,
        visibility: payload.visibility,
    };

    let article = repos.articles.update(&id, patch).await.into_http()?;
    Ok(Json(ArticleResponse {
        article: article.into(),
    }))
}

pub async fn delete_article(
    Extension(repos): Extension<Repositories>,
    Path(id): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    let id = parse_id(id)?;
    let existing = repos.articles.find_by_id(&id).await.into_http()?;
    if existing.is_none() {
        return Err(HttpError::not_found(ARTICLE_NOT_FOUND));
    }

    repos.articles.delete(&id).await.into_http()?;
    Ok(Json(MessageResponse {
        message: "Article deleted successfully".into(),
    }))
}
