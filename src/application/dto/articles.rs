use crate::domain::article::{Article, Visibility};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire shape of an article. Field names stay camelCase on the wire
/// (`authorId`, `createdAt`); timestamps serialize as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub visibility: Visibility,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content,
            author_id: article.author_id.into(),
            created_at: article.created_at,
            visibility: article.visibility,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
