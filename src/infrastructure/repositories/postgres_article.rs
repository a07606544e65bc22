// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleRepository, ArticleTitle, ListParams, NewArticle,
    Visibility,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, title, content, author_id, created_at, visibility";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the `articles` table. Snake_case column names are
/// remapped into the entity here (`author_id` ↔ `authorId` on the wire).
#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    content: Option<String>,
    author_id: String,
    created_at: DateTime<Utc>,
    visibility: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: row.content,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            visibility: Visibility::try_from(row.visibility.as_str())?,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content, author_id, created_at, visibility
             FROM articles WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, params: ListParams) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, title, content, author_id, created_at, visibility FROM articles \
             ORDER BY created_at DESC, id DESC",
        );
        if let Some(limit) = params.limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }
        if let Some(offset) = params.offset {
            builder.push(" OFFSET ");
            builder.push_bind(i64::from(offset));
        }

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            author_id,
            created_at,
            visibility,
        } = article;

        // The store generates the id and, when the caller left it
        // unset, the creation timestamp.
        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content, author_id, visibility, created_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, now()))
             RETURNING id, title, content, author_id, created_at, visibility",
        )
        .bind(title.as_str())
        .bind(content)
        .bind(author_id.as_str())
        .bind(visibility.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, id: &ArticleId, patch: ArticlePatch) -> DomainResult<Article> {
        if patch.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::NotFound("article not found".into()));
        }

        let ArticlePatch {
            title,
            content,
            visibility,
        } = patch;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET ");
        let mut assignments = builder.separated(", ");
        if let Some(title) = title {
            let title: String = title.into();
            assignments.push("title = ");
            assignments.push_bind_unseparated(title);
        }
        if let Some(content) = content {
            assignments.push("content = ");
            assignments.push_bind_unseparated(content);
        }
        if let Some(visibility) = visibility {
            assignments.push("visibility = ");
            assignments.push_bind_unseparated(visibility.as_str());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_str());
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        // No matching row is a domain-level not-found, distinct from
        // transport errors mapped above.
        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}
