use crate::domain::article::entity::{Article, ArticlePatch, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Listing window. Absent fields mean "no bound". Offset is applied
/// before limit; both are accepted independently by every backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListParams {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self { limit, offset }
    }
}

/// Storage-agnostic CRUD contract for articles. Handlers and services
/// only ever see this trait; the in-memory and Postgres backends are
/// interchangeable behind it.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Absence is the signal for an unknown id, never an error.
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;

    /// Deterministic order: insertion order for the in-memory backend,
    /// creation time descending for Postgres.
    async fn list(&self, params: ListParams) -> DomainResult<Vec<Article>>;

    /// Generates a fresh unique id. A backend may also fill in
    /// `created_at` when the caller left it unset.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Fails with `NotFound` for an unknown id. Merges only the fields
    /// present in the patch.
    async fn update(&self, id: &ArticleId, patch: ArticlePatch) -> DomainResult<Article>;

    async fn delete(&self, id: &ArticleId) -> DomainResult<()>;
}
