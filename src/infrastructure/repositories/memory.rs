// src/infrastructure/repositories/memory.rs
use crate::application::ports::{time::Clock, util::IdGenerator};
use crate::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleRepository, ListParams, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::{time::SystemClock, util::UuidGenerator};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Map-backed repository for demos and tests. Process-lifetime only.
///
/// The map is shared across concurrent requests, so access is
/// serialized through a `Mutex`; critical sections never await.
/// Listing preserves insertion order.
pub struct InMemoryArticleRepository {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    by_id: HashMap<String, Article>,
    order: Vec<String>,
}

impl InMemoryArticleRepository {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ids,
            clock,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Start out with the given articles already present, in order.
    pub fn seeded(
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        articles: Vec<Article>,
    ) -> Self {
        let repo = Self::new(ids, clock);
        {
            let mut inner = repo.inner.lock().unwrap();
            for article in articles {
                let id = article.id.as_str().to_string();
                inner.order.push(id.clone());
                inner.by_id.insert(id, article);
            }
        }
        repo
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator), Arc::new(SystemClock))
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.by_id.get(id.as_str()).cloned())
    }

    async fn list(&self, params: ListParams) -> DomainResult<Vec<Article>> {
        let inner = self.inner.lock().unwrap();
        let offset = params.offset.unwrap_or(0) as usize;
        let limit = params.limit.map_or(usize::MAX, |l| l as usize);

        Ok(inner
            .order
            .iter()
            .skip(offset)
            .take(limit)
            .filter_map(|id| inner.by_id.get(id).cloned())
            .collect())
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();

        let mut id = self.ids.generate();
        while inner.by_id.contains_key(&id) {
            id = self.ids.generate();
        }

        let article = Article {
            id: ArticleId::new(id.clone())?,
            title: article.title,
            content: article.content,
            author_id: article.author_id,
            created_at: article.created_at.unwrap_or_else(|| self.clock.now()),
            visibility: article.visibility,
        };
        inner.order.push(id.clone());
        inner.by_id.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, id: &ArticleId, patch: ArticlePatch) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        let article = inner
            .by_id
            .get_mut(id.as_str())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.apply(patch);
        Ok(article.clone())
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        // Deleting an absent id is a no-op.
        if inner.by_id.remove(id.as_str()).is_some() {
            inner.order.retain(|stored| stored != id.as_str());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleTitle, Visibility};
    use crate::domain::user::UserId;

    fn new_article(title: &str) -> NewArticle {
        NewArticle {
            title: ArticleTitle::new(title).unwrap(),
            content: Some(format!("{title} body")),
            author_id: UserId::new("author-1").unwrap(),
            created_at: None,
            visibility: Visibility::Public,
        }
    }

    fn repo() -> InMemoryArticleRepository {
        InMemoryArticleRepository::default()
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let repo = repo();
        let created = repo.insert(new_article("hello")).await.unwrap();
        assert!(!created.id.as_str().is_empty());

        let found = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn inserted_ids_are_unique() {
        let repo = repo();
        let a = repo.insert(new_article("a")).await.unwrap();
        let b = repo.insert(new_article("b")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn update_preserves_author_and_timestamp() {
        let repo = repo();
        let created = repo.insert(new_article("before")).await.unwrap();

        let updated = repo
            .update(
                &created.id,
                ArticlePatch::default().with_title(ArticleTitle::new("after").unwrap()),
            )
            .await
            .unwrap();

        assert_eq!(updated.title.as_str(), "after");
        assert_eq!(updated.author_id, created.author_id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.content, created.content);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_mutates_nothing() {
        let repo = repo();
        repo.insert(new_article("only")).await.unwrap();

        let missing = ArticleId::new("missing").unwrap();
        let err = repo
            .update(
                &missing,
                ArticlePatch::default().with_title(ArticleTitle::new("x").unwrap()),
            )
            .await;
        assert!(matches!(err, Err(DomainError::NotFound(_))));

        let all = repo.list(ListParams::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title.as_str(), "only");
    }

    #[tokio::test]
    async fn delete_then_find_returns_absent() {
        let repo = repo();
        let created = repo.insert(new_article("gone")).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), None);

        // Second delete is a no-op, not an error.
        repo.delete(&created.id).await.unwrap();
    }

    #[tokio::test]
    async fn list_applies_offset_before_limit() {
        let repo = repo();
        for title in ["one", "two", "three"] {
            repo.insert(new_article(title)).await.unwrap();
        }

        let all = repo.list(ListParams::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let window = repo
            .list(ListParams::new(Some(1), Some(1)))
            .await
            .unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].title.as_str(), "two");
    }

    #[tokio::test]
    async fn list_window_sizes_match_slice_semantics() {
        let repo = repo();
        for i in 0..5 {
            repo.insert(new_article(&format!("a{i}"))).await.unwrap();
        }

        // min(limit, max(n - offset, 0)) records.
        for (limit, offset, expected) in [
            (Some(2), Some(0), 2),
            (Some(10), Some(3), 2),
            (Some(2), Some(5), 0),
            (None, Some(4), 1),
            (Some(3), None, 3),
        ] {
            let page = repo.list(ListParams::new(limit, offset)).await.unwrap();
            assert_eq!(page.len(), expected, "limit={limit:?} offset={offset:?}");
        }
    }

    #[tokio::test]
    async fn offset_without_limit_is_accepted() {
        let repo = repo();
        for title in ["one", "two", "three"] {
            repo.insert(new_article(title)).await.unwrap();
        }

        let tail = repo.list(ListParams::new(None, Some(1))).await.unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].title.as_str(), "two");
    }
}
