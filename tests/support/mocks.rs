// tests/support/mocks.rs
use async_trait::async_trait;
use pressroom::application::ApplicationResult;
use pressroom::application::ports::mailer::OtpMailer;
use pressroom::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleRepository, ListParams, NewArticle,
};
use pressroom::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

/// Records delivered codes instead of sending mail, so tests can read
/// the code back out.
#[derive(Default)]
pub struct CaptureMailer {
    deliveries: Mutex<Vec<(String, String)>>,
}

impl CaptureMailer {
    pub fn last_code(&self) -> Option<String> {
        self.deliveries
            .lock()
            .unwrap()
            .last()
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl OtpMailer for CaptureMailer {
    async fn deliver(&self, email: &str, code: &str) -> ApplicationResult<()> {
        self.deliveries
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        Ok(())
    }
}

/// Every operation fails the way a broken backend would, for checking
/// that store errors surface as 5xx.
pub struct FailingArticleRepository;

fn boom<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("backend unavailable".into()))
}

#[async_trait]
impl ArticleRepository for FailingArticleRepository {
    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Option<Article>> {
        boom()
    }

    async fn list(&self, _params: ListParams) -> DomainResult<Vec<Article>> {
        boom()
    }

    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        boom()
    }

    async fn update(&self, _id: &ArticleId, _patch: ArticlePatch) -> DomainResult<Article> {
        boom()
    }

    async fn delete(&self, _id: &ArticleId) -> DomainResult<()> {
        boom()
    }
}
