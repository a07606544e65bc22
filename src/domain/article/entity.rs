// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, Visibility};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: Option<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub visibility: Visibility,
}

impl Article {
    /// Merge a partial update. `id`, `author_id` and `created_at` are
    /// never touched; fields absent from the patch keep their value.
    pub fn apply(&mut self, patch: ArticlePatch) {
        let ArticlePatch {
            title,
            content,
            visibility,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = Some(content);
        }
        if let Some(visibility) = visibility {
            self.visibility = visibility;
        }
    }
}

/// Input for `ArticleRepository::insert`. Carries no id; the backend
/// generates one. A `None` timestamp lets the backend fill it in.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: Option<String>,
    pub author_id: UserId,
    pub created_at: Option<DateTime<Utc>>,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<ArticleTitle>,
    pub content: Option<String>,
    pub visibility: Option<Visibility>,
}

impl ArticlePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.visibility.is_none()
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new("a-1").unwrap(),
            title: ArticleTitle::new("first").unwrap(),
            content: Some("body".into()),
            author_id: UserId::new("author-1").unwrap(),
            created_at: Utc::now(),
            visibility: Visibility::Public,
        }
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut article = sample_article();
        let created_at = article.created_at;

        article.apply(ArticlePatch::default().with_title(ArticleTitle::new("second").unwrap()));

        assert_eq!(article.title.as_str(), "second");
        assert_eq!(article.content.as_deref(), Some("body"));
        assert_eq!(article.author_id.as_str(), "author-1");
        assert_eq!(article.created_at, created_at);
    }

    #[test]
    fn apply_empty_patch_is_a_no_op() {
        let mut article = sample_article();
        let before = article.clone();
        article.apply(ArticlePatch::default());
        assert_eq!(article, before);
    }

    #[test]
    fn apply_can_flip_visibility() {
        let mut article = sample_article();
        article.apply(ArticlePatch::default().with_visibility(Visibility::Private));
        assert_eq!(article.visibility, Visibility::Private);
    }
}
