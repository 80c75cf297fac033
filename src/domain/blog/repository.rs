use crate::domain::access::UserId;
use crate::domain::blog::{entity::BlogPost, value_objects::PostStatus};
use crate::domain::errors::DomainResult;
use crate::domain::shared::{DocumentId, PageRequest, Paged, Slug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct BlogPostFilter {
    pub status: Option<PostStatus>,
    pub category_id: Option<DocumentId>,
    pub author_id: Option<UserId>,
    pub tag: Option<String>,
    /// Case-insensitive match against title, excerpt or tags.
    pub search: Option<String>,
    /// Restrict to posts a visitor may see at this instant.
    pub visible_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<BlogPost>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>>;
    /// Newest first by publication date, then creation date.
    async fn find_all(
        &self,
        filter: &BlogPostFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<BlogPost>>;
    /// Visible posts sharing the category or a tag with `post`, excluding it.
    async fn find_related(
        &self,
        post: &BlogPost,
        now: DateTime<Utc>,
        limit: u32,
    ) -> DomainResult<Vec<BlogPost>>;
    async fn insert(&self, post: &BlogPost) -> DomainResult<()>;
    async fn update(&self, post: &BlogPost) -> DomainResult<()>;
    async fn delete(&self, id: &DocumentId) -> DomainResult<()>;
    /// Atomically bumps the counter; `None` when the post does not exist.
    async fn increment_view_count(&self, id: &DocumentId) -> DomainResult<Option<u64>>;
}
