use crate::domain::category::entity::Category;
use crate::domain::errors::DomainResult;
use crate::domain::shared::{DocumentId, Slug};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    /// Sorted by `order`, then name.
    async fn find_all(&self, active_only: bool) -> DomainResult<Vec<Category>>;
    async fn find_children(&self, parent_id: &DocumentId) -> DomainResult<Vec<Category>>;
    async fn insert(&self, category: &Category) -> DomainResult<()>;
    async fn update(&self, category: &Category) -> DomainResult<()>;
    async fn delete(&self, id: &DocumentId) -> DomainResult<()>;
}
