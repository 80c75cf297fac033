use crate::domain::errors::DomainResult;
use crate::domain::service::entity::Service;
use crate::domain::shared::{DocumentId, Slug};
use async_trait::async_trait;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Service>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Service>>;
    /// Sorted by `order`, then name.
    async fn find_all(&self, active_only: bool) -> DomainResult<Vec<Service>>;
    async fn find_children(&self, parent_id: &DocumentId) -> DomainResult<Vec<Service>>;
    async fn insert(&self, service: &Service) -> DomainResult<()>;
    async fn update(&self, service: &Service) -> DomainResult<()>;
    async fn delete(&self, id: &DocumentId) -> DomainResult<()>;
}
