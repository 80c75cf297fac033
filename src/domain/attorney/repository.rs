use crate::domain::attorney::{entity::Attorney, value_objects::FirmEmail};
use crate::domain::errors::DomainResult;
use crate::domain::shared::{DocumentId, PageRequest, Paged, Slug};
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct AttorneyFilter {
    pub active: Option<bool>,
    pub partner: Option<bool>,
    /// Case-insensitive match against name, position or specializations.
    pub search: Option<String>,
}

/// One stored attorney as read by maintenance jobs. Documents that no longer
/// pass validation come back as `Invalid` instead of failing the whole read.
#[derive(Debug, Clone)]
pub enum StoredAttorney {
    Valid(Attorney),
    Invalid {
        id: String,
        name: String,
        reason: String,
    },
}

#[async_trait]
pub trait AttorneyRepository: Send + Sync {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Attorney>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Attorney>>;
    async fn find_by_email(&self, email: &FirmEmail) -> DomainResult<Option<Attorney>>;
    async fn find_all(
        &self,
        filter: &AttorneyFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<Attorney>>;
    async fn find_active(&self) -> DomainResult<Vec<Attorney>>;
    async fn find_partners(&self) -> DomainResult<Vec<Attorney>>;
    async fn find_by_specialization(&self, specialization: &str) -> DomainResult<Vec<Attorney>>;
    async fn find_by_service(&self, service_id: &DocumentId) -> DomainResult<Vec<Attorney>>;
    /// Every stored attorney, unfiltered, in storage order.
    async fn scan(&self, page: PageRequest) -> DomainResult<Paged<StoredAttorney>>;
    async fn insert(&self, attorney: &Attorney) -> DomainResult<()>;
    async fn update(&self, attorney: &Attorney) -> DomainResult<()>;
    async fn delete(&self, id: &DocumentId) -> DomainResult<()>;
}
