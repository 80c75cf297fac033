use std::sync::Arc;

use crate::{
    application::{
        dto::{ServiceDto, ServiceNodeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        matching::build_service_tree,
        service::ServiceRepository,
        shared::{DocumentId, Slug},
    },
};

pub struct ServiceQueryService {
    repo: Arc<dyn ServiceRepository>,
}

impl ServiceQueryService {
    pub fn new(repo: Arc<dyn ServiceRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_services(&self, active_only: bool) -> ApplicationResult<Vec<ServiceDto>> {
        let services = self.repo.find_all(active_only).await?;
        Ok(services.into_iter().map(ServiceDto::from).collect())
    }

    pub async fn service_tree(&self) -> ApplicationResult<Vec<ServiceNodeDto>> {
        let services = self.repo.find_all(true).await?;
        Ok(build_service_tree(services)
            .into_iter()
            .map(ServiceNodeDto::from)
            .collect())
    }

    /// Accepts either a document id or a slug.
    pub async fn get_service(&self, key: String) -> ApplicationResult<ServiceDto> {
        let found = match DocumentId::new(key.clone()) {
            Ok(id) => self.repo.find_by_id(&id).await?,
            Err(_) => self.repo.find_by_slug(&Slug::new(key)?).await?,
        };
        found
            .map(ServiceDto::from)
            .ok_or_else(|| ApplicationError::not_found("service not found"))
    }

    pub async fn sub_services(&self, parent_id: String) -> ApplicationResult<Vec<ServiceDto>> {
        let parent_id = DocumentId::new(parent_id)?;
        let children = self.repo.find_children(&parent_id).await?;
        Ok(children
            .into_iter()
            .filter(|s| s.is_active)
            .map(ServiceDto::from)
            .collect())
    }
}
