use super::AttorneyQueryService;
use crate::{
    application::{
        dto::{AttorneyDto, AttorneyProfileDto, AuthenticatedUser, ServiceNodeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        matching::build_attorney_service_tree,
        shared::{DocumentId, Slug},
    },
};

impl AttorneyQueryService {
    pub async fn get_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: String,
    ) -> ApplicationResult<AttorneyDto> {
        let id = DocumentId::new(id)?;
        let attorney = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("attorney not found"))?;
        if !attorney.is_active() {
            Self::ensure_inactive_access(actor)?;
        }
        Ok(attorney.into())
    }

    /// Public profile page: the attorney and the practice areas they cover.
    pub async fn get_profile_by_slug(&self, slug: String) -> ApplicationResult<AttorneyProfileDto> {
        let slug = Slug::new(slug)?;
        let attorney = self
            .repo
            .find_by_slug(&slug)
            .await?
            .filter(|a| a.is_active())
            .ok_or_else(|| ApplicationError::not_found("attorney not found"))?;

        let services = self.services.find_all(true).await?;
        let tree = build_attorney_service_tree(&attorney, &services);

        Ok(AttorneyProfileDto {
            attorney: AttorneyDto::from(&attorney),
            services: tree.into_iter().map(ServiceNodeDto::from).collect(),
        })
    }
}
