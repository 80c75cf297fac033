use super::AttorneyQueryService;
use crate::{
    application::{
        dto::{AttorneyDto, AuthenticatedUser, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        attorney::AttorneyFilter,
        shared::{DocumentId, PageRequest},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListAttorneysQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Ignored for callers who cannot see inactive attorneys.
    pub active: Option<bool>,
    pub partner: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchAttorneysQuery {
    pub specialization: Option<String>,
    pub service_id: Option<String>,
}

impl AttorneyQueryService {
    pub async fn list_attorneys(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListAttorneysQuery,
    ) -> ApplicationResult<Page<AttorneyDto>> {
        let active = if Self::can_see_inactive(actor) {
            query.active
        } else {
            Some(true)
        };
        let filter = AttorneyFilter {
            active,
            partner: query.partner,
            search: query.search.filter(|s| !s.trim().is_empty()),
        };
        let paged = self
            .repo
            .find_all(&filter, PageRequest::new(query.page, query.limit))
            .await?;
        Ok(Page::from_paged(paged, AttorneyDto::from))
    }

    pub async fn list_active(&self) -> ApplicationResult<Vec<AttorneyDto>> {
        let attorneys = self.repo.find_active().await?;
        Ok(attorneys.into_iter().map(AttorneyDto::from).collect())
    }

    /// Active partners only.
    pub async fn list_partners(&self) -> ApplicationResult<Vec<AttorneyDto>> {
        let partners = self.repo.find_partners().await?;
        Ok(partners
            .into_iter()
            .filter(|a| a.is_active())
            .map(AttorneyDto::from)
            .collect())
    }

    /// Specialization text or stored service-id lookups. Both filters
    /// together return the intersection.
    pub async fn search_attorneys(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: SearchAttorneysQuery,
    ) -> ApplicationResult<Vec<AttorneyDto>> {
        let specialization = query.specialization.filter(|s| !s.trim().is_empty());
        let service_id = query
            .service_id
            .filter(|s| !s.trim().is_empty())
            .map(DocumentId::new)
            .transpose()?;

        let mut found = match (&specialization, &service_id) {
            (Some(spec), _) => self.repo.find_by_specialization(spec).await?,
            (None, Some(id)) => self.repo.find_by_service(id).await?,
            (None, None) => {
                return Err(ApplicationError::validation(
                    "provide a specialization or a service id",
                ));
            }
        };
        if let (Some(_), Some(id)) = (&specialization, &service_id) {
            found.retain(|a| a.serves(id));
        }

        let include_inactive = Self::can_see_inactive(actor);
        Ok(found
            .into_iter()
            .filter(|a| include_inactive || a.is_active())
            .map(AttorneyDto::from)
            .collect())
    }
}
