use super::AttorneyQueryService;
use crate::{
    application::{
        dto::AttorneyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{matching::attorneys_for_service, shared::DocumentId},
};

pub struct AttorneysForServiceQuery {
    pub service_id: String,
}

impl AttorneyQueryService {
    /// Active attorneys shown under a practice area, matched by stored
    /// service id or by specialization text.
    pub async fn attorneys_for_service(
        &self,
        query: AttorneysForServiceQuery,
    ) -> ApplicationResult<Vec<AttorneyDto>> {
        let id = DocumentId::new(query.service_id)?;
        let service = self
            .services
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("service not found"))?;

        let attorneys = self.repo.find_active().await?;
        Ok(attorneys_for_service(&service, &attorneys)
            .into_iter()
            .map(AttorneyDto::from)
            .collect())
    }
}
