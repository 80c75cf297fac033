use std::sync::Arc;

use crate::{
    application::{
        auth::ensure_permission,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{access::Permission, attorney::AttorneyRepository, service::ServiceRepository},
};

pub struct AttorneyQueryService {
    pub(super) repo: Arc<dyn AttorneyRepository>,
    pub(super) services: Arc<dyn ServiceRepository>,
}

impl AttorneyQueryService {
    pub fn new(repo: Arc<dyn AttorneyRepository>, services: Arc<dyn ServiceRepository>) -> Self {
        Self { repo, services }
    }

    /// Inactive attorneys are visible only to users who manage them.
    pub(super) fn can_see_inactive(actor: Option<&AuthenticatedUser>) -> bool {
        actor.is_some_and(|a| a.has_permission(Permission::ManageAttorneys))
    }

    pub(super) fn ensure_inactive_access(
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<()> {
        match actor {
            Some(actor) => ensure_permission(actor, Permission::ManageAttorneys),
            None => Err(ApplicationError::not_found("attorney not found")),
        }
    }
}
