// src/application/commands/attorneys/create.rs
use super::AttorneyCommandService;
use crate::{
    application::{
        auth::ensure_permission,
        dto::{AttorneyDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::Permission,
        attorney::{Attorney, AttorneyProfile},
    },
};
use tracing::info;

pub struct CreateAttorneyCommand {
    pub profile: AttorneyProfile,
}

impl AttorneyCommandService {
    pub async fn create_attorney(
        &self,
        actor: &AuthenticatedUser,
        command: CreateAttorneyCommand,
    ) -> ApplicationResult<AttorneyDto> {
        ensure_permission(actor, Permission::ManageAttorneys)?;

        let now = self.clock.now();
        let id = self.ids.next_id();
        let attorney = Attorney::new(id, command.profile, None, now, now)?;

        if self.repo.find_by_email(attorney.email()).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "an attorney with email {} already exists",
                attorney.email().as_str()
            )));
        }

        let slug = self
            .slug_service
            .unique_slug(attorney.id(), attorney.name())
            .await?;
        let attorney = attorney.with_slug(slug, now);

        self.repo.insert(&attorney).await?;
        info!(attorney_id = %attorney.id(), actor = %actor.id, "attorney created");
        Ok(attorney.into())
    }
}
