use super::AttorneyCommandService;
use crate::{
    application::{
        auth::ensure_permission,
        dto::{AttorneyDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::Permission,
        attorney::AttorneyPatch,
        shared::DocumentId,
    },
};

pub struct UpdateAttorneyCommand {
    pub id: String,
    pub patch: AttorneyPatch,
}

impl AttorneyCommandService {
    pub async fn update_attorney(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateAttorneyCommand,
    ) -> ApplicationResult<AttorneyDto> {
        ensure_permission(actor, Permission::ManageAttorneys)?;

        let id = DocumentId::new(command.id)?;
        let current = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("attorney not found"))?;

        if command.patch.is_empty() {
            return Err(ApplicationError::validation("no fields to update"));
        }

        let now = self.clock.now();
        let mut updated = current.update(command.patch, now)?;

        if updated.email() != current.email() {
            if let Some(other) = self.repo.find_by_email(updated.email()).await? {
                if other.id() != updated.id() {
                    return Err(ApplicationError::conflict(format!(
                        "an attorney with email {} already exists",
                        updated.email().as_str()
                    )));
                }
            }
        }

        if updated.name() != current.name() || updated.slug().is_none() {
            let slug = self
                .slug_service
                .unique_slug(updated.id(), updated.name())
                .await?;
            updated = updated.with_slug(slug, now);
        }

        self.repo.update(&updated).await?;
        Ok(updated.into())
    }
}
