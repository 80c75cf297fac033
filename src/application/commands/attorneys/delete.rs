use super::AttorneyCommandService;
use crate::{
    application::{
        auth::ensure_permission,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{access::Permission, shared::DocumentId},
};
use tracing::info;

/// Soft delete clears the `activo` flag; `hard` removes the document.
pub struct DeleteAttorneyCommand {
    pub id: String,
    pub hard: bool,
}

impl AttorneyCommandService {
    pub async fn delete_attorney(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteAttorneyCommand,
    ) -> ApplicationResult<()> {
        ensure_permission(actor, Permission::ManageAttorneys)?;

        let id = DocumentId::new(command.id)?;
        let attorney = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("attorney not found"))?;

        if command.hard {
            self.repo.delete(&id).await?;
        } else {
            let inactive = attorney.with_active(false, self.clock.now());
            self.repo.update(&inactive).await?;
        }
        info!(attorney_id = %id, hard = command.hard, actor = %actor.id, "attorney deleted");
        Ok(())
    }
}
