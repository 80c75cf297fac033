use super::UserCommandService;
use crate::{
    application::{
        auth::ensure_permission,
        dto::{AuthenticatedUser, ManagedUserDto, auth::resolve_role},
        error::{ApplicationError, ApplicationResult},
    },
    domain::access::{Permission, Role, UserId, can_assign_role, can_manage_user},
};
use tracing::info;

pub struct UpdateUserRoleCommand {
    pub user_id: String,
    pub role: Role,
}

impl UserCommandService {
    pub async fn update_role(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserRoleCommand,
    ) -> ApplicationResult<ManagedUserDto> {
        ensure_permission(actor, Permission::AssignRoles)?;

        let target_id = UserId::new(command.user_id)?;
        if target_id == actor.id {
            return Err(ApplicationError::forbidden("you cannot change your own role"));
        }

        let target = self
            .identity
            .get_user(&target_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        let current = resolve_role(target.role.as_deref());

        if !can_manage_user(actor.role, current) {
            return Err(ApplicationError::forbidden(format!(
                "a {} cannot manage a {current}",
                actor.role
            )));
        }
        if !can_assign_role(actor.role, command.role) {
            return Err(ApplicationError::forbidden(format!(
                "a {} cannot assign the {} role",
                actor.role, command.role
            )));
        }

        let updated = self.identity.set_role(&target_id, command.role).await?;
        info!(
            target = %target_id,
            from = %current,
            to = %command.role,
            actor = %actor.id,
            "user role changed"
        );
        Ok(updated.into())
    }
}
