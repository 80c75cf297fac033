// src/application/auth.rs
//! Request authentication and permission checks.
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, auth::resolve_role},
        error::{ApplicationError, ApplicationResult},
        ports::identity::IdentityProvider,
    },
    domain::access::{ContentEditScope, ContentEditSpec, Permission, UserId},
};
use tracing::{debug, warn};

/// Resolves the caller behind a session token through the identity provider.
/// Missing or rejected sessions are `Unauthorized` (401), missing
/// permissions `Forbidden` (403) and provider failures `Infrastructure`
/// (500). Nothing is retried.
pub struct AuthGate {
    identity: Arc<dyn IdentityProvider>,
}

impl AuthGate {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn authenticate(&self, token: Option<&str>) -> ApplicationResult<AuthenticatedUser> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApplicationError::unauthorized("authentication required"))?;

        let user_id = self.identity.verify_session(token).await?;
        let Some(user) = self.identity.get_user(&user_id).await? else {
            warn!(user_id = %user_id, "session refers to a user the provider does not know");
            return Err(ApplicationError::unauthorized("user not found"));
        };

        let role = resolve_role(user.role.as_deref());
        debug!(user_id = %user_id, role = %role, "request authenticated");
        Ok(AuthenticatedUser::new(user_id, role, &user.permissions))
    }

    /// Authenticate and, when `required` is set, check the permission.
    pub async fn authorize(
        &self,
        token: Option<&str>,
        required: Option<Permission>,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self.authenticate(token).await?;
        if let Some(permission) = required {
            ensure_permission(&user, permission)?;
        }
        Ok(user)
    }
}

pub fn ensure_permission(actor: &AuthenticatedUser, permission: Permission) -> ApplicationResult<()> {
    if actor.has_permission(permission) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing permission {permission}"
        )))
    }
}

/// Whether `actor` may edit content written by `author_id`, and why.
pub fn verify_content_edit_auth(
    actor: &AuthenticatedUser,
    author_id: &UserId,
) -> ApplicationResult<ContentEditScope> {
    ContentEditSpec::new(&actor.permissions, &actor.id, author_id)
        .scope()
        .ok_or_else(|| ApplicationError::forbidden("insufficient privileges to edit this content"))
}
