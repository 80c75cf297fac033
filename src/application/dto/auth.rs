use crate::domain::access::{Permission, Role, UserId};
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;
use utoipa::ToSchema;

/// Principal resolved by the auth gate for the current request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub role: Role,
    pub permissions: HashSet<Permission>,
}

impl AuthenticatedUser {
    /// Role permissions plus any per-user grants from private metadata.
    pub fn new(id: UserId, role: Role, extra: &[String]) -> Self {
        Self {
            id,
            role,
            permissions: resolve_permissions(role, extra),
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// Read the role metadata string. Missing means USER; unknown strings also
/// fall back to USER.
pub fn resolve_role(raw: Option<&str>) -> Role {
    match raw {
        None => Role::User,
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!(role = %value, "unknown role in user metadata, treating as user");
            Role::User
        }),
    }
}

pub fn resolve_permissions(role: Role, extra: &[String]) -> HashSet<Permission> {
    role.permissions()
        .iter()
        .copied()
        .chain(extra.iter().filter_map(|p| p.parse::<Permission>().ok()))
        .collect()
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub user_id: String,
    pub role: Role,
    pub permissions: Vec<Permission>,
}

impl From<&AuthenticatedUser> for SessionDto {
    fn from(user: &AuthenticatedUser) -> Self {
        let mut permissions: Vec<_> = user.permissions.iter().copied().collect();
        permissions.sort();
        Self {
            user_id: user.id.to_string(),
            role: user.role,
            permissions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_or_missing_role_is_user() {
        assert_eq!(resolve_role(None), Role::User);
        assert_eq!(resolve_role(Some("overlord")), Role::User);
        assert_eq!(resolve_role(Some("ADMIN")), Role::Admin);
    }

    #[test]
    fn extra_permissions_are_unioned() {
        let perms = resolve_permissions(
            Role::ContentCreator,
            &["manage_attorneys".into(), "bogus".into()],
        );
        assert!(perms.contains(&Permission::ManageAttorneys));
        assert!(perms.contains(&Permission::PublishContent));
        assert_eq!(perms.len(), Role::ContentCreator.permissions().len() + 1);
    }
}
