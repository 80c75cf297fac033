use crate::application::dto::auth::{resolve_permissions, resolve_role};
use crate::application::ports::identity::ProviderUser;
use crate::domain::access::{Permission, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Dashboard view of an auth-provider account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUserDto {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub role: Role,
    pub permissions: Vec<Permission>,
    #[serde(default, with = "serde_time::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::option")]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl From<ProviderUser> for ManagedUserDto {
    fn from(user: ProviderUser) -> Self {
        let role = resolve_role(user.role.as_deref());
        let mut permissions: Vec<_> = resolve_permissions(role, &user.permissions)
            .into_iter()
            .collect();
        permissions.sort();
        Self {
            id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
            role,
            permissions,
            created_at: user.created_at,
            last_sign_in_at: user.last_sign_in_at,
        }
    }
}
