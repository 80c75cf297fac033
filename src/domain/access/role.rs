use crate::domain::access::permission::Permission;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
pub enum Role {
    #[serde(rename = "superadmin")]
    SuperAdmin,
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "developer")]
    Developer,
    #[serde(rename = "content_creator")]
    ContentCreator,
    #[serde(rename = "user")]
    #[default]
    User,
}

const SUPERADMIN_PERMISSIONS: &[Permission] = &Permission::ALL;

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::AccessDashboard,
    Permission::ManageUsers,
    Permission::AssignRoles,
    Permission::CreateContent,
    Permission::EditOwnContent,
    Permission::EditAllContent,
    Permission::DeleteContent,
    Permission::PublishContent,
    Permission::ManageCategories,
    Permission::ManageAttorneys,
    Permission::ManageServices,
    Permission::UploadMedia,
    Permission::ManageLegalContent,
    Permission::ViewAnalytics,
];

const DEVELOPER_PERMISSIONS: &[Permission] = &[
    Permission::AccessDashboard,
    Permission::RunMigrations,
    Permission::ViewAnalytics,
    Permission::CreateContent,
    Permission::EditOwnContent,
    Permission::UploadMedia,
];

const CONTENT_CREATOR_PERMISSIONS: &[Permission] = &[
    Permission::AccessDashboard,
    Permission::CreateContent,
    Permission::EditOwnContent,
    Permission::PublishContent,
    Permission::UploadMedia,
    Permission::ViewAnalytics,
];

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Developer,
        Role::ContentCreator,
        Role::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "superadmin",
            Role::Admin => "admin",
            Role::Developer => "developer",
            Role::ContentCreator => "content_creator",
            Role::User => "user",
        }
    }

    pub fn hierarchy(&self) -> u8 {
        match self {
            Role::SuperAdmin => 5,
            Role::Admin => 4,
            Role::Developer => 3,
            Role::ContentCreator => 2,
            Role::User => 1,
        }
    }

    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::SuperAdmin => SUPERADMIN_PERMISSIONS,
            Role::Admin => ADMIN_PERMISSIONS,
            Role::Developer => DEVELOPER_PERMISSIONS,
            Role::ContentCreator => CONTENT_CREATOR_PERMISSIONS,
            Role::User => &[],
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    /// Accepts the wire form in any case (`CONTENT_CREATOR` and
    /// `content_creator` are the same role).
    fn from_str(s: &str) -> DomainResult<Self> {
        let wanted = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::Validation(format!("unknown role '{wanted}'")))
    }
}
