use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    AccessDashboard,
    ManageUsers,
    AssignRoles,
    CreateContent,
    EditOwnContent,
    EditAllContent,
    DeleteContent,
    PublishContent,
    ManageCategories,
    ManageAttorneys,
    ManageServices,
    UploadMedia,
    ManageLegalContent,
    RunMigrations,
    ViewAnalytics,
}

impl Permission {
    pub const ALL: [Permission; 15] = [
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
        Permission::RunMigrations,
        Permission::ViewAnalytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::AccessDashboard => "access_dashboard",
            Permission::ManageUsers => "manage_users",
            Permission::AssignRoles => "assign_roles",
            Permission::CreateContent => "create_content",
            Permission::EditOwnContent => "edit_own_content",
            Permission::EditAllContent => "edit_all_content",
            Permission::DeleteContent => "delete_content",
            Permission::PublishContent => "publish_content",
            Permission::ManageCategories => "manage_categories",
            Permission::ManageAttorneys => "manage_attorneys",
            Permission::ManageServices => "manage_services",
            Permission::UploadMedia => "upload_media",
            Permission::ManageLegalContent => "manage_legal_content",
            Permission::RunMigrations => "run_migrations",
            Permission::ViewAnalytics => "view_analytics",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let wanted = s.trim();
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::Validation(format!("unknown permission '{wanted}'")))
    }
}
