// src/application/ports/identity.rs
use crate::application::ApplicationResult;
use crate::domain::access::{Role, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// User record as the auth provider reports it. `role` and `permissions`
/// are the raw metadata strings; interpretation happens in the auth gate.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderUser {
    pub id: UserId,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    pub role: Option<String>,
    pub permissions: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ProviderUserPage {
    pub users: Vec<ProviderUser>,
    pub total: u64,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify a session token. Invalid or expired tokens are `Unauthorized`;
    /// provider outages are `Infrastructure`.
    async fn verify_session(&self, token: &str) -> ApplicationResult<UserId>;
    async fn get_user(&self, id: &UserId) -> ApplicationResult<Option<ProviderUser>>;
    /// Newest users first.
    async fn list_users(&self, limit: u32, offset: u64) -> ApplicationResult<ProviderUserPage>;
    /// Persist `role` into the user's public metadata.
    async fn set_role(&self, id: &UserId, role: Role) -> ApplicationResult<ProviderUser>;
}
