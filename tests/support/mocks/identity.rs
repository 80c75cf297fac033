// tests/support/mocks/identity.rs
use altum_legal::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::identity::{IdentityProvider, ProviderUser, ProviderUserPage},
};
use altum_legal::domain::access::{Role, UserId};
use async_trait::async_trait;
use chrono::Duration;
use std::collections::HashMap;
use std::sync::Mutex;

use super::util::fixed_now;

pub const SUPERADMIN_TOKEN: &str = "tok-superadmin";
pub const ADMIN_TOKEN: &str = "tok-admin";
pub const DEVELOPER_TOKEN: &str = "tok-developer";
pub const CREATOR_TOKEN: &str = "tok-creator";
pub const OTHER_CREATOR_TOKEN: &str = "tok-creator-2";
/// Signed-in account without a role in its metadata.
pub const READER_TOKEN: &str = "tok-reader";
/// Simulates the provider being unreachable.
pub const PROVIDER_DOWN_TOKEN: &str = "tok-provider-down";

const SESSIONS: [(&str, &str, Option<&str>); 6] = [
    (SUPERADMIN_TOKEN, "user_super", Some("superadmin")),
    (ADMIN_TOKEN, "user_admin", Some("ADMIN")),
    (DEVELOPER_TOKEN, "user_dev", Some("developer")),
    (CREATOR_TOKEN, "user_creator", Some("content_creator")),
    (OTHER_CREATOR_TOKEN, "user_creator_2", Some("content_creator")),
    (READER_TOKEN, "user_reader", None),
];

/// Fixed token table over an in-memory user store; role changes persist.
pub struct DummyIdentityProvider {
    users: Mutex<HashMap<String, ProviderUser>>,
}

impl Default for DummyIdentityProvider {
    fn default() -> Self {
        let users = SESSIONS
            .iter()
            .enumerate()
            .map(|(i, (_, id, role))| {
                let user = ProviderUser {
                    id: UserId::new(*id).expect("user id"),
                    email: Some(format!("{id}@altumlegal.mx")),
                    first_name: Some(id.trim_start_matches("user_").to_string()),
                    last_name: None,
                    image_url: None,
                    role: role.map(str::to_string),
                    permissions: Vec::new(),
                    created_at: Some(fixed_now() - Duration::days(i as i64)),
                    last_sign_in_at: None,
                };
                (id.to_string(), user)
            })
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }
}

impl DummyIdentityProvider {
    pub fn role_of(&self, id: &str) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .get(id)
            .and_then(|user| user.role.clone())
    }

    pub fn grant_extra_permission(&self, id: &str, permission: &str) {
        if let Some(user) = self.users.lock().unwrap().get_mut(id) {
            user.permissions.push(permission.to_string());
        }
    }
}

#[async_trait]
impl IdentityProvider for DummyIdentityProvider {
    async fn verify_session(&self, token: &str) -> ApplicationResult<UserId> {
        if token == PROVIDER_DOWN_TOKEN {
            return Err(ApplicationError::infrastructure("identity provider unreachable"));
        }
        SESSIONS
            .iter()
            .find(|(t, _, _)| *t == token)
            .map(|(_, id, _)| UserId::new(*id).expect("user id"))
            .ok_or_else(|| ApplicationError::unauthorized("invalid session"))
    }

    async fn get_user(&self, id: &UserId) -> ApplicationResult<Option<ProviderUser>> {
        Ok(self.users.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn list_users(&self, limit: u32, offset: u64) -> ApplicationResult<ProviderUserPage> {
        let mut users: Vec<ProviderUser> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = users.len() as u64;
        let users = users
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok(ProviderUserPage { users, total })
    }

    async fn set_role(&self, id: &UserId, role: Role) -> ApplicationResult<ProviderUser> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(id.as_str())
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        user.role = Some(role.as_str().to_string());
        Ok(user.clone())
    }
}
