// src/infrastructure/security/clerk.rs
//! Identity provider backed by Clerk. Session JWTs are verified locally with
//! the instance's PEM public key; user records go through the Backend API.
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::identity::{IdentityProvider, ProviderUser, ProviderUserPage},
};
use crate::domain::access::{Role, UserId};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use reqwest::StatusCode;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ClerkConfig {
    pub api_url: String,
    pub secret_key: String,
    pub jwt_public_key_pem: String,
    pub authorized_parties: Vec<String>,
}

pub struct ClerkIdentityProvider {
    http: reqwest::Client,
    api_url: String,
    secret_key: String,
    decoding_key: DecodingKey,
    authorized_parties: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SessionClaims {
    sub: String,
    #[serde(default)]
    azp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClerkEmail {
    id: String,
    email_address: String,
}

#[derive(Debug, Deserialize)]
struct ClerkUser {
    id: String,
    #[serde(default)]
    email_addresses: Vec<ClerkEmail>,
    #[serde(default)]
    primary_email_address_id: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    public_metadata: Value,
    #[serde(default)]
    private_metadata: Value,
    #[serde(default)]
    created_at: Option<i64>,
    #[serde(default)]
    last_sign_in_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ClerkCount {
    total_count: u64,
}

fn millis(value: Option<i64>) -> Option<DateTime<Utc>> {
    value.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
}

impl TryFrom<ClerkUser> for ProviderUser {
    type Error = ApplicationError;

    fn try_from(user: ClerkUser) -> Result<Self, Self::Error> {
        let email = user
            .primary_email_address_id
            .as_deref()
            .and_then(|primary| user.email_addresses.iter().find(|e| e.id == primary))
            .or_else(|| user.email_addresses.first())
            .map(|e| e.email_address.clone());
        let role = user
            .public_metadata
            .get("role")
            .and_then(Value::as_str)
            .map(str::to_string);
        let permissions = user
            .private_metadata
            .get("permissions")
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ProviderUser {
            id: UserId::new(user.id)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?,
            email,
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
            role,
            permissions,
            created_at: millis(user.created_at),
            last_sign_in_at: millis(user.last_sign_in_at),
        })
    }
}

fn provider_failure(action: &'static str, err: impl std::fmt::Display) -> ApplicationError {
    error!(action, error = %err, "clerk request failed");
    ApplicationError::infrastructure(format!("identity provider unavailable ({action})"))
}

impl ClerkIdentityProvider {
    pub fn new(config: ClerkConfig) -> ApplicationResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(config.jwt_public_key_pem.as_bytes())
            .map_err(|err| ApplicationError::infrastructure(format!("invalid CLERK_JWT_KEY: {err}")))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            secret_key: config.secret_key,
            decoding_key,
            authorized_parties: config.authorized_parties,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Sends the request; `Ok(None)` on 404.
    async fn send<T: DeserializeOwned>(
        &self,
        action: &'static str,
        request: reqwest::RequestBuilder,
    ) -> ApplicationResult<Option<T>> {
        let response = request
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|err| provider_failure(action, err))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(provider_failure(action, format!("status {status}: {body}")));
        }
        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|err| provider_failure(action, err))
    }

    fn check_authorized_party(&self, azp: Option<&str>) -> ApplicationResult<()> {
        if self.authorized_parties.is_empty() {
            return Ok(());
        }
        match azp {
            Some(party) if self.authorized_parties.iter().any(|p| p == party) => Ok(()),
            _ => {
                warn!(azp = ?azp, "session token issued for an unexpected party");
                Err(ApplicationError::unauthorized("invalid session"))
            }
        }
    }
}

#[async_trait]
impl IdentityProvider for ClerkIdentityProvider {
    async fn verify_session(&self, token: &str) -> ApplicationResult<UserId> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_nbf = true;
        let data = decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|err| {
            warn!(error = %err, "session token rejected");
            ApplicationError::unauthorized("invalid session")
        })?;
        self.check_authorized_party(data.claims.azp.as_deref())?;
        UserId::new(data.claims.sub).map_err(|_| ApplicationError::unauthorized("invalid session"))
    }

    async fn get_user(&self, id: &UserId) -> ApplicationResult<Option<ProviderUser>> {
        let request = self.http.get(self.url(&format!("users/{id}")));
        self.send::<ClerkUser>("get_user", request)
            .await?
            .map(ProviderUser::try_from)
            .transpose()
    }

    async fn list_users(&self, limit: u32, offset: u64) -> ApplicationResult<ProviderUserPage> {
        let request = self.http.get(self.url("users")).query(&[
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("order_by", "-created_at".to_string()),
        ]);
        let users = self
            .send::<Vec<ClerkUser>>("list_users", request)
            .await?
            .unwrap_or_default()
            .into_iter()
            .map(ProviderUser::try_from)
            .collect::<ApplicationResult<Vec<_>>>()?;

        let count = self
            .send::<ClerkCount>("count_users", self.http.get(self.url("users/count")))
            .await?
            .map(|c| c.total_count)
            .unwrap_or(users.len() as u64);

        Ok(ProviderUserPage {
            users,
            total: count,
        })
    }

    async fn set_role(&self, id: &UserId, role: Role) -> ApplicationResult<ProviderUser> {
        let request = self
            .http
            .patch(self.url(&format!("users/{id}/metadata")))
            .json(&json!({ "public_metadata": { "role": role.as_str() } }));
        self.send::<ClerkUser>("set_role", request)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user {id}")))
            .and_then(ProviderUser::try_from)
    }
}
