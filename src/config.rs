// src/config.rs
use crate::infrastructure::security::ClerkConfig;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    mongodb_uri: String,
    mongodb_db: String,
    listen_addr: String,
    clerk: ClerkConfig,
    blob_token: Option<String>,
    blob_api_url: String,
    allowed_origins: Vec<String>,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_mongodb_uri() -> String {
    "mongodb://localhost:27017".into()
}

fn default_mongodb_db() -> String {
    "altum_legal".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_clerk_api_url() -> String {
    "https://api.clerk.com/v1".into()
}

fn default_blob_api_url() -> String {
    "https://blob.vercel-storage.com".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

fn comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.trim_end_matches('/').to_string())
        .collect()
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

/// PEM keys pasted into a single-line env var usually carry literal `\n`.
fn normalize_pem(raw: &str) -> Result<String, ConfigError> {
    let pem = raw.replace("\\n", "\n");
    if !pem.trim_start().starts_with("-----BEGIN") {
        return Err(ConfigError::Invalid(
            "CLERK_JWT_KEY must be a PEM encoded public key".into(),
        ));
    }
    Ok(pem)
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let clerk = ClerkConfig {
            api_url: optional("CLERK_API_URL")
                .unwrap_or_else(default_clerk_api_url)
                .trim_end_matches('/')
                .to_string(),
            secret_key: required("CLERK_SECRET_KEY")?,
            jwt_public_key_pem: normalize_pem(&required("CLERK_JWT_KEY")?)?,
            authorized_parties: optional("CLERK_AUTHORIZED_PARTIES")
                .map(|v| comma_list(&v))
                .unwrap_or_default(),
        };

        let rate_limit_enabled = match optional("RATE_LIMIT_ENABLED") {
            Some(value) => parse_flag("RATE_LIMIT_ENABLED", &value)?,
            None => true,
        };

        Ok(Self {
            mongodb_uri: optional("MONGODB_URI").unwrap_or_else(default_mongodb_uri),
            mongodb_db: optional("MONGODB_DB").unwrap_or_else(default_mongodb_db),
            listen_addr: optional("LISTEN_ADDR").unwrap_or_else(default_listen_addr),
            clerk,
            blob_token: optional("BLOB_READ_WRITE_TOKEN"),
            blob_api_url: optional("BLOB_API_URL").unwrap_or_else(default_blob_api_url),
            allowed_origins: optional("ALLOWED_ORIGINS")
                .map(|v| comma_list(&v))
                .unwrap_or_else(default_allowed_origins),
            rate_limit_enabled,
        })
    }

    pub fn mongodb_uri(&self) -> &str {
        &self.mongodb_uri
    }

    pub fn mongodb_db(&self) -> &str {
        &self.mongodb_db
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn clerk(&self) -> &ClerkConfig {
        &self.clerk
    }

    /// `None` disables uploads.
    pub fn blob_token(&self) -> Option<&str> {
        self.blob_token.as_deref()
    }

    pub fn blob_api_url(&self) -> &str {
        &self.blob_api_url
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}
