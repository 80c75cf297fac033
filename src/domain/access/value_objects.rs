use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Identity assigned by the external auth provider (e.g. `user_2abc...`).
/// Only ASCII letters, digits, `_` and `-`; it is embedded in provider URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("user id cannot be empty".into()));
        }
        let allowed = |b: u8| b.is_ascii_alphanumeric() || b == b'_' || b == b'-';
        if value.len() > 128 || !value.bytes().all(allowed) {
            return Err(DomainError::Validation(format!("invalid user id '{value}'")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}
