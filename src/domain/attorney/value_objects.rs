use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::required_text;
use regex::Regex;
use std::{fmt, sync::OnceLock};

/// Mail domains owned by the firm; attorney addresses must use one of them.
pub const FIRM_EMAIL_DOMAINS: [&str; 2] = ["altumlegal.mx", "altum-legal.mx"];

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static LINKEDIN_RE: OnceLock<Regex> = OnceLock::new();

fn compile(cell: &'static OnceLock<Regex>, name: &str, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern).unwrap_or_else(|error| panic!("{name} regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    compile(&EMAIL_RE, "email", r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
}

fn phone_regex() -> &'static Regex {
    compile(&PHONE_RE, "phone", r"^\+?[0-9\s\-()]{10,20}$")
}

fn linkedin_regex() -> &'static Regex {
    compile(
        &LINKEDIN_RE,
        "linkedin",
        r"^https?://(www\.)?linkedin\.com/in/[A-Za-z0-9_-]+/?$",
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("name", value, 2, 100).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(String);

impl Position {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("position", value, 2, 100).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FirmEmail(String);

impl FirmEmail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        if !email_regex().is_match(&value) {
            return Err(DomainError::Validation(format!("'{value}' is not a valid email")));
        }
        let domain = value.rsplit('@').next().unwrap_or_default();
        if !FIRM_EMAIL_DOMAINS.contains(&domain) {
            return Err(DomainError::Validation(format!(
                "email must belong to the firm (@{})",
                FIRM_EMAIL_DOMAINS.join(" or @")
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if !phone_regex().is_match(&value) {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a valid phone number"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedInUrl(String);

impl LinkedInUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if !linkedin_regex().is_match(&value) {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a LinkedIn profile URL"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearsOfExperience(u8);

impl YearsOfExperience {
    pub const MAX: i64 = 60;

    pub fn new(value: i64) -> DomainResult<Self> {
        if !(0..=Self::MAX).contains(&value) {
            return Err(DomainError::Validation(format!(
                "years of experience must be between 0 and {}",
                Self::MAX
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_must_use_firm_domain() {
        assert!(FirmEmail::new("maria@altumlegal.mx").is_ok());
        assert!(FirmEmail::new("Maria@Altum-Legal.MX").is_ok());
        for bad in [
            "maria@gmail.com",
            "maria@altumlegal.mx.evil.com",
            "maria@notaltumlegal.mx",
            "maria@sub.altumlegal.mx",
            "maria",
            "",
        ] {
            assert!(FirmEmail::new(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn phone_and_linkedin_formats() {
        assert!(PhoneNumber::new("+52 (55) 1234-5678").is_ok());
        assert!(PhoneNumber::new("12345").is_err());
        assert!(LinkedInUrl::new("https://www.linkedin.com/in/maria-vasquez/").is_ok());
        assert!(LinkedInUrl::new("https://twitter.com/maria").is_err());
    }

    #[test]
    fn experience_range() {
        assert!(YearsOfExperience::new(0).is_ok());
        assert!(YearsOfExperience::new(60).is_ok());
        assert!(YearsOfExperience::new(61).is_err());
        assert!(YearsOfExperience::new(-1).is_err());
    }
}
