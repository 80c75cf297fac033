// src/domain/shared.rs
//! Value objects shared by every aggregate: document ids, slugs, offset
//! pagination and the small text normalisers entities lean on.
use crate::domain::errors::{DomainError, DomainResult};
use regex::Regex;
use std::{collections::HashSet, fmt, sync::OnceLock};

/// Textual form of a persisted document id (24 lowercase hex characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    pub const LEN: usize = 24;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_ascii_lowercase();
        if value.len() != Self::LEN || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DomainError::Validation(format!("invalid document id '{value}'")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last six hex characters, used to disambiguate colliding slugs.
    pub fn short_suffix(&self) -> &str {
        &self.0[Self::LEN - 6..]
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_regex() -> &'static Regex {
    SLUG_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$")
            .unwrap_or_else(|error| panic!("slug regex failed to compile: {error}"))
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub const MAX_LEN: usize = 200;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "slug must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        if !slug_regex().is_match(&value) {
            return Err(DomainError::Validation(format!(
                "slug '{value}' may only contain lowercase letters, digits and single hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shorten a generated slug base so `reserve` more characters still fit,
    /// cutting at the last hyphen inside the limit when there is one.
    pub fn fit_base(base: &str, reserve: usize) -> String {
        let max = Self::MAX_LEN.saturating_sub(reserve);
        if base.chars().count() <= max {
            return base.to_string();
        }
        let cut: String = base.chars().take(max).collect();
        let whole_words = base.chars().nth(max) == Some('-');
        let cut = match cut.rfind('-') {
            Some(at) if !whole_words && at > 0 => cut[..at].to_string(),
            _ => cut,
        };
        cut.trim_end_matches('-').to_string()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Offset/limit page request. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    /// Out-of-range values are clamped rather than rejected.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = match limit {
            None | Some(0) => Self::DEFAULT_LIMIT,
            Some(value) => value.min(Self::MAX_LIMIT),
        };
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.request.limit()))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.request.page()) < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.request.page() > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}

/// Trim a required string and enforce a character-count window.
pub fn required_text(field: &str, value: impl Into<String>, min: usize, max: usize) -> DomainResult<String> {
    let value = value.into().trim().to_string();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    let length = value.chars().count();
    if length < min {
        return Err(DomainError::Validation(format!(
            "{field} must be at least {min} characters long"
        )));
    }
    if length > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters long"
        )));
    }
    Ok(value)
}

/// Trim an optional free-text field and enforce its upper bound.
pub fn bounded_text(field: &str, value: impl Into<String>, max: usize) -> DomainResult<String> {
    let value = value.into().trim().to_string();
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters long"
        )));
    }
    Ok(value)
}

pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim entries, drop blanks and case-insensitive duplicates, keep order.
pub fn normalize_list(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.to_lowercase()))
        .collect()
}

pub fn parse_ids(values: Vec<String>) -> DomainResult<Vec<DocumentId>> {
    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(values.len());
    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        let id = DocumentId::new(value)?;
        if seen.insert(id.clone()) {
            ids.push(id);
        }
    }
    Ok(ids)
}
