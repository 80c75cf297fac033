// src/domain/legal/mod.rs
//! Editable legal pages (privacy notice, terms of use), keyed by slug.
use crate::domain::access::UserId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{Slug, required_text};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub const TITLE_MAX: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct LegalContent {
    pub key: Slug,
    pub title: String,
    pub content: String,
    pub updated_by: UserId,
    pub updated_at: DateTime<Utc>,
}

impl LegalContent {
    pub fn new(
        key: Slug,
        title: String,
        content: String,
        updated_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if content.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self {
            key,
            title: required_text("title", title, 1, TITLE_MAX)?,
            content,
            updated_by,
            updated_at,
        })
    }
}

#[async_trait]
pub trait LegalContentRepository: Send + Sync {
    async fn find_by_key(&self, key: &Slug) -> DomainResult<Option<LegalContent>>;
    /// Insert or replace the page stored under `content.key`.
    async fn upsert(&self, content: &LegalContent) -> DomainResult<()>;
}
