// src/domain/blog/entity.rs
use crate::domain::access::UserId;
use crate::domain::blog::value_objects::{FormatConfig, PostStatus, PostTitle, normalize_tags};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{DocumentId, Slug, bounded_text, optional_text};
use ammonia::Builder;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub const EXCERPT_MAX: usize = 500;
pub const WORDS_PER_MINUTE: usize = 200;

/// Validated inputs for a new post. Status defaults to draft.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub author_id: UserId,
    pub category_id: Option<DocumentId>,
    pub tags: Vec<String>,
    pub status: Option<PostStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub format_config: FormatConfig,
    pub featured_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: DocumentId,
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub author_id: UserId,
    pub category_id: Option<DocumentId>,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: u64,
    pub format_config: FormatConfig,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editor HTML is sanitized before it is stored.
fn validate_content(content: String) -> DomainResult<String> {
    let cleaned = ammonia::clean(&content);
    if plain_text(&cleaned).trim().is_empty() {
        return Err(DomainError::Validation("content cannot be empty".into()));
    }
    Ok(cleaned)
}

impl BlogPost {
    pub fn create(id: DocumentId, input: NewBlogPost, now: DateTime<Utc>) -> DomainResult<Self> {
        let status = input.status.unwrap_or_default();
        let published_at = match status {
            PostStatus::Published => Some(input.published_at.unwrap_or(now)),
            PostStatus::Scheduled => match input.published_at {
                Some(at) if at > now => Some(at),
                _ => {
                    return Err(DomainError::Validation(
                        "scheduled posts need a future publication date".into(),
                    ));
                }
            },
            PostStatus::Draft | PostStatus::Archived => input.published_at,
        };

        Ok(Self {
            id,
            title: input.title,
            slug: input.slug,
            excerpt: bounded_text("excerpt", input.excerpt, EXCERPT_MAX)?,
            content: validate_content(input.content)?,
            author_id: input.author_id,
            category_id: input.category_id,
            tags: normalize_tags(input.tags),
            status,
            published_at,
            view_count: 0,
            format_config: input.format_config,
            featured_image: optional_text(input.featured_image),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Published;
        self.published_at = match self.published_at {
            Some(at) if at <= now => Some(at),
            _ => Some(now),
        };
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        match self.status {
            PostStatus::Published | PostStatus::Scheduled => {
                self.status = PostStatus::Draft;
                self.published_at = None;
                self.updated_at = now;
                Ok(())
            }
            other => Err(DomainError::Validation(format!(
                "cannot unpublish a post in {other} state"
            ))),
        }
    }

    pub fn schedule(&mut self, at: DateTime<Utc>, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != PostStatus::Draft {
            return Err(DomainError::Validation(format!(
                "only drafts can be scheduled, post is {}",
                self.status
            )));
        }
        if at <= now {
            return Err(DomainError::Validation(
                "scheduled publication date must be in the future".into(),
            ));
        }
        self.status = PostStatus::Scheduled;
        self.published_at = Some(at);
        self.updated_at = now;
        Ok(())
    }

    pub fn archive(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == PostStatus::Archived {
            return Err(DomainError::Validation("post is already archived".into()));
        }
        self.status = PostStatus::Archived;
        self.updated_at = now;
        Ok(())
    }

    pub fn increment_view_count(&mut self) {
        self.view_count = self.view_count.saturating_add(1);
    }

    pub fn set_title(&mut self, title: PostTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_excerpt(&mut self, excerpt: String, now: DateTime<Utc>) -> DomainResult<()> {
        self.excerpt = bounded_text("excerpt", excerpt, EXCERPT_MAX)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_content(&mut self, content: String, now: DateTime<Utc>) -> DomainResult<()> {
        self.content = validate_content(content)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_category(&mut self, category_id: Option<DocumentId>, now: DateTime<Utc>) {
        self.category_id = category_id;
        self.updated_at = now;
    }

    pub fn set_tags(&mut self, tags: Vec<String>, now: DateTime<Utc>) {
        self.tags = normalize_tags(tags);
        self.updated_at = now;
    }

    pub fn set_format_config(&mut self, format_config: FormatConfig, now: DateTime<Utc>) {
        self.format_config = format_config;
        self.updated_at = now;
    }

    pub fn set_featured_image(&mut self, image: Option<String>, now: DateTime<Utc>) {
        self.featured_image = optional_text(image);
        self.updated_at = now;
    }

    /// Published posts, plus scheduled posts whose date has passed.
    pub fn is_publicly_visible(&self, now: DateTime<Utc>) -> bool {
        match self.status {
            PostStatus::Published => true,
            PostStatus::Scheduled => self.published_at.is_some_and(|at| at <= now),
            PostStatus::Draft | PostStatus::Archived => false,
        }
    }

    pub fn reading_time_minutes(&self) -> u32 {
        let words = plain_text(&self.content).split_whitespace().count();
        let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

/// Visible text of an HTML fragment. Script and style bodies are dropped and
/// every tag boundary counts as a word break.
fn plain_text(html: &str) -> String {
    let spaced = html.replace('<', " <");
    Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(&spaced)
        .to_string()
        .replace("&nbsp;", " ")
}
