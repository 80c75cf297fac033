use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::required_text;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("title", value, 1, 200).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "DRAFT",
            PostStatus::Published => "PUBLISHED",
            PostStatus::Scheduled => "SCHEDULED",
            PostStatus::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(PostStatus::Draft),
            "PUBLISHED" => Ok(PostStatus::Published),
            "SCHEDULED" => Ok(PostStatus::Scheduled),
            "ARCHIVED" => Ok(PostStatus::Archived),
            other => Err(DomainError::Validation(format!("unknown post status '{other}'"))),
        }
    }
}

/// Typography settings the editor stores alongside the HTML body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatConfig {
    line_height: f32,
    paragraph_spacing: f32,
}

impl FormatConfig {
    pub const DEFAULT_LINE_HEIGHT: f32 = 1.6;
    pub const DEFAULT_PARAGRAPH_SPACING: f32 = 1.5;

    pub fn new(line_height: f32, paragraph_spacing: f32) -> DomainResult<Self> {
        if !(1.0..=3.0).contains(&line_height) {
            return Err(DomainError::Validation(
                "line height must be between 1.0 and 3.0".into(),
            ));
        }
        if !(0.0..=5.0).contains(&paragraph_spacing) {
            return Err(DomainError::Validation(
                "paragraph spacing must be between 0.0 and 5.0".into(),
            ));
        }
        Ok(Self {
            line_height,
            paragraph_spacing,
        })
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn paragraph_spacing(&self) -> f32 {
        self.paragraph_spacing
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            line_height: Self::DEFAULT_LINE_HEIGHT,
            paragraph_spacing: Self::DEFAULT_PARAGRAPH_SPACING,
        }
    }
}

/// Lowercase, trim and de-duplicate tags, keeping first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
