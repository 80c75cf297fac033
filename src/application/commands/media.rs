// src/application/commands/media.rs
//! Media uploads. Every check runs before the storage call.
use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    application::{
        auth::ensure_permission,
        dto::{AuthenticatedUser, UploadResultDto},
        error::{ApplicationError, ApplicationResult},
        ports::{storage::BlobStorage, time::Clock, util::SlugGenerator},
    },
    domain::access::Permission,
};
use bytes::Bytes;
use tracing::info;

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const MAX_PDF_BYTES: u64 = 10 * 1024 * 1024;

const ALLOWED_TYPES: [(&str, &str); 6] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
    ("image/svg+xml", "svg"),
    ("application/pdf", "pdf"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaCategory {
    Attorneys,
    Blog,
    Services,
    #[default]
    General,
}

impl MediaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Attorneys => "attorneys",
            MediaCategory::Blog => "blog",
            MediaCategory::Services => "services",
            MediaCategory::General => "general",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaCategory {
    type Err = ApplicationError;

    fn from_str(s: &str) -> ApplicationResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attorneys" => Ok(MediaCategory::Attorneys),
            "blog" => Ok(MediaCategory::Blog),
            "services" => Ok(MediaCategory::Services),
            "general" | "" => Ok(MediaCategory::General),
            other => Err(ApplicationError::validation(format!(
                "unknown upload category '{other}'"
            ))),
        }
    }
}

pub struct UploadMediaCommand {
    pub filename: String,
    pub content_type: String,
    pub category: Option<String>,
    pub body: Bytes,
}

/// Check type and size; returns the file extension to store under.
pub fn validate_upload(content_type: &str, size: u64) -> ApplicationResult<&'static str> {
    if size == 0 {
        return Err(ApplicationError::validation("file is empty"));
    }
    let content_type = content_type.trim().to_ascii_lowercase();
    let extension = ALLOWED_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
        .ok_or_else(|| {
            ApplicationError::validation(format!("file type '{content_type}' is not allowed"))
        })?;

    let limit = if extension == "pdf" {
        MAX_PDF_BYTES
    } else {
        MAX_IMAGE_BYTES
    };
    if size > limit {
        return Err(ApplicationError::validation(format!(
            "file exceeds the {} MB limit",
            limit / (1024 * 1024)
        )));
    }
    Ok(extension)
}

/// `{category}/{unix-millis}-{stem}.{ext}`
pub fn build_pathname(category: MediaCategory, millis: i64, stem: &str, extension: &str) -> String {
    let stem = if stem.is_empty() { "archivo" } else { stem };
    format!("{category}/{millis}-{stem}.{extension}")
}

/// Recover `(filename, category)` from a stored pathname.
pub fn parse_pathname(pathname: &str) -> (String, String) {
    let (category, file) = pathname.rsplit_once('/').unwrap_or(("general", pathname));
    let filename = match file.split_once('-') {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) => {
            rest
        }
        _ => file,
    };
    (filename.to_string(), category.to_string())
}

pub struct MediaCommandService {
    storage: Option<Arc<dyn BlobStorage>>,
    slugger: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl MediaCommandService {
    pub fn new(
        storage: Option<Arc<dyn BlobStorage>>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            slugger,
            clock,
        }
    }

    pub async fn upload(
        &self,
        actor: &AuthenticatedUser,
        command: UploadMediaCommand,
    ) -> ApplicationResult<UploadResultDto> {
        ensure_permission(actor, Permission::UploadMedia)?;

        let size = command.body.len() as u64;
        let extension = validate_upload(&command.content_type, size)?;
        let category = command
            .category
            .as_deref()
            .map(MediaCategory::from_str)
            .transpose()?
            .unwrap_or_default();

        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| ApplicationError::infrastructure("blob storage is not configured"))?;

        let stem = command
            .filename
            .rsplit_once('.')
            .map_or(command.filename.as_str(), |(stem, _)| stem);
        let stem = self.slugger.slugify(stem);
        let pathname = build_pathname(
            category,
            self.clock.now().timestamp_millis(),
            &stem,
            extension,
        );

        let stored = storage
            .put(&pathname, &command.content_type, command.body)
            .await?;
        let (filename, category) = parse_pathname(&stored.pathname);
        info!(pathname = %stored.pathname, size, actor = %actor.id, "media uploaded");

        Ok(UploadResultDto {
            url: stored.url,
            filename,
            size,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_limits_depend_on_type() {
        assert_eq!(validate_upload("image/png", 1024).unwrap(), "png");
        assert!(validate_upload("image/png", MAX_IMAGE_BYTES + 1).is_err());
        assert_eq!(validate_upload("application/pdf", MAX_IMAGE_BYTES + 1).unwrap(), "pdf");
        assert!(validate_upload("application/pdf", MAX_PDF_BYTES + 1).is_err());
    }

    #[test]
    fn rejects_empty_and_unknown_types() {
        assert!(validate_upload("image/png", 0).is_err());
        assert!(validate_upload("application/zip", 10).is_err());
        assert_eq!(validate_upload("IMAGE/SVG+XML", 10).unwrap(), "svg");
    }

    #[test]
    fn pathname_roundtrip() {
        let path = build_pathname(MediaCategory::Attorneys, 1_700_000_000_000, "maria-vasquez", "jpg");
        assert_eq!(path, "attorneys/1700000000000-maria-vasquez.jpg");
        assert_eq!(
            parse_pathname(&path),
            ("maria-vasquez.jpg".to_string(), "attorneys".to_string())
        );
        assert_eq!(
            parse_pathname("logo.png"),
            ("logo.png".to_string(), "general".to_string())
        );
    }

    #[test]
    fn category_parsing() {
        assert_eq!("Blog".parse::<MediaCategory>().unwrap(), MediaCategory::Blog);
        assert!("videos".parse::<MediaCategory>().is_err());
    }
}
