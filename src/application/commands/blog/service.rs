// src/application/commands/blog/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::IdGenerator},
    },
    domain::{
        blog::{BlogPost, BlogPostRepository, FormatConfig, PostSlugService},
        category::CategoryRepository,
        shared::DocumentId,
    },
};

pub struct BlogCommandService {
    pub(super) posts: Arc<dyn BlogPostRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        posts: Arc<dyn BlogPostRepository>,
        categories: Arc<dyn CategoryRepository>,
        slug_service: Arc<PostSlugService>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            categories,
            slug_service,
            ids,
            clock,
        }
    }

    pub(super) async fn load(&self, id: String) -> ApplicationResult<BlogPost> {
        let id = DocumentId::new(id)?;
        self.posts
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    /// Parse and check that the referenced category exists.
    pub(super) async fn resolve_category(
        &self,
        raw: Option<String>,
    ) -> ApplicationResult<Option<DocumentId>> {
        let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
            return Ok(None);
        };
        let id = DocumentId::new(raw)?;
        if self.categories.find_by_id(&id).await?.is_none() {
            return Err(ApplicationError::validation(format!(
                "category {id} does not exist"
            )));
        }
        Ok(Some(id))
    }
}

pub(super) fn format_config(raw: Option<(f32, f32)>) -> ApplicationResult<FormatConfig> {
    match raw {
        Some((line_height, paragraph_spacing)) => {
            Ok(FormatConfig::new(line_height, paragraph_spacing)?)
        }
        None => Ok(FormatConfig::default()),
    }
}
