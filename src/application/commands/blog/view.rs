use super::BlogCommandService;
use crate::{
    application::{
        dto::ViewCountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::shared::Slug,
};

impl BlogCommandService {
    /// Public endpoint; only visible posts count views.
    pub async fn record_view(&self, slug: String) -> ApplicationResult<ViewCountDto> {
        let slug = Slug::new(slug)?;
        let post = self
            .posts
            .find_by_slug(&slug)
            .await?
            .filter(|p| p.is_publicly_visible(self.clock.now()))
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let view_count = self
            .posts
            .increment_view_count(&post.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(ViewCountDto { view_count })
    }
}
