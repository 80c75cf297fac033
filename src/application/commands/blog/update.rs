use super::{BlogCommandService, service::format_config};
use crate::{
    application::{
        auth::verify_content_edit_auth,
        dto::{AuthenticatedUser, BlogPostDto},
        error::ApplicationResult,
    },
    domain::blog::PostTitle,
};

/// `None` leaves a field unchanged; `Some(None)` clears optional fields.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostCommand {
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub format_config: Option<(f32, f32)>,
    pub featured_image: Option<Option<String>>,
}

impl BlogCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<BlogPostDto> {
        let mut post = self.load(command.id).await?;
        verify_content_edit_auth(actor, &post.author_id)?;

        let now = self.clock.now();
        let title_changed = match command.title {
            Some(title) => {
                let title = PostTitle::new(title)?;
                let changed = title != post.title;
                post.set_title(title, now);
                changed
            }
            None => false,
        };

        let explicit_slug = command.slug.filter(|s| !s.trim().is_empty());
        if explicit_slug.is_some() || title_changed {
            let source = explicit_slug.unwrap_or_else(|| post.title.as_str().to_string());
            let slug = self
                .slug_service
                .unique_slug(&source, &post.id, Some(&post.id))
                .await?;
            post.set_slug(slug, now);
        }

        if let Some(excerpt) = command.excerpt {
            post.set_excerpt(excerpt, now)?;
        }
        if let Some(content) = command.content {
            post.set_content(content, now)?;
        }
        if let Some(category) = command.category_id {
            let category_id = self.resolve_category(category).await?;
            post.set_category(category_id, now);
        }
        if let Some(tags) = command.tags {
            post.set_tags(tags, now);
        }
        if command.format_config.is_some() {
            post.set_format_config(format_config(command.format_config)?, now);
        }
        if let Some(image) = command.featured_image {
            post.set_featured_image(image, now);
        }

        self.posts.update(&post).await?;
        Ok(post.into())
    }
}
