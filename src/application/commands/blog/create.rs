// src/application/commands/blog/create.rs
use super::{BlogCommandService, service::format_config};
use crate::{
    application::{
        auth::ensure_permission,
        dto::{AuthenticatedUser, BlogPostDto},
        error::ApplicationResult,
    },
    domain::{
        access::Permission,
        blog::{BlogPost, NewBlogPost, PostStatus, PostTitle},
    },
};
use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct CreatePostCommand {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub category_id: Option<String>,
    pub tags: Vec<String>,
    pub status: Option<PostStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub format_config: Option<(f32, f32)>,
    pub featured_image: Option<String>,
}

impl BlogCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<BlogPostDto> {
        ensure_permission(actor, Permission::CreateContent)?;
        if matches!(
            command.status,
            Some(PostStatus::Published | PostStatus::Scheduled)
        ) {
            ensure_permission(actor, Permission::PublishContent)?;
        }

        let title = PostTitle::new(command.title)?;
        let format_config = format_config(command.format_config)?;
        let category_id = self.resolve_category(command.category_id).await?;
        let id = self.ids.next_id();
        let source = command
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| title.as_str().to_string());
        let slug = self.slug_service.unique_slug(&source, &id, None).await?;

        let post = BlogPost::create(
            id,
            NewBlogPost {
                title,
                slug,
                excerpt: command.excerpt,
                content: command.content,
                author_id: actor.id.clone(),
                category_id,
                tags: command.tags,
                status: command.status,
                published_at: command.published_at,
                format_config,
                featured_image: command.featured_image,
            },
            self.clock.now(),
        )?;

        self.posts.insert(&post).await?;
        info!(post_id = %post.id, slug = %post.slug, author = %actor.id, "blog post created");
        Ok(post.into())
    }
}
