use super::BlogCommandService;
use crate::{
    application::{
        auth::{ensure_permission, verify_content_edit_auth},
        dto::{AuthenticatedUser, BlogPostDto},
        error::ApplicationResult,
    },
    domain::access::Permission,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum PostStatusAction {
    Publish,
    Unpublish,
    Schedule {
        #[serde(rename = "scheduledAt")]
        scheduled_at: DateTime<Utc>,
    },
    Archive,
}

pub struct ChangePostStatusCommand {
    pub id: String,
    pub action: PostStatusAction,
}

impl BlogCommandService {
    pub async fn change_status(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePostStatusCommand,
    ) -> ApplicationResult<BlogPostDto> {
        ensure_permission(actor, Permission::PublishContent)?;
        let mut post = self.load(command.id).await?;
        verify_content_edit_auth(actor, &post.author_id)?;

        let now = self.clock.now();
        match command.action {
            PostStatusAction::Publish => post.publish(now),
            PostStatusAction::Unpublish => post.unpublish(now)?,
            PostStatusAction::Schedule { scheduled_at } => post.schedule(scheduled_at, now)?,
            PostStatusAction::Archive => post.archive(now)?,
        }

        self.posts.update(&post).await?;
        Ok(post.into())
    }
}
