use super::BlogCommandService;
use crate::{
    application::{auth::ensure_permission, dto::AuthenticatedUser, error::ApplicationResult},
    domain::access::Permission,
};
use tracing::info;

pub struct DeletePostCommand {
    pub id: String,
}

impl BlogCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        ensure_permission(actor, Permission::DeleteContent)?;
        let post = self.load(command.id).await?;
        self.posts.delete(&post.id).await?;
        info!(post_id = %post.id, actor = %actor.id, "blog post deleted");
        Ok(())
    }
}
