use std::sync::Arc;

use crate::{
    application::{
        auth::ensure_permission,
        dto::{AuthenticatedUser, LegalContentDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        access::Permission,
        legal::{LegalContent, LegalContentRepository},
        shared::Slug,
    },
};

pub struct UpsertLegalContentCommand {
    pub key: String,
    pub title: String,
    pub content: String,
}

pub struct LegalCommandService {
    repo: Arc<dyn LegalContentRepository>,
    clock: Arc<dyn Clock>,
}

impl LegalCommandService {
    pub fn new(repo: Arc<dyn LegalContentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn upsert(
        &self,
        actor: &AuthenticatedUser,
        command: UpsertLegalContentCommand,
    ) -> ApplicationResult<LegalContentDto> {
        ensure_permission(actor, Permission::ManageLegalContent)?;
        let content = LegalContent::new(
            Slug::new(command.key)?,
            command.title,
            command.content,
            actor.id.clone(),
            self.clock.now(),
        )?;
        self.repo.upsert(&content).await?;
        Ok(content.into())
    }
}
