// src/application/commands/services.rs
use std::sync::Arc;

use crate::{
    application::{
        auth::ensure_permission,
        dto::{AuthenticatedUser, ServiceDto},
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::{IdGenerator, SlugGenerator}},
    },
    domain::{
        access::Permission,
        hierarchy::would_create_cycle,
        service::{NewService, Service, ServiceRepository},
        shared::{DocumentId, Slug},
    },
};
use tracing::info;

pub struct CreateServiceCommand {
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub short_description: String,
    pub icon_url: Option<String>,
    pub parent_id: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Default)]
pub struct UpdateServiceCommand {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub icon_url: Option<Option<String>>,
    pub parent_id: Option<Option<String>>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

pub struct ServiceCommandService {
    repo: Arc<dyn ServiceRepository>,
    slugger: Arc<dyn SlugGenerator>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl ServiceCommandService {
    pub fn new(
        repo: Arc<dyn ServiceRepository>,
        slugger: Arc<dyn SlugGenerator>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slugger,
            ids,
            clock,
        }
    }

    pub async fn create_service(
        &self,
        actor: &AuthenticatedUser,
        command: CreateServiceCommand,
    ) -> ApplicationResult<ServiceDto> {
        ensure_permission(actor, Permission::ManageServices)?;

        let source = command
            .slug
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| command.name.clone());
        let slug = self.make_slug(&source)?;
        self.ensure_slug_free(&slug, None).await?;
        let parent_id = self.resolve_parent(command.parent_id).await?;

        let service = Service::create(
            self.ids.next_id(),
            NewService {
                name: command.name,
                slug,
                description: command.description,
                short_description: command.short_description,
                icon_url: command.icon_url,
                parent_id,
                order: command.order,
                is_active: command.is_active,
            },
            self.clock.now(),
        )?;
        self.repo.insert(&service).await?;
        info!(service_id = %service.id, slug = %service.slug, "service created");
        Ok(service.into())
    }

    pub async fn update_service(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateServiceCommand,
    ) -> ApplicationResult<ServiceDto> {
        ensure_permission(actor, Permission::ManageServices)?;

        let id = DocumentId::new(command.id)?;
        let mut service = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("service not found"))?;
        let now = self.clock.now();

        if command.name.is_some() || command.slug.is_some() {
            let name = command.name.unwrap_or_else(|| service.name.clone());
            let source = command
                .slug
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| name.clone());
            let slug = self.make_slug(&source)?;
            self.ensure_slug_free(&slug, Some(&service.id)).await?;
            service.rename(name, slug, now)?;
        }
        if command.description.is_some() || command.short_description.is_some() {
            let description = command
                .description
                .unwrap_or_else(|| service.description.clone());
            let short = command
                .short_description
                .unwrap_or_else(|| service.short_description.clone());
            service.set_description(description, short, now)?;
        }
        if let Some(icon) = command.icon_url {
            service.set_icon(icon, now);
        }
        if let Some(parent) = command.parent_id {
            let parent_id = self.resolve_parent(parent).await?;
            if let Some(parent_id) = &parent_id {
                let all = self.repo.find_all(false).await?;
                if would_create_cycle(&all, &service.id, parent_id) {
                    return Err(ApplicationError::validation(
                        "a service cannot be moved under itself or one of its sub-services",
                    ));
                }
            }
            service.move_under(parent_id, now)?;
        }
        if let Some(order) = command.order {
            service.set_order(order, now);
        }
        match command.is_active {
            Some(true) => service.activate(now),
            Some(false) => service.deactivate(now),
            None => {}
        }

        self.repo.update(&service).await?;
        Ok(service.into())
    }

    pub async fn delete_service(&self, actor: &AuthenticatedUser, id: String) -> ApplicationResult<()> {
        ensure_permission(actor, Permission::ManageServices)?;
        let id = DocumentId::new(id)?;
        if self.repo.find_by_id(&id).await?.is_none() {
            return Err(ApplicationError::not_found("service not found"));
        }
        if !self.repo.find_children(&id).await?.is_empty() {
            return Err(ApplicationError::conflict(
                "service has sub-services; move or delete them first",
            ));
        }
        self.repo.delete(&id).await?;
        info!(service_id = %id, actor = %actor.id, "service deleted");
        Ok(())
    }

    fn make_slug(&self, source: &str) -> ApplicationResult<Slug> {
        let slug = self.slugger.slugify(source);
        if slug.is_empty() {
            return Err(ApplicationError::validation("name must contain letters or digits"));
        }
        Ok(Slug::new(slug)?)
    }

    async fn ensure_slug_free(&self, slug: &Slug, owner: Option<&DocumentId>) -> ApplicationResult<()> {
        match self.repo.find_by_slug(slug).await? {
            Some(existing) if Some(&existing.id) != owner => Err(ApplicationError::conflict(
                format!("service slug '{slug}' is already in use"),
            )),
            _ => Ok(()),
        }
    }

    async fn resolve_parent(&self, raw: Option<String>) -> ApplicationResult<Option<DocumentId>> {
        let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
            return Ok(None);
        };
        let id = DocumentId::new(raw)?;
        if self.repo.find_by_id(&id).await?.is_none() {
            return Err(ApplicationError::validation(format!(
                "parent service {id} does not exist"
            )));
        }
        Ok(Some(id))
    }
}
