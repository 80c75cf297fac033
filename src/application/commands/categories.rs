// src/application/commands/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        auth::ensure_permission,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::{IdGenerator, SlugGenerator}},
    },
    domain::{
        access::Permission,
        hierarchy::would_create_cycle,
        category::{Category, CategoryRepository, NewCategory},
        shared::{DocumentId, Slug},
    },
};
use tracing::info;

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
    pub parent_id: Option<Option<String>>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slugger: Arc<dyn SlugGenerator>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
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

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_permission(actor, Permission::ManageCategories)?;

        let slug = self.slug_for(command.slug.as_deref(), &command.name)?;
        self.ensure_slug_free(&slug, None).await?;
        let parent_id = self.resolve_parent(command.parent_id).await?;

        let category = Category::create(
            self.ids.next_id(),
            NewCategory {
                name: command.name,
                slug,
                description: command.description,
                parent_id,
                order: command.order,
                is_active: command.is_active,
            },
            self.clock.now(),
        )?;
        self.repo.insert(&category).await?;
        info!(category_id = %category.id, slug = %category.slug, "category created");
        Ok(category.into())
    }

    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_permission(actor, Permission::ManageCategories)?;

        let id = DocumentId::new(command.id)?;
        let mut category = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        let now = self.clock.now();

        if command.name.is_some() || command.slug.is_some() {
            let name = command.name.unwrap_or_else(|| category.name.clone());
            let slug = self.slug_for(command.slug.as_deref(), &name)?;
            self.ensure_slug_free(&slug, Some(&category.id)).await?;
            category.rename(name, slug, now)?;
        }
        if let Some(description) = command.description {
            category.set_description(description, now)?;
        }
        if let Some(parent) = command.parent_id {
            let parent_id = self.resolve_parent(parent).await?;
            if let Some(parent_id) = &parent_id {
                let all = self.repo.find_all(false).await?;
                if would_create_cycle(&all, &category.id, parent_id) {
                    return Err(ApplicationError::validation(
                        "a category cannot be moved under itself or one of its subcategorys",
                    ));
                }
            }
            category.move_under(parent_id, now)?;
        }
        if let Some(order) = command.order {
            category.set_order(order, now);
        }
        match command.is_active {
            Some(true) => category.activate(now),
            Some(false) => category.deactivate(now),
            None => {}
        }

        self.repo.update(&category).await?;
        Ok(category.into())
    }

    /// Refuses to delete a category that still has children.
    pub async fn delete_category(&self, actor: &AuthenticatedUser, id: String) -> ApplicationResult<()> {
        ensure_permission(actor, Permission::ManageCategories)?;
        let id = DocumentId::new(id)?;
        if self.repo.find_by_id(&id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }
        if !self.repo.find_children(&id).await?.is_empty() {
            return Err(ApplicationError::conflict(
                "category has subcategories; move or delete them first",
            ));
        }
        self.repo.delete(&id).await?;
        info!(category_id = %id, actor = %actor.id, "category deleted");
        Ok(())
    }

    fn slug_for(&self, explicit: Option<&str>, name: &str) -> ApplicationResult<Slug> {
        let source = explicit.filter(|s| !s.trim().is_empty()).unwrap_or(name);
        let slug = self.slugger.slugify(source);
        if slug.is_empty() {
            return Err(ApplicationError::validation("name must contain letters or digits"));
        }
        Ok(Slug::new(slug)?)
    }

    async fn ensure_slug_free(&self, slug: &Slug, owner: Option<&DocumentId>) -> ApplicationResult<()> {
        match self.repo.find_by_slug(slug).await? {
            Some(existing) if Some(&existing.id) != owner => Err(ApplicationError::conflict(
                format!("category slug '{slug}' is already in use"),
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
                "parent category {id} does not exist"
            )));
        }
        Ok(Some(id))
    }
}
