// src/domain/service/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::hierarchy::Hierarchy;
use crate::domain::shared::{DocumentId, Slug, bounded_text, optional_text, required_text};
use chrono::{DateTime, Utc};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 120;
pub const DESCRIPTION_MAX: usize = 2000;
pub const SHORT_DESCRIPTION_MAX: usize = 200;

#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub short_description: String,
    pub icon_url: Option<String>,
    pub parent_id: Option<DocumentId>,
    pub order: i32,
    pub is_active: bool,
}

/// Practice area. Services form the tree shown on the public site and drive
/// attorney matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: DocumentId,
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub short_description: String,
    pub icon_url: Option<String>,
    pub parent_id: Option<DocumentId>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn create(id: DocumentId, input: NewService, now: DateTime<Utc>) -> DomainResult<Self> {
        if input.parent_id.as_ref() == Some(&id) {
            return Err(DomainError::Validation(
                "a service cannot be its own parent".into(),
            ));
        }
        Ok(Self {
            name: required_text("name", input.name, NAME_MIN, NAME_MAX)?,
            description: bounded_text("description", input.description, DESCRIPTION_MAX)?,
            short_description: bounded_text(
                "short description",
                input.short_description,
                SHORT_DESCRIPTION_MAX,
            )?,
            icon_url: optional_text(input.icon_url),
            slug: input.slug,
            parent_id: input.parent_id,
            order: input.order,
            is_active: input.is_active,
            id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_subservice(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn rename(&mut self, name: String, slug: Slug, now: DateTime<Utc>) -> DomainResult<()> {
        self.name = required_text("name", name, NAME_MIN, NAME_MAX)?;
        self.slug = slug;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_description(
        &mut self,
        description: String,
        short_description: String,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.description = bounded_text("description", description, DESCRIPTION_MAX)?;
        self.short_description =
            bounded_text("short description", short_description, SHORT_DESCRIPTION_MAX)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_icon(&mut self, icon_url: Option<String>, now: DateTime<Utc>) {
        self.icon_url = optional_text(icon_url);
        self.updated_at = now;
    }

    pub fn move_under(
        &mut self,
        parent_id: Option<DocumentId>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if parent_id.as_ref() == Some(&self.id) {
            return Err(DomainError::Validation(
                "a service cannot be its own parent".into(),
            ));
        }
        self.parent_id = parent_id;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_order(&mut self, order: i32, now: DateTime<Utc>) {
        self.order = order;
        self.updated_at = now;
    }

    pub fn activate(&mut self, now: DateTime<Utc>) {
        self.is_active = true;
        self.updated_at = now;
    }

    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }
}

impl Hierarchy for Service {
    fn node_id(&self) -> &DocumentId {
        &self.id
    }

    fn parent(&self) -> Option<&DocumentId> {
        self.parent_id.as_ref()
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewService {
        NewService {
            name: "Derecho Corporativo".into(),
            slug: Slug::new("derecho-corporativo").unwrap(),
            description: String::new(),
            short_description: "Asesoría a empresas".into(),
            icon_url: None,
            parent_id: None,
            order: 1,
            is_active: true,
        }
    }

    #[test]
    fn name_bounds() {
        let id = DocumentId::new("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let mut short = input();
        short.name = "D".into();
        assert!(Service::create(id.clone(), short, Utc::now()).is_err());
        assert!(Service::create(id, input(), Utc::now()).is_ok());
    }

    #[test]
    fn short_description_bound() {
        let id = DocumentId::new("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let mut long = input();
        long.short_description = "x".repeat(SHORT_DESCRIPTION_MAX + 1);
        assert!(Service::create(id, long, Utc::now()).is_err());
    }
}
