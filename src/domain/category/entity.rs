// src/domain/category/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::hierarchy::Hierarchy;
use crate::domain::shared::{DocumentId, Slug, bounded_text, optional_text, required_text};
use chrono::{DateTime, Utc};

pub const NAME_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 500;

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub parent_id: Option<DocumentId>,
    pub order: i32,
    pub is_active: bool,
}

/// Blog category. Categories nest through `parent_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: DocumentId,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub parent_id: Option<DocumentId>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_parent(id: &DocumentId, parent_id: Option<&DocumentId>) -> DomainResult<()> {
    if parent_id == Some(id) {
        return Err(DomainError::Validation(
            "a category cannot be its own parent".into(),
        ));
    }
    Ok(())
}

fn validate_description(description: Option<String>) -> DomainResult<Option<String>> {
    optional_text(description)
        .map(|d| bounded_text("description", d, DESCRIPTION_MAX))
        .transpose()
}

impl Category {
    pub fn create(id: DocumentId, input: NewCategory, now: DateTime<Utc>) -> DomainResult<Self> {
        check_parent(&id, input.parent_id.as_ref())?;
        Ok(Self {
            name: required_text("name", input.name, 1, NAME_MAX)?,
            description: validate_description(input.description)?,
            slug: input.slug,
            parent_id: input.parent_id,
            order: input.order,
            is_active: input.is_active,
            id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_subcategory(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn rename(&mut self, name: String, slug: Slug, now: DateTime<Utc>) -> DomainResult<()> {
        self.name = required_text("name", name, 1, NAME_MAX)?;
        self.slug = slug;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_description(
        &mut self,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.description = validate_description(description)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn move_under(
        &mut self,
        parent_id: Option<DocumentId>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        check_parent(&self.id, parent_id.as_ref())?;
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

impl Hierarchy for Category {
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

    fn sample(now: DateTime<Utc>) -> Category {
        Category::create(
            DocumentId::new("65a1f0c2e4b0a1b2c3d4e5f6").unwrap(),
            NewCategory {
                name: "Fiscal".into(),
                slug: Slug::new("fiscal").unwrap(),
                description: Some("  ".into()),
                parent_id: None,
                order: 0,
                is_active: true,
            },
            now,
        )
        .unwrap()
    }

    #[test]
    fn subcategory_follows_parent() {
        let now = Utc::now();
        let mut category = sample(now);
        assert!(!category.is_subcategory());
        assert!(category.description.is_none());

        let parent = DocumentId::new("65a1f0c2e4b0a1b2c3d4e5f7").unwrap();
        category.move_under(Some(parent), now).unwrap();
        assert!(category.is_subcategory());
    }

    #[test]
    fn cannot_parent_itself() {
        let now = Utc::now();
        let mut category = sample(now);
        let own = category.id.clone();
        assert!(category.move_under(Some(own), now).is_err());
    }

    #[test]
    fn mutators_bump_updated_at() {
        let now = Utc::now();
        let mut category = sample(now);
        let later = now + chrono::Duration::seconds(30);
        category.deactivate(later);
        assert!(!category.is_active);
        assert_eq!(category.updated_at, later);
        assert!(category.rename(String::new(), Slug::new("x").unwrap(), later).is_err());
    }
}
