// src/infrastructure/repositories/mongo_category.rs
use super::common::{document_id, find_many, from_bson_time, oid, to_bson_time};
use super::error::{corrupt, map_mongo};
use crate::domain::category::{Category, CategoryRepository, NewCategory};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{DocumentId, Slug};
use crate::infrastructure::database::CATEGORIES;
use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{self, Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

const ENTITY: &str = "category";

#[derive(Clone)]
pub struct MongoCategoryRepository {
    collection: Collection<CategoryDocument>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(CATEGORIES),
        }
    }

    async fn list(&self, filter: Document) -> DomainResult<Vec<Category>> {
        find_many(&self.collection, filter, doc! { "order": 1, "name": 1 })
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }

    async fn find_one(&self, filter: Document) -> DomainResult<Option<Category>> {
        self.collection
            .find_one(filter)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .map(Category::try_from)
            .transpose()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    parent: Option<ObjectId>,
    #[serde(default)]
    order: i32,
    #[serde(default = "default_true")]
    is_active: bool,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

fn default_true() -> bool {
    true
}

impl CategoryDocument {
    fn from_entity(category: &Category) -> DomainResult<Self> {
        Ok(Self {
            id: oid(&category.id)?,
            name: category.name.clone(),
            slug: category.slug.to_string(),
            description: category.description.clone(),
            parent: category.parent_id.as_ref().map(oid).transpose()?,
            order: category.order,
            is_active: category.is_active,
            created_at: to_bson_time(category.created_at),
            updated_at: to_bson_time(category.updated_at),
        })
    }
}

impl TryFrom<CategoryDocument> for Category {
    type Error = DomainError;

    fn try_from(doc: CategoryDocument) -> Result<Self, Self::Error> {
        let id = document_id(&doc.id)?;
        let created_at = from_bson_time(doc.created_at);
        let build = || -> DomainResult<Category> {
            let input = NewCategory {
                name: doc.name,
                slug: Slug::new(doc.slug)?,
                description: doc.description,
                parent_id: doc.parent.as_ref().map(document_id).transpose()?,
                order: doc.order,
                is_active: doc.is_active,
            };
            let mut category = Category::create(id.clone(), input, created_at)?;
            category.updated_at = from_bson_time(doc.updated_at);
            Ok(category)
        };
        build().map_err(|err| corrupt(ENTITY, &id, err))
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Category>> {
        self.find_one(doc! { "_id": oid(id)? }).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        self.find_one(doc! { "slug": slug.as_str() }).await
    }

    async fn find_all(&self, active_only: bool) -> DomainResult<Vec<Category>> {
        let filter = if active_only {
            doc! { "isActive": true }
        } else {
            Document::new()
        };
        self.list(filter).await
    }

    async fn find_children(&self, parent_id: &DocumentId) -> DomainResult<Vec<Category>> {
        self.list(doc! { "parent": oid(parent_id)? }).await
    }

    async fn insert(&self, category: &Category) -> DomainResult<()> {
        self.collection
            .insert_one(CategoryDocument::from_entity(category)?)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        Ok(())
    }

    async fn update(&self, category: &Category) -> DomainResult<()> {
        let document = CategoryDocument::from_entity(category)?;
        let result = self
            .collection
            .replace_one(doc! { "_id": document.id }, document)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        if result.matched_count == 0 {
            return Err(DomainError::not_found(format!("category {}", category.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: &DocumentId) -> DomainResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": oid(id)? })
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        if result.deleted_count == 0 {
            return Err(DomainError::not_found(format!("category {id}")));
        }
        Ok(())
    }
}
