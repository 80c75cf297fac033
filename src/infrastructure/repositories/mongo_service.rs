// src/infrastructure/repositories/mongo_service.rs
use super::common::{document_id, find_many, from_bson_time, oid, to_bson_time};
use super::error::{corrupt, map_mongo};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::service::{NewService, Service, ServiceRepository};
use crate::domain::shared::{DocumentId, Slug};
use crate::infrastructure::database::SERVICES;
use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{self, Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

const ENTITY: &str = "service";

#[derive(Clone)]
pub struct MongoServiceRepository {
    collection: Collection<ServiceDocument>,
}

impl MongoServiceRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(SERVICES),
        }
    }

    async fn list(&self, filter: Document) -> DomainResult<Vec<Service>> {
        find_many(&self.collection, filter, doc! { "order": 1, "name": 1 })
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .into_iter()
            .map(Service::try_from)
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    slug: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
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

impl ServiceDocument {
    fn from_entity(service: &Service) -> DomainResult<Self> {
        Ok(Self {
            id: oid(&service.id)?,
            name: service.name.clone(),
            slug: service.slug.to_string(),
            description: service.description.clone(),
            short_description: service.short_description.clone(),
            icon_url: service.icon_url.clone(),
            parent: service.parent_id.as_ref().map(oid).transpose()?,
            order: service.order,
            is_active: service.is_active,
            created_at: to_bson_time(service.created_at),
            updated_at: to_bson_time(service.updated_at),
        })
    }
}

impl TryFrom<ServiceDocument> for Service {
    type Error = DomainError;

    fn try_from(doc: ServiceDocument) -> Result<Self, Self::Error> {
        let id = document_id(&doc.id)?;
        let created_at = from_bson_time(doc.created_at);
        let updated_at = from_bson_time(doc.updated_at);
        let build = || -> DomainResult<Service> {
            let input = NewService {
                name: doc.name,
                slug: Slug::new(doc.slug)?,
                description: doc.description,
                short_description: doc.short_description,
                icon_url: doc.icon_url,
                parent_id: doc.parent.as_ref().map(document_id).transpose()?,
                order: doc.order,
                is_active: doc.is_active,
            };
            let mut service = Service::create(id.clone(), input, created_at)?;
            service.updated_at = updated_at;
            Ok(service)
        };
        build().map_err(|err| corrupt(ENTITY, &id, err))
    }
}

#[async_trait]
impl ServiceRepository for MongoServiceRepository {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Service>> {
        self.collection
            .find_one(doc! { "_id": oid(id)? })
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .map(Service::try_from)
            .transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Service>> {
        self.collection
            .find_one(doc! { "slug": slug.as_str() })
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .map(Service::try_from)
            .transpose()
    }

    async fn find_all(&self, active_only: bool) -> DomainResult<Vec<Service>> {
        let filter = if active_only {
            doc! { "isActive": true }
        } else {
            Document::new()
        };
        self.list(filter).await
    }

    async fn find_children(&self, parent_id: &DocumentId) -> DomainResult<Vec<Service>> {
        self.list(doc! { "parent": oid(parent_id)? }).await
    }

    async fn insert(&self, service: &Service) -> DomainResult<()> {
        self.collection
            .insert_one(ServiceDocument::from_entity(service)?)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        Ok(())
    }

    async fn update(&self, service: &Service) -> DomainResult<()> {
        let document = ServiceDocument::from_entity(service)?;
        let result = self
            .collection
            .replace_one(doc! { "_id": document.id }, document)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        if result.matched_count == 0 {
            return Err(DomainError::not_found(format!("service {}", service.id)));
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
            return Err(DomainError::not_found(format!("service {id}")));
        }
        Ok(())
    }
}
