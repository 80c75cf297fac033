// src/infrastructure/repositories/mongo_legal_content.rs
use super::common::{from_bson_time, to_bson_time};
use super::error::{corrupt, map_mongo};
use crate::domain::access::UserId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::legal::{LegalContent, LegalContentRepository};
use crate::domain::shared::Slug;
use crate::infrastructure::database::LEGAL_CONTENTS;
use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{self, doc},
};
use serde::{Deserialize, Serialize};

const ENTITY: &str = "legal content";

#[derive(Clone)]
pub struct MongoLegalContentRepository {
    collection: Collection<LegalContentDocument>,
}

impl MongoLegalContentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(LEGAL_CONTENTS),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegalContentDocument {
    key: String,
    title: String,
    content: String,
    updated_by: String,
    updated_at: bson::DateTime,
}

impl TryFrom<LegalContentDocument> for LegalContent {
    type Error = DomainError;

    fn try_from(doc: LegalContentDocument) -> Result<Self, Self::Error> {
        let key = doc.key.clone();
        let build = || -> DomainResult<LegalContent> {
            LegalContent::new(
                Slug::new(doc.key)?,
                doc.title,
                doc.content,
                UserId::new(doc.updated_by)?,
                from_bson_time(doc.updated_at),
            )
        };
        build().map_err(|err| corrupt(ENTITY, key, err))
    }
}

#[async_trait]
impl LegalContentRepository for MongoLegalContentRepository {
    async fn find_by_key(&self, key: &Slug) -> DomainResult<Option<LegalContent>> {
        self.collection
            .find_one(doc! { "key": key.as_str() })
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .map(LegalContent::try_from)
            .transpose()
    }

    async fn upsert(&self, content: &LegalContent) -> DomainResult<()> {
        let document = LegalContentDocument {
            key: content.key.to_string(),
            title: content.title.clone(),
            content: content.content.clone(),
            updated_by: content.updated_by.to_string(),
            updated_at: to_bson_time(content.updated_at),
        };
        self.collection
            .replace_one(doc! { "key": content.key.as_str() }, document)
            .upsert(true)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        Ok(())
    }
}
