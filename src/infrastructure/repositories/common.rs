// src/infrastructure/repositories/common.rs
//! Helpers shared by the MongoDB repositories.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{DocumentId, PageRequest};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{self, Bson, Document, doc, oid::ObjectId},
};
use serde::de::DeserializeOwned;

pub fn oid(id: &DocumentId) -> DomainResult<ObjectId> {
    ObjectId::parse_str(id.as_str())
        .map_err(|err| DomainError::Validation(format!("invalid document id '{id}': {err}")))
}

pub fn document_id(oid: &ObjectId) -> DomainResult<DocumentId> {
    DocumentId::new(oid.to_hex())
}

pub fn to_bson_time(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_chrono(value)
}

pub fn from_bson_time(value: bson::DateTime) -> DateTime<Utc> {
    value.to_chrono()
}

/// Case-insensitive "contains" match on literal text.
pub fn contains_ci(text: &str) -> Bson {
    Bson::Document(doc! { "$regex": regex::escape(text.trim()), "$options": "i" })
}

/// Case-insensitive whole-value match on literal text.
pub fn equals_ci(text: &str) -> Bson {
    Bson::Document(doc! {
        "$regex": format!("^{}$", regex::escape(text.trim())),
        "$options": "i",
    })
}

/// AND together a list of conditions.
pub fn all_of(mut conditions: Vec<Document>) -> Document {
    match conditions.len() {
        0 => Document::new(),
        1 => conditions.remove(0),
        _ => doc! { "$and": conditions },
    }
}

pub async fn find_page<T>(
    collection: &Collection<T>,
    filter: Document,
    sort: Document,
    page: PageRequest,
) -> Result<(Vec<T>, u64), mongodb::error::Error>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let total = collection.count_documents(filter.clone()).await?;
    let items = collection
        .find(filter)
        .sort(sort)
        .skip(page.offset())
        .limit(i64::from(page.limit()))
        .await?
        .try_collect()
        .await?;
    Ok((items, total))
}

pub async fn find_many<T>(
    collection: &Collection<T>,
    filter: Document,
    sort: Document,
) -> Result<Vec<T>, mongodb::error::Error>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    collection.find(filter).sort(sort).await?.try_collect().await
}
