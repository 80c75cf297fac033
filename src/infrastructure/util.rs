// src/infrastructure/util.rs
use crate::application::ports::util::{IdGenerator, SlugGenerator};
use crate::domain::shared::DocumentId;
use mongodb::bson::oid::ObjectId;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Fresh MongoDB object ids, so ids are known before the insert.
#[derive(Default, Clone)]
pub struct ObjectIdGenerator;

impl IdGenerator for ObjectIdGenerator {
    fn next_id(&self) -> DocumentId {
        DocumentId::new(ObjectId::new().to_hex())
            .unwrap_or_else(|error| panic!("object id is not a valid document id: {error}"))
    }
}
