// src/infrastructure/repositories/mongo_attorney.rs
use super::common::{
    all_of, contains_ci, document_id, equals_ci, find_many, find_page, from_bson_time, oid,
    to_bson_time,
};
use super::error::{corrupt, map_mongo};
use crate::domain::attorney::{
    Attorney, AttorneyFilter, AttorneyProfile, AttorneyRepository, StoredAttorney,
    value_objects::FirmEmail,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{DocumentId, PageRequest, Paged, Slug};
use crate::infrastructure::database::ATTORNEYS;
use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{self, Bson, Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

const ENTITY: &str = "attorney";

#[derive(Clone)]
pub struct MongoAttorneyRepository {
    collection: Collection<AttorneyDocument>,
    raw: Collection<Document>,
}

impl MongoAttorneyRepository {
    pub fn new(db: &Database) -> Self {
        let collection: Collection<AttorneyDocument> = db.collection(ATTORNEYS);
        Self {
            raw: collection.clone_with_type(),
            collection,
        }
    }

    fn sort() -> Document {
        doc! { "esSocio": -1, "nombre": 1, "_id": 1 }
    }

    async fn find_one(&self, filter: Document) -> DomainResult<Option<Attorney>> {
        self.collection
            .find_one(filter)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .map(Attorney::try_from)
            .transpose()
    }

    /// Listings skip documents that no longer decode so one bad record
    /// cannot take a public page down.
    async fn find_list(&self, filter: Document) -> DomainResult<Vec<Attorney>> {
        Ok(find_many(&self.raw, filter, Self::sort())
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .into_iter()
            .filter_map(|raw| readable(decode(raw)))
            .collect())
    }
}

fn decode(raw: Document) -> StoredAttorney {
    let id = match raw.get("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    };
    let name = raw.get_str("nombre").unwrap_or_default().to_string();
    let decoded = bson::from_document::<AttorneyDocument>(raw)
        .map_err(|err| DomainError::Persistence(format!("unreadable {ENTITY} document: {err}")))
        .and_then(Attorney::try_from);
    match decoded {
        Ok(attorney) => StoredAttorney::Valid(attorney),
        Err(err) => StoredAttorney::Invalid {
            id,
            name,
            reason: err.to_string(),
        },
    }
}

fn readable(stored: StoredAttorney) -> Option<Attorney> {
    match stored {
        StoredAttorney::Valid(attorney) => Some(attorney),
        StoredAttorney::Invalid { id, reason, .. } => {
            warn!(attorney_id = %id, error = %reason, "skipping unreadable attorney");
            None
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttorneyDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    nombre: String,
    cargo: String,
    #[serde(default)]
    especializaciones: Vec<String>,
    #[serde(default)]
    servicios_que_atiende: Vec<ObjectId>,
    #[serde(default)]
    experiencia_anios: i64,
    #[serde(default)]
    educacion: Vec<String>,
    #[serde(default)]
    idiomas: Vec<String>,
    correo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    telefono: Option<String>,
    #[serde(default)]
    biografia: String,
    #[serde(default)]
    logros: Vec<String>,
    #[serde(default)]
    casos_destacados: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    imagen_url: Option<String>,
    #[serde(rename = "linkedIn", default, skip_serializing_if = "Option::is_none")]
    linkedin: Option<String>,
    #[serde(default)]
    es_socio: bool,
    #[serde(default)]
    descripcion_corta: String,
    #[serde(default = "default_true")]
    activo: bool,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

fn default_true() -> bool {
    true
}

impl AttorneyDocument {
    fn from_entity(attorney: &Attorney) -> DomainResult<Self> {
        let profile = attorney.to_profile();
        Ok(Self {
            id: oid(attorney.id())?,
            slug: attorney.slug().map(|s| s.to_string()),
            nombre: profile.name,
            cargo: profile.position,
            especializaciones: profile.specializations,
            servicios_que_atiende: attorney
                .service_ids()
                .iter()
                .map(oid)
                .collect::<DomainResult<_>>()?,
            experiencia_anios: profile.years_of_experience,
            educacion: profile.education,
            idiomas: profile.languages,
            correo: profile.email,
            telefono: profile.phone,
            biografia: profile.biography,
            logros: profile.achievements,
            casos_destacados: profile.notable_cases,
            imagen_url: profile.image_url,
            linkedin: profile.linkedin,
            es_socio: profile.is_partner,
            descripcion_corta: profile.short_description,
            activo: profile.is_active,
            created_at: to_bson_time(attorney.created_at()),
            updated_at: to_bson_time(attorney.updated_at()),
        })
    }
}

impl TryFrom<AttorneyDocument> for Attorney {
    type Error = DomainError;

    fn try_from(doc: AttorneyDocument) -> Result<Self, Self::Error> {
        let id = document_id(&doc.id)?;
        let slug = doc
            .slug
            .filter(|s| !s.trim().is_empty())
            .map(Slug::new)
            .transpose()
            .map_err(|err| corrupt(ENTITY, &id, err))?;
        let profile = AttorneyProfile {
            name: doc.nombre,
            position: doc.cargo,
            specializations: doc.especializaciones,
            service_ids: doc.servicios_que_atiende.iter().copied().map(ObjectId::to_hex).collect(),
            years_of_experience: doc.experiencia_anios,
            education: doc.educacion,
            languages: doc.idiomas,
            email: doc.correo,
            phone: doc.telefono,
            biography: doc.biografia,
            achievements: doc.logros,
            notable_cases: doc.casos_destacados,
            image_url: doc.imagen_url,
            linkedin: doc.linkedin,
            is_partner: doc.es_socio,
            short_description: doc.descripcion_corta,
            is_active: doc.activo,
        };
        Attorney::new(
            id.clone(),
            profile,
            slug,
            from_bson_time(doc.created_at),
            from_bson_time(doc.updated_at),
        )
        .map_err(|err| corrupt(ENTITY, &id, err))
    }
}

fn filter_document(filter: &AttorneyFilter) -> Document {
    let mut conditions = Vec::new();
    if let Some(active) = filter.active {
        conditions.push(doc! { "activo": active });
    }
    if let Some(partner) = filter.partner {
        conditions.push(doc! { "esSocio": partner });
    }
    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = contains_ci(search);
        conditions.push(doc! {
            "$or": [
                { "nombre": pattern.clone() },
                { "cargo": pattern.clone() },
                { "especializaciones": pattern },
            ]
        });
    }
    all_of(conditions)
}

#[async_trait]
impl AttorneyRepository for MongoAttorneyRepository {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Attorney>> {
        self.find_one(doc! { "_id": oid(id)? }).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Attorney>> {
        self.find_one(doc! { "slug": slug.as_str() }).await
    }

    async fn find_by_email(&self, email: &FirmEmail) -> DomainResult<Option<Attorney>> {
        self.find_one(doc! { "correo": equals_ci(email.as_str()) }).await
    }

    async fn find_all(
        &self,
        filter: &AttorneyFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<Attorney>> {
        let (documents, total) =
            find_page(&self.raw, filter_document(filter), Self::sort(), page)
                .await
                .map_err(|err| map_mongo(ENTITY, err))?;
        let items = documents
            .into_iter()
            .filter_map(|raw| readable(decode(raw)))
            .collect();
        Ok(Paged::new(items, total, page))
    }

    async fn scan(&self, page: PageRequest) -> DomainResult<Paged<StoredAttorney>> {
        let (documents, total) = find_page(&self.raw, Document::new(), doc! { "_id": 1 }, page)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        Ok(Paged::new(
            documents.into_iter().map(decode).collect(),
            total,
            page,
        ))
    }

    async fn find_active(&self) -> DomainResult<Vec<Attorney>> {
        self.find_list(doc! { "activo": true }).await
    }

    async fn find_partners(&self) -> DomainResult<Vec<Attorney>> {
        self.find_list(doc! { "activo": true, "esSocio": true }).await
    }

    async fn find_by_specialization(&self, specialization: &str) -> DomainResult<Vec<Attorney>> {
        self.find_list(doc! {
            "activo": true,
            "especializaciones": contains_ci(specialization),
        })
        .await
    }

    async fn find_by_service(&self, service_id: &DocumentId) -> DomainResult<Vec<Attorney>> {
        self.find_list(doc! { "activo": true, "serviciosQueAtiende": oid(service_id)? })
            .await
    }

    async fn insert(&self, attorney: &Attorney) -> DomainResult<()> {
        let document = AttorneyDocument::from_entity(attorney)?;
        self.collection
            .insert_one(document)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        Ok(())
    }

    async fn update(&self, attorney: &Attorney) -> DomainResult<()> {
        let document = AttorneyDocument::from_entity(attorney)?;
        let result = self
            .collection
            .replace_one(doc! { "_id": document.id }, document)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        if result.matched_count == 0 {
            return Err(DomainError::not_found(format!("attorney {}", attorney.id())));
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
            return Err(DomainError::not_found(format!("attorney {id}")));
        }
        Ok(())
    }
}
