use crate::application::dto::services::ServiceNodeDto;
use crate::domain::attorney::Attorney;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Attorney as the site and the admin UI consume it. Field names follow the
/// Spanish keys the front end already uses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttorneyDto {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cargo")]
    pub position: String,
    #[serde(rename = "especializaciones")]
    pub specializations: Vec<String>,
    #[serde(rename = "serviciosQueAtiende")]
    pub service_ids: Vec<String>,
    #[serde(rename = "experienciaAnios")]
    pub years_of_experience: u8,
    #[serde(rename = "educacion")]
    pub education: Vec<String>,
    #[serde(rename = "idiomas")]
    pub languages: Vec<String>,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "biografia")]
    pub biography: String,
    #[serde(rename = "logros")]
    pub achievements: Vec<String>,
    #[serde(rename = "casosDestacados")]
    pub notable_cases: Vec<String>,
    #[serde(rename = "imagenUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "linkedIn", default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(rename = "esSocio")]
    pub is_partner: bool,
    #[serde(rename = "descripcionCorta")]
    pub short_description: String,
    #[serde(rename = "activo")]
    pub is_active: bool,
    #[serde(rename = "createdAt", with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Attorney> for AttorneyDto {
    fn from(attorney: &Attorney) -> Self {
        Self {
            id: attorney.id().to_string(),
            slug: attorney.slug().map(|s| s.to_string()),
            name: attorney.name().to_string(),
            position: attorney.position().as_str().to_string(),
            specializations: attorney.specializations().to_vec(),
            service_ids: attorney.service_ids().iter().map(|id| id.to_string()).collect(),
            years_of_experience: attorney.years_of_experience(),
            education: attorney.education().to_vec(),
            languages: attorney.languages().to_vec(),
            email: attorney.email().as_str().to_string(),
            phone: attorney.phone().map(|p| p.as_str().to_string()),
            biography: attorney.biography().to_string(),
            achievements: attorney.achievements().to_vec(),
            notable_cases: attorney.notable_cases().to_vec(),
            image_url: attorney.image_url().map(str::to_string),
            linkedin: attorney.linkedin().map(|l| l.as_str().to_string()),
            is_partner: attorney.is_partner(),
            short_description: attorney.short_description().to_string(),
            is_active: attorney.is_active(),
            created_at: attorney.created_at(),
            updated_at: attorney.updated_at(),
        }
    }
}

impl From<Attorney> for AttorneyDto {
    fn from(attorney: Attorney) -> Self {
        Self::from(&attorney)
    }
}

/// Profile page payload: the attorney plus the practice areas they cover,
/// nested under their parents.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttorneyProfileDto {
    pub attorney: AttorneyDto,
    #[serde(rename = "servicios")]
    pub services: Vec<ServiceNodeDto>,
}
