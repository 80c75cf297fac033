// src/presentation/http/controllers/attorneys.rs
use super::double_option;
use crate::application::{
    commands::attorneys::{CreateAttorneyCommand, DeleteAttorneyCommand, UpdateAttorneyCommand},
    dto::{AttorneyDto, AttorneyProfileDto, Page},
    queries::attorneys::{ListAttorneysQuery, SearchAttorneysQuery},
};
use crate::domain::attorney::{AttorneyPatch, AttorneyProfile};
use crate::presentation::http::error::IntoHttpResult;
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::response::{ApiResponse, ApiResult, MessageDto};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttorneyListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Only honoured for callers who manage attorneys.
    pub active: Option<bool>,
    pub partner: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttorneySearchParams {
    pub specialization: Option<String>,
    pub service_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct DeleteAttorneyParams {
    /// Remove the document instead of deactivating it.
    #[serde(default)]
    pub hard: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttorneyRequest {
    pub nombre: String,
    pub cargo: String,
    #[serde(default)]
    pub especializaciones: Vec<String>,
    #[serde(default)]
    pub servicios_que_atiende: Vec<String>,
    #[serde(default)]
    pub experiencia_anios: i64,
    #[serde(default)]
    pub educacion: Vec<String>,
    #[serde(default)]
    pub idiomas: Vec<String>,
    pub correo: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub biografia: String,
    #[serde(default)]
    pub logros: Vec<String>,
    #[serde(default)]
    pub casos_destacados: Vec<String>,
    #[serde(default)]
    pub imagen_url: Option<String>,
    #[serde(rename = "linkedIn", default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub es_socio: bool,
    #[serde(default)]
    pub descripcion_corta: String,
    #[serde(default = "default_true")]
    pub activo: bool,
}

impl From<CreateAttorneyRequest> for AttorneyProfile {
    fn from(req: CreateAttorneyRequest) -> Self {
        Self {
            name: req.nombre,
            position: req.cargo,
            specializations: req.especializaciones,
            service_ids: req.servicios_que_atiende,
            years_of_experience: req.experiencia_anios,
            education: req.educacion,
            languages: req.idiomas,
            email: req.correo,
            phone: req.telefono,
            biography: req.biografia,
            achievements: req.logros,
            notable_cases: req.casos_destacados,
            image_url: req.imagen_url,
            linkedin: req.linkedin,
            is_partner: req.es_socio,
            short_description: req.descripcion_corta,
            is_active: req.activo,
        }
    }
}

/// Partial update. `null` clears `telefono`, `imagenUrl` and `linkedIn`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttorneyRequest {
    pub nombre: Option<String>,
    pub cargo: Option<String>,
    pub especializaciones: Option<Vec<String>>,
    pub servicios_que_atiende: Option<Vec<String>>,
    pub experiencia_anios: Option<i64>,
    pub educacion: Option<Vec<String>>,
    pub idiomas: Option<Vec<String>>,
    pub correo: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub telefono: Option<Option<String>>,
    pub biografia: Option<String>,
    pub logros: Option<Vec<String>>,
    pub casos_destacados: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub imagen_url: Option<Option<String>>,
    #[serde(rename = "linkedIn", default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub linkedin: Option<Option<String>>,
    pub es_socio: Option<bool>,
    pub descripcion_corta: Option<String>,
    pub activo: Option<bool>,
}

impl From<UpdateAttorneyRequest> for AttorneyPatch {
    fn from(req: UpdateAttorneyRequest) -> Self {
        Self {
            name: req.nombre,
            position: req.cargo,
            specializations: req.especializaciones,
            service_ids: req.servicios_que_atiende,
            years_of_experience: req.experiencia_anios,
            education: req.educacion,
            languages: req.idiomas,
            email: req.correo,
            phone: req.telefono,
            biography: req.biografia,
            achievements: req.logros,
            notable_cases: req.casos_destacados,
            image_url: req.imagen_url,
            linkedin: req.linkedin,
            is_partner: req.es_socio,
            short_description: req.descripcion_corta,
            is_active: req.activo,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/attorneys",
    params(AttorneyListParams),
    responses(
        (status = 200, description = "Paged attorneys, partners first.", body = Page<AttorneyDto>)
    ),
    tag = "Attorneys"
)]
pub async fn list_attorneys(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Query(params): Query<AttorneyListParams>,
) -> ApiResult<Page<AttorneyDto>> {
    let query = ListAttorneysQuery {
        page: params.page,
        limit: params.limit,
        active: params.active,
        partner: params.partner,
        search: params.search,
    };
    state
        .services
        .attorney_queries
        .list_attorneys(actor.as_ref(), query)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/attorneys/active",
    responses((status = 200, description = "Active attorneys.", body = [AttorneyDto])),
    tag = "Attorneys"
)]
pub async fn list_active(Extension(state): Extension<HttpState>) -> ApiResult<Vec<AttorneyDto>> {
    state
        .services
        .attorney_queries
        .list_active()
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/attorneys/partners",
    responses((status = 200, description = "Active partners.", body = [AttorneyDto])),
    tag = "Attorneys"
)]
pub async fn list_partners(Extension(state): Extension<HttpState>) -> ApiResult<Vec<AttorneyDto>> {
    state
        .services
        .attorney_queries
        .list_partners()
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/attorneys/search",
    params(AttorneySearchParams),
    responses(
        (status = 200, description = "Attorneys by specialization or practice area.", body = [AttorneyDto]),
        (status = 400, description = "Neither filter given.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Attorneys"
)]
pub async fn search_attorneys(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Query(params): Query<AttorneySearchParams>,
) -> ApiResult<Vec<AttorneyDto>> {
    let query = SearchAttorneysQuery {
        specialization: params.specialization,
        service_id: params.service_id,
    };
    state
        .services
        .attorney_queries
        .search_attorneys(actor.as_ref(), query)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/attorneys/{id}",
    params(("id" = String, Path, description = "Attorney id")),
    responses(
        (status = 200, description = "Attorney.", body = AttorneyDto),
        (status = 404, description = "Unknown or inactive.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Attorneys"
)]
pub async fn get_attorney(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Path(id): Path<String>,
) -> ApiResult<AttorneyDto> {
    state
        .services
        .attorney_queries
        .get_by_id(actor.as_ref(), id)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/attorneys/slug/{slug}",
    params(("slug" = String, Path, description = "Attorney slug")),
    responses(
        (status = 200, description = "Profile with the practice areas the attorney covers.", body = AttorneyProfileDto),
        (status = 404, description = "Unknown or inactive.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Attorneys"
)]
pub async fn get_attorney_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> ApiResult<AttorneyProfileDto> {
    state
        .services
        .attorney_queries
        .get_profile_by_slug(slug)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    post,
    path = "/api/attorneys",
    request_body = CreateAttorneyRequest,
    responses(
        (status = 201, description = "Attorney created.", body = AttorneyDto),
        (status = 409, description = "Email already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Attorneys",
    security(("bearerAuth" = []))
)]
pub async fn create_attorney(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateAttorneyRequest>,
) -> ApiResult<AttorneyDto> {
    let command = CreateAttorneyCommand {
        profile: payload.into(),
    };
    state
        .services
        .attorney_commands
        .create_attorney(&user, command)
        .await
        .into_http()
        .map(ApiResponse::created)
}

#[utoipa::path(
    put,
    path = "/api/attorneys/{id}",
    params(("id" = String, Path, description = "Attorney id")),
    request_body = UpdateAttorneyRequest,
    responses((status = 200, description = "Attorney updated.", body = AttorneyDto)),
    tag = "Attorneys",
    security(("bearerAuth" = []))
)]
pub async fn update_attorney(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAttorneyRequest>,
) -> ApiResult<AttorneyDto> {
    let command = UpdateAttorneyCommand {
        id,
        patch: payload.into(),
    };
    state
        .services
        .attorney_commands
        .update_attorney(&user, command)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    delete,
    path = "/api/attorneys/{id}",
    params(("id" = String, Path, description = "Attorney id"), DeleteAttorneyParams),
    responses((status = 200, description = "Attorney deactivated or removed.", body = MessageDto)),
    tag = "Attorneys",
    security(("bearerAuth" = []))
)]
pub async fn delete_attorney(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Query(params): Query<DeleteAttorneyParams>,
) -> ApiResult<MessageDto> {
    state
        .services
        .attorney_commands
        .delete_attorney(&user, DeleteAttorneyCommand { id, hard: params.hard })
        .await
        .into_http()?;
    let message = if params.hard {
        "attorney deleted"
    } else {
        "attorney deactivated"
    };
    Ok(ApiResponse::success(MessageDto::new(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_front_end_keys() {
        let req: CreateAttorneyRequest = serde_json::from_value(serde_json::json!({
            "nombre": "María Vásquez",
            "cargo": "Socia",
            "correo": "maria@altumlegal.mx",
            "serviciosQueAtiende": ["65a1f0c2e4b0a1b2c3d4e5f7"],
            "linkedIn": "https://linkedin.com/in/maria",
            "esSocio": true
        }))
        .unwrap();
        let profile = AttorneyProfile::from(req);
        assert!(profile.is_partner);
        assert!(profile.is_active);
        assert_eq!(profile.service_ids.len(), 1);
        assert_eq!(profile.linkedin.as_deref(), Some("https://linkedin.com/in/maria"));
    }

    #[test]
    fn update_request_null_clears_phone() {
        let req: UpdateAttorneyRequest =
            serde_json::from_value(serde_json::json!({ "telefono": null })).unwrap();
        let patch = AttorneyPatch::from(req);
        assert_eq!(patch.phone, Some(None));
        assert!(patch.image_url.is_none());
    }
}
