// src/presentation/http/controllers/services.rs
use super::double_option;
use crate::application::{
    commands::services::{CreateServiceCommand, UpdateServiceCommand},
    dto::{AttorneyDto, ServiceDto, ServiceNodeDto},
    queries::attorneys::AttorneysForServiceQuery,
};
use crate::domain::access::Permission;
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
pub struct ServiceListParams {
    /// Include inactive services; requires `manage_services`.
    #[serde(default)]
    pub all: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    pub icon_url: Option<String>,
    pub parent_id: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub icon_url: Option<Option<String>>,
    /// `null` moves the service to the top level.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub parent_id: Option<Option<String>>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/services",
    params(ServiceListParams),
    responses((status = 200, description = "Practice areas ordered by position and name.", body = [ServiceDto])),
    tag = "Services"
)]
pub async fn list_services(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Query(params): Query<ServiceListParams>,
) -> ApiResult<Vec<ServiceDto>> {
    let include_inactive =
        params.all && actor.is_some_and(|a| a.has_permission(Permission::ManageServices));
    state
        .services
        .service_queries
        .list_services(!include_inactive)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/services/tree",
    responses((status = 200, description = "Active practice areas nested under their parents.", body = [ServiceNodeDto])),
    tag = "Services"
)]
pub async fn service_tree(Extension(state): Extension<HttpState>) -> ApiResult<Vec<ServiceNodeDto>> {
    state
        .services
        .service_queries
        .service_tree()
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(("id" = String, Path, description = "Service id or slug")),
    responses(
        (status = 200, description = "Practice area.", body = ServiceDto),
        (status = 404, description = "Unknown service.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn get_service(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> ApiResult<ServiceDto> {
    state
        .services
        .service_queries
        .get_service(id)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/services/{id}/children",
    params(("id" = String, Path, description = "Parent service id")),
    responses((status = 200, description = "Active sub-services.", body = [ServiceDto])),
    tag = "Services"
)]
pub async fn service_children(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<ServiceDto>> {
    state
        .services
        .service_queries
        .sub_services(id)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/services/{id}/attorneys",
    params(("id" = String, Path, description = "Service id")),
    responses((status = 200, description = "Active attorneys serving the practice area.", body = [AttorneyDto])),
    tag = "Services"
)]
pub async fn service_attorneys(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<AttorneyDto>> {
    state
        .services
        .attorney_queries
        .attorneys_for_service(AttorneysForServiceQuery { service_id: id })
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created.", body = ServiceDto),
        (status = 409, description = "Slug taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Services",
    security(("bearerAuth" = []))
)]
pub async fn create_service(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateServiceRequest>,
) -> ApiResult<ServiceDto> {
    let command = CreateServiceCommand {
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        short_description: payload.short_description,
        icon_url: payload.icon_url,
        parent_id: payload.parent_id,
        order: payload.order,
        is_active: payload.is_active,
    };
    state
        .services
        .service_commands
        .create_service(&user, command)
        .await
        .into_http()
        .map(ApiResponse::created)
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    request_body = UpdateServiceRequest,
    responses((status = 200, description = "Service updated.", body = ServiceDto)),
    tag = "Services",
    security(("bearerAuth" = []))
)]
pub async fn update_service(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdateServiceRequest>,
) -> ApiResult<ServiceDto> {
    let command = UpdateServiceCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        short_description: payload.short_description,
        icon_url: payload.icon_url,
        parent_id: payload.parent_id,
        order: payload.order,
        is_active: payload.is_active,
    };
    state
        .services
        .service_commands
        .update_service(&user, command)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service deleted.", body = MessageDto),
        (status = 409, description = "Service still has sub-services.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Services",
    security(("bearerAuth" = []))
)]
pub async fn delete_service(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<MessageDto> {
    state
        .services
        .service_commands
        .delete_service(&user, id)
        .await
        .into_http()?;
    Ok(ApiResponse::success(MessageDto::new("service deleted")))
}
