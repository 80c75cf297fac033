// src/presentation/http/controllers/legal.rs
use crate::application::{commands::legal::UpsertLegalContentCommand, dto::LegalContentDto};
use crate::presentation::http::error::IntoHttpResult;
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::{ApiResponse, ApiResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct LegalContentParams {
    /// Page key, e.g. `aviso-de-privacidad`.
    pub key: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertLegalContentRequest {
    pub key: String,
    pub title: String,
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/legal-content",
    params(LegalContentParams),
    responses(
        (status = 200, description = "Legal page.", body = LegalContentDto),
        (status = 404, description = "No page stored under the key.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Legal"
)]
pub async fn get_legal_content(
    Extension(state): Extension<HttpState>,
    Query(params): Query<LegalContentParams>,
) -> ApiResult<LegalContentDto> {
    state
        .services
        .legal_queries
        .get_by_key(params.key)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    put,
    path = "/api/legal-content",
    request_body = UpsertLegalContentRequest,
    responses((status = 200, description = "Page created or replaced.", body = LegalContentDto)),
    tag = "Legal",
    security(("bearerAuth" = []))
)]
pub async fn upsert_legal_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpsertLegalContentRequest>,
) -> ApiResult<LegalContentDto> {
    let command = UpsertLegalContentCommand {
        key: payload.key,
        title: payload.title,
        content: payload.content,
    };
    state
        .services
        .legal_commands
        .upsert(&user, command)
        .await
        .into_http()
        .map(ApiResponse::success)
}
