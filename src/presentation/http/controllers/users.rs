// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::UpdateUserRoleCommand,
    dto::{ManagedUserDto, Page},
    error::ApplicationError,
    queries::users::ListUsersQuery,
};
use crate::domain::access::Role;
use crate::presentation::http::error::IntoHttpResult;
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::{ApiResponse, ApiResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListUsersParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRoleRequest {
    pub user_id: String,
    /// Role name in any case, e.g. `ADMIN` or `content_creator`.
    pub role: String,
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Accounts, newest first.", body = Page<ManagedUserDto>),
        (status = 403, description = "Missing manage_users.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ListUsersParams>,
) -> ApiResult<Page<ManagedUserDto>> {
    let query = ListUsersQuery {
        page: params.page,
        limit: params.limit,
    };
    state
        .services
        .user_queries
        .list_users(&user, query)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    put,
    path = "/api/admin/users",
    request_body = UpdateUserRoleRequest,
    responses(
        (status = 200, description = "Role updated.", body = ManagedUserDto),
        (status = 403, description = "Role hierarchy forbids the change.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn update_user_role(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateUserRoleRequest>,
) -> ApiResult<ManagedUserDto> {
    let role = payload
        .role
        .parse::<Role>()
        .map_err(ApplicationError::from)
        .into_http()?;
    let command = UpdateUserRoleCommand {
        user_id: payload.user_id,
        role,
    };
    state
        .services
        .user_commands
        .update_role(&user, command)
        .await
        .into_http()
        .map(ApiResponse::success)
}
