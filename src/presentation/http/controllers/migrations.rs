// src/presentation/http/controllers/migrations.rs
use crate::application::dto::SlugMigrationReport;
use crate::presentation::http::error::IntoHttpResult;
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::{ApiResponse, ApiResult};
use crate::presentation::http::state::HttpState;
use axum::Extension;

#[utoipa::path(
    post,
    path = "/api/admin/migrate-slugs",
    responses(
        (status = 200, description = "Attorneys without a slug were given one.", body = SlugMigrationReport),
        (status = 403, description = "Missing run_migrations.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn migrate_slugs(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> ApiResult<SlugMigrationReport> {
    state
        .services
        .attorney_commands
        .migrate_slugs(&user)
        .await
        .into_http()
        .map(ApiResponse::success)
}
