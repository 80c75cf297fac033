// src/presentation/http/controllers/session.rs
use crate::application::dto::SessionDto;
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::{ApiResponse, ApiResult};

/// Role and effective permissions of the caller, for the admin UI.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session.", body = SessionDto),
        (status = 401, description = "No valid session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth",
    security(("bearerAuth" = []))
)]
pub async fn current_session(Authenticated(user): Authenticated) -> ApiResult<SessionDto> {
    Ok(ApiResponse::success(SessionDto::from(&user)))
}
