// src/presentation/http/controllers/upload.rs
use crate::application::{
    auth::ensure_permission, commands::media::UploadMediaCommand, dto::UploadResultDto,
};
use crate::domain::access::Permission;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::{ApiResponse, ApiResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{Multipart, multipart::Field},
};
use bytes::Bytes;
use utoipa::ToSchema;

/// Request bodies above this are cut off before the handler runs.
pub const UPLOAD_BODY_LIMIT: usize = 11 * 1024 * 1024;

/// Shape of the multipart form, for the API docs only.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
    /// `attorneys`, `blog`, `services` or `general` (default).
    category: Option<String>,
}

struct FilePart {
    filename: String,
    content_type: String,
    body: Bytes,
}

async fn read_file(field: Field<'_>) -> HttpResult<FilePart> {
    let filename = field.file_name().unwrap_or("archivo").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let body = field
        .bytes()
        .await
        .map_err(|err| HttpError::bad_request(format!("could not read file: {err}")))?;
    Ok(FilePart {
        filename,
        content_type,
        body,
    })
}

#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored.", body = UploadResultDto),
        (status = 400, description = "Missing file, unsupported type or too large.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing upload_media.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Media",
    security(("bearerAuth" = []))
)]
pub async fn upload_file(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    mut multipart: Multipart,
) -> ApiResult<UploadResultDto> {
    ensure_permission(&user, Permission::UploadMedia).into_http()?;

    let mut file = None;
    let mut category = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(format!("malformed multipart body: {err}")))?
    {
        match field.name() {
            Some("file") => file = Some(read_file(field).await?),
            Some("category") => {
                let text = field
                    .text()
                    .await
                    .map_err(|err| HttpError::bad_request(format!("invalid category: {err}")))?;
                category = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| HttpError::bad_request("no file provided"))?;
    let command = UploadMediaCommand {
        filename: file.filename,
        content_type: file.content_type,
        category,
        body: file.body,
    };
    state
        .services
        .media_commands
        .upload(&user, command)
        .await
        .into_http()
        .map(ApiResponse::success)
}
