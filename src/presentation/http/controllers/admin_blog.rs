// src/presentation/http/controllers/admin_blog.rs
use super::double_option;
use crate::application::{
    commands::{
        blog::{
            ChangePostStatusCommand, CreatePostCommand, DeletePostCommand, PostStatusAction,
            UpdatePostCommand,
        },
        categories::{CreateCategoryCommand, UpdateCategoryCommand},
    },
    dto::{BlogPostDto, CategoryDto, FormatConfigDto, Page},
    queries::blog::ListAdminPostsQuery,
};
use crate::domain::blog::PostStatus;
use crate::presentation::http::error::IntoHttpResult;
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::{ApiResponse, ApiResult, MessageDto};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn format_pair(config: Option<FormatConfigDto>) -> Option<(f32, f32)> {
    config.map(|c| (c.line_height, c.paragraph_spacing))
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminPostParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<PostStatus>,
    pub category_id: Option<String>,
    /// Ignored for users who may only edit their own posts.
    pub author_id: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DeletePostParams {
    pub id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    /// Category id.
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: Option<PostStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub format_config: Option<FormatConfigDto>,
    pub featured_image: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub format_config: Option<FormatConfigDto>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub featured_image: Option<Option<String>>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub parent_id: Option<Option<String>>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/admin/blog/posts",
    params(AdminPostParams),
    responses((status = 200, description = "Dashboard post listing.", body = Page<BlogPostDto>)),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<AdminPostParams>,
) -> ApiResult<Page<BlogPostDto>> {
    let query = ListAdminPostsQuery {
        page: params.page,
        limit: params.limit,
        status: params.status,
        category_id: params.category_id,
        author_id: params.author_id,
        search: params.search,
    };
    state
        .services
        .blog_queries
        .list_admin_posts(&user, query)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/admin/blog/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses((status = 200, description = "Post in any status.", body = BlogPostDto)),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<BlogPostDto> {
    state
        .services
        .blog_queries
        .get_admin_post(&user, id)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    post,
    path = "/api/admin/blog/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = BlogPostDto),
        (status = 403, description = "Missing create or publish permission.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> ApiResult<BlogPostDto> {
    let command = CreatePostCommand {
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        category_id: payload.category,
        tags: payload.tags,
        status: payload.status,
        published_at: payload.published_at,
        format_config: format_pair(payload.format_config),
        featured_image: payload.featured_image,
    };
    state
        .services
        .blog_commands
        .create_post(&user, command)
        .await
        .into_http()
        .map(ApiResponse::created)
}

#[utoipa::path(
    put,
    path = "/api/admin/blog/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = BlogPostDto),
        (status = 403, description = "Not the author and cannot edit others' posts.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> ApiResult<BlogPostDto> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        category_id: payload.category,
        tags: payload.tags,
        format_config: format_pair(payload.format_config),
        featured_image: payload.featured_image,
    };
    state
        .services
        .blog_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    delete,
    path = "/api/admin/blog/posts",
    params(DeletePostParams),
    responses((status = 200, description = "Post deleted.", body = MessageDto)),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<DeletePostParams>,
) -> ApiResult<MessageDto> {
    state
        .services
        .blog_commands
        .delete_post(&user, DeletePostCommand { id: params.id })
        .await
        .into_http()?;
    Ok(ApiResponse::success(MessageDto::new("post deleted")))
}

#[utoipa::path(
    post,
    path = "/api/admin/blog/posts/{id}/status",
    params(("id" = String, Path, description = "Post id")),
    request_body = PostStatusAction,
    responses(
        (status = 200, description = "Status changed.", body = BlogPostDto),
        (status = 400, description = "Transition not allowed from the current status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn change_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(action): Json<PostStatusAction>,
) -> ApiResult<BlogPostDto> {
    state
        .services
        .blog_commands
        .change_status(&user, ChangePostStatusCommand { id, action })
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/admin/blog/categories",
    responses((status = 200, description = "All categories, inactive included.", body = [CategoryDto])),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> ApiResult<Vec<CategoryDto>> {
    state
        .services
        .blog_queries
        .list_admin_categories(&user)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    post,
    path = "/api/admin/blog/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 409, description = "Slug taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> ApiResult<CategoryDto> {
    let command = CreateCategoryCommand {
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        parent_id: payload.parent_id,
        order: payload.order,
        is_active: payload.is_active,
    };
    state
        .services
        .category_commands
        .create_category(&user, command)
        .await
        .into_http()
        .map(ApiResponse::created)
}

#[utoipa::path(
    put,
    path = "/api/admin/blog/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses((status = 200, description = "Category updated.", body = CategoryDto)),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> ApiResult<CategoryDto> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        parent_id: payload.parent_id,
        order: payload.order,
        is_active: payload.is_active,
    };
    state
        .services
        .category_commands
        .update_category(&user, command)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    delete,
    path = "/api/admin/blog/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted.", body = MessageDto),
        (status = 409, description = "Category still has subcategories.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin",
    security(("bearerAuth" = []))
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<MessageDto> {
    state
        .services
        .category_commands
        .delete_category(&user, id)
        .await
        .into_http()?;
    Ok(ApiResponse::success(MessageDto::new("category deleted")))
}
