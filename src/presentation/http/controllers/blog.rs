// src/presentation/http/controllers/blog.rs
//! Public blog endpoints. Only published posts, and scheduled posts whose
//! date has passed, are visible here.
use crate::application::{
    dto::{BlogPostDto, CategoryDto, CategoryNodeDto, Page, ViewCountDto},
    queries::blog::ListPublicPostsQuery,
};
use crate::presentation::http::error::IntoHttpResult;
use crate::presentation::http::response::{ApiResponse, ApiResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PublicPostParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Category slug.
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/blog/posts",
    params(PublicPostParams),
    responses((status = 200, description = "Visible posts, newest first.", body = Page<BlogPostDto>)),
    tag = "Blog"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PublicPostParams>,
) -> ApiResult<Page<BlogPostDto>> {
    let query = ListPublicPostsQuery {
        page: params.page,
        limit: params.limit,
        category: params.category,
        tag: params.tag,
        search: params.search,
    };
    state
        .services
        .blog_queries
        .list_public_posts(query)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/blog/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post.", body = BlogPostDto),
        (status = 404, description = "Unknown or not yet visible.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> ApiResult<BlogPostDto> {
    state
        .services
        .blog_queries
        .get_public_post(slug)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/blog/posts/{slug}/related",
    params(("slug" = String, Path, description = "Post slug")),
    responses((status = 200, description = "Up to three posts sharing the category or a tag.", body = [BlogPostDto])),
    tag = "Blog"
)]
pub async fn related_posts(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> ApiResult<Vec<BlogPostDto>> {
    state
        .services
        .blog_queries
        .related_posts(slug)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    post,
    path = "/api/blog/posts/{slug}/view",
    params(("slug" = String, Path, description = "Post slug")),
    responses((status = 200, description = "View recorded.", body = ViewCountDto)),
    tag = "Blog"
)]
pub async fn record_view(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> ApiResult<ViewCountDto> {
    state
        .services
        .blog_commands
        .record_view(slug)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/blog/categories",
    responses((status = 200, description = "Active categories.", body = [CategoryDto])),
    tag = "Blog"
)]
pub async fn list_categories(Extension(state): Extension<HttpState>) -> ApiResult<Vec<CategoryDto>> {
    state
        .services
        .blog_queries
        .list_categories(true)
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/blog/categories/tree",
    responses((status = 200, description = "Active categories nested under their parents.", body = [CategoryNodeDto])),
    tag = "Blog"
)]
pub async fn category_tree(
    Extension(state): Extension<HttpState>,
) -> ApiResult<Vec<CategoryNodeDto>> {
    state
        .services
        .blog_queries
        .category_tree()
        .await
        .into_http()
        .map(ApiResponse::success)
}

#[utoipa::path(
    get,
    path = "/api/blog/categories/{id}/children",
    params(("id" = String, Path, description = "Parent category id")),
    responses((status = 200, description = "Active subcategories.", body = [CategoryDto])),
    tag = "Blog"
)]
pub async fn category_children(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<CategoryDto>> {
    state
        .services
        .blog_queries
        .subcategories(id)
        .await
        .into_http()
        .map(ApiResponse::success)
}
