// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{
        admin_blog, attorneys, blog, health, legal, migrations, services, session, upload, users,
    },
    middleware::rate_limit_layer,
    openapi,
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Cross-cutting router settings taken from the process config.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Browser origins allowed by CORS. Empty means any origin, without
    /// credentials.
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
            .max_age(Duration::from_secs(3600));
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(methods)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

fn api_routes() -> Router {
    Router::new()
        .route("/api/auth/session", get(session::current_session))
        // attorneys
        .route(
            "/api/attorneys",
            get(attorneys::list_attorneys).post(attorneys::create_attorney),
        )
        .route("/api/attorneys/active", get(attorneys::list_active))
        .route("/api/attorneys/partners", get(attorneys::list_partners))
        .route("/api/attorneys/search", get(attorneys::search_attorneys))
        .route(
            "/api/attorneys/slug/{slug}",
            get(attorneys::get_attorney_by_slug),
        )
        .route(
            "/api/attorneys/{id}",
            get(attorneys::get_attorney)
                .put(attorneys::update_attorney)
                .delete(attorneys::delete_attorney),
        )
        // practice areas
        .route(
            "/api/services",
            get(services::list_services).post(services::create_service),
        )
        .route("/api/services/tree", get(services::service_tree))
        .route(
            "/api/services/{id}",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
        .route("/api/services/{id}/children", get(services::service_children))
        .route(
            "/api/services/{id}/attorneys",
            get(services::service_attorneys),
        )
        // public blog
        .route("/api/blog/posts", get(blog::list_posts))
        .route("/api/blog/posts/{slug}", get(blog::get_post))
        .route("/api/blog/posts/{slug}/related", get(blog::related_posts))
        .route("/api/blog/posts/{slug}/view", post(blog::record_view))
        .route("/api/blog/categories", get(blog::list_categories))
        .route("/api/blog/categories/tree", get(blog::category_tree))
        .route(
            "/api/blog/categories/{id}/children",
            get(blog::category_children),
        )
        // admin
        .route(
            "/api/admin/blog/posts",
            get(admin_blog::list_posts)
                .post(admin_blog::create_post)
                .delete(admin_blog::delete_post),
        )
        .route(
            "/api/admin/blog/posts/{id}",
            get(admin_blog::get_post).put(admin_blog::update_post),
        )
        .route(
            "/api/admin/blog/posts/{id}/status",
            post(admin_blog::change_status),
        )
        .route(
            "/api/admin/blog/categories",
            get(admin_blog::list_categories).post(admin_blog::create_category),
        )
        .route(
            "/api/admin/blog/categories/{id}",
            put(admin_blog::update_category).delete(admin_blog::delete_category),
        )
        .route(
            "/api/admin/users",
            get(users::list_users).put(users::update_user_role),
        )
        .route("/api/admin/migrate-slugs", post(migrations::migrate_slugs))
        // content
        .route(
            "/api/upload",
            post(upload::upload_file).layer(DefaultBodyLimit::max(upload::UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/api/legal-content",
            get(legal::get_legal_content).put(legal::upsert_legal_content),
        )
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let mut api = api_routes();
    if options.rate_limit {
        if let Some(limiter) = rate_limit_layer() {
            api = api.layer(limiter);
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health::health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

