// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::{
    admin_blog, attorneys, blog, health, legal, migrations, services, session, upload, users,
};
use axum::{Router, response::Redirect, routing::get};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        session::current_session,
        attorneys::list_attorneys,
        attorneys::list_active,
        attorneys::list_partners,
        attorneys::search_attorneys,
        attorneys::get_attorney,
        attorneys::get_attorney_by_slug,
        attorneys::create_attorney,
        attorneys::update_attorney,
        attorneys::delete_attorney,
        services::list_services,
        services::service_tree,
        services::get_service,
        services::service_children,
        services::service_attorneys,
        services::create_service,
        services::update_service,
        services::delete_service,
        blog::list_posts,
        blog::get_post,
        blog::related_posts,
        blog::record_view,
        blog::list_categories,
        blog::category_tree,
        blog::category_children,
        admin_blog::list_posts,
        admin_blog::get_post,
        admin_blog::create_post,
        admin_blog::update_post,
        admin_blog::delete_post,
        admin_blog::change_status,
        admin_blog::list_categories,
        admin_blog::create_category,
        admin_blog::update_category,
        admin_blog::delete_category,
        users::list_users,
        users::update_user_role,
        migrations::migrate_slugs,
        upload::upload_file,
        legal::get_legal_content,
        legal::upsert_legal_content
    ),
    components(
        schemas(
            health::StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::response::MessageDto,
            attorneys::CreateAttorneyRequest,
            attorneys::UpdateAttorneyRequest,
            services::CreateServiceRequest,
            services::UpdateServiceRequest,
            admin_blog::CreatePostRequest,
            admin_blog::UpdatePostRequest,
            admin_blog::CreateCategoryRequest,
            admin_blog::UpdateCategoryRequest,
            users::UpdateUserRoleRequest,
            legal::UpsertLegalContentRequest,
            upload::UploadForm,
            crate::application::commands::blog::PostStatusAction,
            crate::application::dto::AttorneyDto,
            crate::application::dto::AttorneyProfileDto,
            crate::application::dto::ServiceDto,
            crate::application::dto::ServiceNodeDto,
            crate::application::dto::BlogPostDto,
            crate::application::dto::FormatConfigDto,
            crate::application::dto::ViewCountDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryNodeDto,
            crate::application::dto::ManagedUserDto,
            crate::application::dto::SessionDto,
            crate::application::dto::LegalContentDto,
            crate::application::dto::UploadResultDto,
            crate::application::dto::SlugMigrationReport,
            crate::domain::access::Role,
            crate::domain::access::Permission,
            crate::domain::blog::PostStatus
        )
    ),
    tags(
        (name = "System", description = "Health and documentation"),
        (name = "Auth", description = "Session introspection"),
        (name = "Attorneys", description = "Firm attorney directory"),
        (name = "Services", description = "Practice-area taxonomy"),
        (name = "Blog", description = "Public blog"),
        (name = "Admin", description = "Dashboard endpoints for staff"),
        (name = "Media", description = "File uploads"),
        (name = "Legal", description = "Privacy notice and other legal pages")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Altum Legal API",
        description = "Content backend for the Altum Legal site. Every response is wrapped as `{success, data}` or `{success: false, error}`.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();
        urls.push("http://localhost:3000".to_string());

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
