// tests/support/helpers.rs
use super::mocks::{
    DummyIdentityProvider, FixedClock, MemoryAttorneyRepo, MemoryBlogPostRepo,
    MemoryBlobStorage, MemoryCategoryRepo, MemoryLegalRepo, MemoryServiceRepo, SequentialIds,
};
use altum_legal::application::ports::storage::BlobStorage;
use altum_legal::application::services::{ApplicationServices, ServiceDependencies};
use altum_legal::infrastructure::util::DefaultSlugGenerator;
use altum_legal::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use axum::{Router, body::Body, http::Request, http::StatusCode, response::Response};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router plus handles on every in-memory backend, so tests can seed data
/// and inspect side effects.
pub struct TestApp {
    pub router: Router,
    pub attorneys: Arc<MemoryAttorneyRepo>,
    pub posts: Arc<MemoryBlogPostRepo>,
    pub categories: Arc<MemoryCategoryRepo>,
    pub services: Arc<MemoryServiceRepo>,
    pub legal: Arc<MemoryLegalRepo>,
    pub identity: Arc<DummyIdentityProvider>,
    pub storage: Arc<MemoryBlobStorage>,
}

#[derive(Default)]
pub struct Seed {
    pub attorneys: MemoryAttorneyRepo,
    pub posts: MemoryBlogPostRepo,
    pub categories: MemoryCategoryRepo,
    pub services: MemoryServiceRepo,
    /// Leave storage unconfigured to exercise the disabled-uploads path.
    pub without_storage: bool,
}

pub fn make_test_app() -> TestApp {
    make_test_app_with(Seed::default())
}

pub fn make_test_app_with(seed: Seed) -> TestApp {
    let attorneys = Arc::new(seed.attorneys);
    let posts = Arc::new(seed.posts);
    let categories = Arc::new(seed.categories);
    let services = Arc::new(seed.services);
    let legal = Arc::new(MemoryLegalRepo::default());
    let identity = Arc::new(DummyIdentityProvider::default());
    let storage = Arc::new(MemoryBlobStorage::default());

    let blob: Option<Arc<dyn BlobStorage>> = if seed.without_storage {
        None
    } else {
        Some(storage.clone())
    };

    let app_services = Arc::new(ApplicationServices::new(ServiceDependencies {
        attorneys: attorneys.clone(),
        posts: posts.clone(),
        categories: categories.clone(),
        services: services.clone(),
        legal: legal.clone(),
        identity: identity.clone(),
        storage: blob,
        clock: Arc::new(FixedClock),
        slugger: Arc::new(DefaultSlugGenerator),
        ids: Arc::new(SequentialIds::starting_at(1000)),
    }));

    let router = build_router(
        HttpState {
            services: app_services,
        },
        &RouterOptions::default(),
    );

    TestApp {
        router,
        attorneys,
        posts,
        categories,
        services,
        legal,
        identity,
        storage,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Send and decode the JSON body.
    pub async fn call(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.send(request).await;
        let status = response.status();
        (status, body_json(response).await)
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert the failure envelope and return its message.
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode) -> String {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["success"], Value::Bool(false), "body: {body}");
    body["error"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| panic!("error message missing in {body}"))
}

/// Assert the success envelope and return its `data`.
pub fn assert_ok(status: StatusCode, body: &Value, expected: StatusCode) -> Value {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["success"], Value::Bool(true), "body: {body}");
    body["data"].clone()
}
