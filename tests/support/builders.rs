// tests/support/builders.rs
use super::mocks::fixed_now;
use altum_legal::domain::{
    access::UserId,
    attorney::{Attorney, AttorneyProfile},
    blog::{BlogPost, FormatConfig, NewBlogPost, PostStatus, PostTitle},
    category::{Category, NewCategory},
    service::{NewService, Service},
    shared::{DocumentId, Slug},
};
use axum::{
    body::Body,
    http::{Method, Request, header},
};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

pub fn id(n: u32) -> DocumentId {
    DocumentId::new(format!("{n:024x}")).expect("hex id")
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    request(Method::GET, uri, token, None)
}

pub fn json(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    request(method, uri, token, Some(body))
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("request")
}

/// Minimal `multipart/form-data` body with a `file` part and optional
/// `category` part.
pub fn multipart_upload(
    token: Option<&str>,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
    category: Option<&str>,
) -> Request<Body> {
    const BOUNDARY: &str = "altum-test-boundary";
    let mut body = Vec::new();
    if let Some(category) = category {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"category\"\r\n\r\n{category}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).expect("request")
}

pub struct AttorneyBuilder {
    id: DocumentId,
    profile: AttorneyProfile,
    slug: Option<Slug>,
}

impl AttorneyBuilder {
    pub fn new(n: u32, name: &str) -> Self {
        Self {
            id: id(n),
            profile: AttorneyProfile {
                name: name.into(),
                position: "Asociado".into(),
                email: format!("abogado{n}@altumlegal.mx"),
                is_active: true,
                ..AttorneyProfile::default()
            },
            slug: None,
        }
    }

    pub fn partner(mut self) -> Self {
        self.profile.is_partner = true;
        self.profile.position = "Socio".into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.profile.is_active = false;
        self
    }

    pub fn specializations(mut self, values: &[&str]) -> Self {
        self.profile.specializations = values.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn services(mut self, ids: &[u32]) -> Self {
        self.profile.service_ids = ids.iter().map(|n| id(*n).to_string()).collect();
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = Some(Slug::new(slug).expect("slug"));
        self
    }

    pub fn build(self) -> Attorney {
        let now = fixed_now() - Duration::days(30);
        Attorney::new(self.id, self.profile, self.slug, now, now).expect("valid attorney")
    }
}

pub struct PostBuilder {
    id: DocumentId,
    input: NewBlogPost,
}

impl PostBuilder {
    pub fn new(n: u32, title: &str, author: &str) -> Self {
        Self {
            id: id(n),
            input: NewBlogPost {
                title: PostTitle::new(title).expect("title"),
                slug: Slug::new(format!("post-{n}")).expect("slug"),
                excerpt: format!("Resumen de {title}"),
                content: format!("<p>{title}</p>"),
                author_id: UserId::new(author).expect("author"),
                category_id: None,
                tags: Vec::new(),
                status: None,
                published_at: None,
                format_config: FormatConfig::default(),
                featured_image: None,
            },
        }
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.input.slug = Slug::new(slug).expect("slug");
        self
    }

    pub fn published(mut self, at: DateTime<Utc>) -> Self {
        self.input.status = Some(PostStatus::Published);
        self.input.published_at = Some(at);
        self
    }

    pub fn category(mut self, n: u32) -> Self {
        self.input.category_id = Some(id(n));
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.input.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Built at `fixed_now() - 60 days` so scheduling relative to the fixed
    /// clock behaves like production.
    pub fn build(self) -> BlogPost {
        BlogPost::create(self.id, self.input, fixed_now() - Duration::days(60)).expect("valid post")
    }

    /// Scheduled for `at`, which may already have passed.
    pub fn scheduled(self, at: DateTime<Utc>) -> BlogPost {
        let mut input = self.input;
        input.status = Some(PostStatus::Scheduled);
        input.published_at = Some(at);
        let created = at - Duration::days(1);
        BlogPost::create(self.id, input, created).expect("valid scheduled post")
    }
}

pub fn category(n: u32, name: &str, parent: Option<u32>, active: bool) -> Category {
    Category::create(
        id(n),
        NewCategory {
            name: name.into(),
            slug: Slug::new(format!("categoria-{n}")).expect("slug"),
            description: None,
            parent_id: parent.map(id),
            order: n as i32,
            is_active: active,
        },
        fixed_now() - Duration::days(90),
    )
    .expect("valid category")
}

pub fn service(n: u32, name: &str, parent: Option<u32>, active: bool) -> Service {
    Service::create(
        id(n),
        NewService {
            name: name.into(),
            slug: Slug::new(format!("servicio-{n}")).expect("slug"),
            description: format!("{name} para empresas"),
            short_description: name.into(),
            icon_url: None,
            parent_id: parent.map(id),
            order: n as i32,
            is_active: active,
        },
        fixed_now() - Duration::days(90),
    )
    .expect("valid service")
}
