// src/infrastructure/repositories/mongo_blog_post.rs
use super::common::{all_of, contains_ci, document_id, find_page, from_bson_time, oid, to_bson_time};
use super::error::{corrupt, map_mongo};
use crate::domain::access::UserId;
use crate::domain::blog::{
    BlogPost, BlogPostFilter, BlogPostRepository, FormatConfig, PostStatus, PostTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{DocumentId, PageRequest, Paged, Slug};
use crate::infrastructure::database::BLOG_POSTS;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use serde::{Deserialize, Serialize};

const ENTITY: &str = "blog post";

#[derive(Clone)]
pub struct MongoBlogPostRepository {
    collection: Collection<BlogPostDocument>,
}

impl MongoBlogPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(BLOG_POSTS),
        }
    }

    fn sort() -> Document {
        doc! { "publishedAt": -1, "createdAt": -1, "_id": -1 }
    }

    async fn find_one(&self, filter: Document) -> DomainResult<Option<BlogPost>> {
        self.collection
            .find_one(filter)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .map(BlogPost::try_from)
            .transpose()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormatConfigDocument {
    line_height: f64,
    paragraph_spacing: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogPostDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    slug: String,
    #[serde(default)]
    excerpt: String,
    content: String,
    author: String,
    #[serde(default)]
    category: Option<ObjectId>,
    #[serde(default)]
    tags: Vec<String>,
    status: String,
    #[serde(default)]
    published_at: Option<bson::DateTime>,
    #[serde(default)]
    view_count: i64,
    #[serde(default)]
    format_config: Option<FormatConfigDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    featured_image: Option<String>,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

impl BlogPostDocument {
    fn from_entity(post: &BlogPost) -> DomainResult<Self> {
        Ok(Self {
            id: oid(&post.id)?,
            title: post.title.to_string(),
            slug: post.slug.to_string(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            author: post.author_id.to_string(),
            category: post.category_id.as_ref().map(oid).transpose()?,
            tags: post.tags.clone(),
            status: post.status.as_str().to_string(),
            published_at: post.published_at.map(to_bson_time),
            view_count: i64::try_from(post.view_count).unwrap_or(i64::MAX),
            format_config: Some(FormatConfigDocument {
                line_height: f64::from(post.format_config.line_height()),
                paragraph_spacing: f64::from(post.format_config.paragraph_spacing()),
            }),
            featured_image: post.featured_image.clone(),
            created_at: to_bson_time(post.created_at),
            updated_at: to_bson_time(post.updated_at),
        })
    }
}

impl TryFrom<BlogPostDocument> for BlogPost {
    type Error = DomainError;

    fn try_from(doc: BlogPostDocument) -> Result<Self, Self::Error> {
        let id = document_id(&doc.id)?;
        let build = || -> DomainResult<BlogPost> {
            let format_config = match doc.format_config {
                Some(cfg) => FormatConfig::new(cfg.line_height as f32, cfg.paragraph_spacing as f32)?,
                None => FormatConfig::default(),
            };
            Ok(BlogPost {
                id: id.clone(),
                title: PostTitle::new(doc.title.clone())?,
                slug: Slug::new(doc.slug.clone())?,
                excerpt: doc.excerpt.clone(),
                content: doc.content.clone(),
                author_id: UserId::new(doc.author.clone())?,
                category_id: doc.category.as_ref().map(document_id).transpose()?,
                tags: doc.tags.clone(),
                status: doc.status.parse::<PostStatus>()?,
                published_at: doc.published_at.map(from_bson_time),
                view_count: u64::try_from(doc.view_count).unwrap_or(0),
                format_config,
                featured_image: doc.featured_image.clone(),
                created_at: from_bson_time(doc.created_at),
                updated_at: from_bson_time(doc.updated_at),
            })
        };
        build().map_err(|err| corrupt(ENTITY, &id, err))
    }
}

fn visible_at(now: DateTime<Utc>) -> Document {
    doc! {
        "$or": [
            { "status": PostStatus::Published.as_str() },
            {
                "status": PostStatus::Scheduled.as_str(),
                "publishedAt": { "$lte": to_bson_time(now) },
            },
        ]
    }
}

fn filter_document(filter: &BlogPostFilter) -> DomainResult<Document> {
    let mut conditions = Vec::new();
    if let Some(status) = filter.status {
        conditions.push(doc! { "status": status.as_str() });
    }
    if let Some(category) = &filter.category_id {
        conditions.push(doc! { "category": oid(category)? });
    }
    if let Some(author) = &filter.author_id {
        conditions.push(doc! { "author": author.as_str() });
    }
    if let Some(tag) = filter.tag.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        conditions.push(doc! { "tags": tag.to_lowercase() });
    }
    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = contains_ci(search);
        conditions.push(doc! {
            "$or": [
                { "title": pattern.clone() },
                { "excerpt": pattern.clone() },
                { "tags": pattern },
            ]
        });
    }
    if let Some(now) = filter.visible_at {
        conditions.push(visible_at(now));
    }
    Ok(all_of(conditions))
}

#[async_trait]
impl BlogPostRepository for MongoBlogPostRepository {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<BlogPost>> {
        self.find_one(doc! { "_id": oid(id)? }).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        self.find_one(doc! { "slug": slug.as_str() }).await
    }

    async fn find_all(
        &self,
        filter: &BlogPostFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<BlogPost>> {
        let (documents, total) =
            find_page(&self.collection, filter_document(filter)?, Self::sort(), page)
                .await
                .map_err(|err| map_mongo(ENTITY, err))?;
        let items = documents
            .into_iter()
            .map(BlogPost::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Paged::new(items, total, page))
    }

    async fn find_related(
        &self,
        post: &BlogPost,
        now: DateTime<Utc>,
        limit: u32,
    ) -> DomainResult<Vec<BlogPost>> {
        let mut shared = Vec::new();
        if let Some(category) = &post.category_id {
            shared.push(doc! { "category": oid(category)? });
        }
        if !post.tags.is_empty() {
            shared.push(doc! { "tags": { "$in": post.tags.clone() } });
        }
        if shared.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let filter = all_of(vec![
            doc! { "_id": { "$ne": oid(&post.id)? } },
            doc! { "$or": shared },
            visible_at(now),
        ]);
        let documents: Vec<BlogPostDocument> = self
            .collection
            .find(filter)
            .sort(Self::sort())
            .limit(i64::from(limit))
            .await
            .map_err(|err| map_mongo(ENTITY, err))?
            .try_collect()
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        documents.into_iter().map(BlogPost::try_from).collect()
    }

    async fn insert(&self, post: &BlogPost) -> DomainResult<()> {
        let document = BlogPostDocument::from_entity(post)?;
        self.collection
            .insert_one(document)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        Ok(())
    }

    async fn update(&self, post: &BlogPost) -> DomainResult<()> {
        let document = BlogPostDocument::from_entity(post)?;
        let result = self
            .collection
            .replace_one(doc! { "_id": document.id }, document)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        if result.matched_count == 0 {
            return Err(DomainError::not_found(format!("blog post {}", post.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: &DocumentId) -> DomainResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": oid(id)? })
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        if result.deleted_count == 0 {
            return Err(DomainError::not_found(format!("blog post {id}")));
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: &DocumentId) -> DomainResult<Option<u64>> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": oid(id)? },
                doc! { "$inc": { "viewCount": 1_i64 } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|err| map_mongo(ENTITY, err))?;
        Ok(updated.map(|doc| u64::try_from(doc.view_count).unwrap_or(0)))
    }
}
