use crate::domain::blog::{BlogPost, FormatConfig, PostStatus};
use crate::domain::category::Category;
use crate::domain::hierarchy::TreeNode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormatConfigDto {
    pub line_height: f32,
    pub paragraph_spacing: f32,
}

impl From<FormatConfig> for FormatConfigDto {
    fn from(config: FormatConfig) -> Self {
        Self {
            line_height: config.line_height(),
            paragraph_spacing: config.paragraph_spacing(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub tags: Vec<String>,
    pub status: PostStatus,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: u64,
    pub format_config: FormatConfigDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub reading_time: u32,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostDto {
    fn from(post: BlogPost) -> Self {
        let reading_time = post.reading_time_minutes();
        Self {
            id: post.id.to_string(),
            title: post.title.to_string(),
            slug: post.slug.to_string(),
            excerpt: post.excerpt,
            content: post.content,
            author_id: post.author_id.to_string(),
            category_id: post.category_id.map(String::from),
            tags: post.tags,
            status: post.status,
            published_at: post.published_at,
            view_count: post.view_count,
            format_config: post.format_config.into(),
            featured_image: post.featured_image,
            reading_time,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewCountDto {
    pub view_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub is_subcategory: bool,
    pub order: i32,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        let is_subcategory = category.is_subcategory();
        Self {
            id: category.id.to_string(),
            name: category.name,
            slug: category.slug.to_string(),
            description: category.description,
            parent_id: category.parent_id.map(String::from),
            is_subcategory,
            order: category.order,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryNodeDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    #[schema(no_recursion)]
    pub children: Vec<CategoryNodeDto>,
}

impl From<TreeNode<Category>> for CategoryNodeDto {
    fn from(node: TreeNode<Category>) -> Self {
        Self {
            category: node.item.into(),
            children: node.children.into_iter().map(Self::from).collect(),
        }
    }
}
