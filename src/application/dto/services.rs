use crate::domain::hierarchy::TreeNode;
use crate::domain::service::Service;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub order: i32,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for ServiceDto {
    fn from(service: Service) -> Self {
        Self {
            id: service.id.to_string(),
            name: service.name,
            slug: service.slug.to_string(),
            description: service.description,
            short_description: service.short_description,
            icon_url: service.icon_url,
            parent_id: service.parent_id.map(String::from),
            order: service.order,
            is_active: service.is_active,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceNodeDto {
    #[serde(flatten)]
    pub service: ServiceDto,
    #[schema(no_recursion)]
    pub children: Vec<ServiceNodeDto>,
}

impl From<TreeNode<Service>> for ServiceNodeDto {
    fn from(node: TreeNode<Service>) -> Self {
        Self {
            service: node.item.into(),
            children: node.children.into_iter().map(Self::from).collect(),
        }
    }
}
