use crate::domain::legal::LegalContent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegalContentDto {
    pub key: String,
    pub title: String,
    pub content: String,
    pub updated_by: String,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<LegalContent> for LegalContentDto {
    fn from(content: LegalContent) -> Self {
        Self {
            key: content.key.to_string(),
            title: content.title,
            content: content.content,
            updated_by: content.updated_by.to_string(),
            updated_at: content.updated_at,
        }
    }
}
