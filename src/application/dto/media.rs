use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadResultDto {
    pub url: String,
    pub filename: String,
    pub size: u64,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugMigrationReport {
    pub processed: u32,
    pub updated: u32,
    pub skipped: u32,
    pub errors: Vec<String>,
}
