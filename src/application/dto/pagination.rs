use crate::domain::shared::Paged;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offset page as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Page<T> {
    pub fn from_paged<U>(paged: Paged<U>, f: impl FnMut(U) -> T) -> Self {
        let total_pages = paged.total_pages();
        let has_next = paged.has_next();
        let has_prev = paged.has_prev();
        let request = paged.request;
        let total = paged.total;
        Self {
            items: paged.items.into_iter().map(f).collect(),
            total,
            page: request.page(),
            limit: request.limit(),
            total_pages,
            has_next,
            has_prev,
        }
    }
}
