// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub url: String,
    pub pathname: String,
}

#[async_trait]
pub trait BlobStorage: Send + Sync {
    async fn put(
        &self,
        pathname: &str,
        content_type: &str,
        body: Bytes,
    ) -> ApplicationResult<StoredBlob>;
}
