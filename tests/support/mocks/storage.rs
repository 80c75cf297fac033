// tests/support/mocks/storage.rs
use altum_legal::application::{
    ApplicationResult,
    ports::storage::{BlobStorage, StoredBlob},
};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Mutex;

/// Records every upload and answers with a predictable public URL.
#[derive(Default)]
pub struct MemoryBlobStorage {
    pub uploads: Mutex<Vec<(String, String, usize)>>,
}

impl MemoryBlobStorage {
    pub fn uploaded(&self) -> Vec<(String, String, usize)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStorage for MemoryBlobStorage {
    async fn put(
        &self,
        pathname: &str,
        content_type: &str,
        body: Bytes,
    ) -> ApplicationResult<StoredBlob> {
        self.uploads
            .lock()
            .unwrap()
            .push((pathname.to_string(), content_type.to_string(), body.len()));
        Ok(StoredBlob {
            url: format!("https://blob.test/{pathname}"),
            pathname: pathname.to_string(),
        })
    }
}
