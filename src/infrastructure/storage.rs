// src/infrastructure/storage.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::storage::{BlobStorage, StoredBlob},
};
use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Blob store speaking the `PUT {base}/{pathname}` protocol with a bearer
/// token. The response carries the public URL and the stored pathname.
pub struct HttpBlobStorage {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct PutResponse {
    url: String,
    pathname: String,
}

impl HttpBlobStorage {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> ApplicationResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }
}

fn upload_failed(err: impl std::fmt::Display) -> ApplicationError {
    error!(error = %err, "blob upload failed");
    ApplicationError::infrastructure("file upload failed")
}

#[async_trait]
impl BlobStorage for HttpBlobStorage {
    async fn put(
        &self,
        pathname: &str,
        content_type: &str,
        body: Bytes,
    ) -> ApplicationResult<StoredBlob> {
        let size = body.len();
        let response = self
            .http
            .put(format!("{}/{}", self.base_url, pathname))
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-content-type", content_type)
            .header("x-add-random-suffix", "0")
            .body(body)
            .send()
            .await
            .map_err(upload_failed)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(upload_failed(format!("status {status}: {text}")));
        }

        let stored: PutResponse = response.json().await.map_err(upload_failed)?;
        info!(pathname = %stored.pathname, size, "blob stored");
        Ok(StoredBlob {
            url: stored.url,
            pathname: stored.pathname,
        })
    }
}
