use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::BlobLocation;

#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn fetch(&self, location: &BlobLocation) -> Result<Bytes, BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("blob not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("invalid blob location: {0}")]
    InvalidLocation(String),
}
