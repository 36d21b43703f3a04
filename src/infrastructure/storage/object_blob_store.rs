use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::ObjectStore;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::BlobLocation;

/// Read-only access to uploaded documents in any `object_store` backend.
pub struct ObjectBlobStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectBlobStore {
    pub fn new(inner: Arc<dyn ObjectStore>) -> Self {
        Self { inner }
    }

    pub fn local(base_path: PathBuf) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;
        Ok(Self::new(Arc::new(fs)))
    }

    pub fn azure(account: &str, access_key: &str, container: &str) -> Result<Self, BlobStoreError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(account)
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;
        Ok(Self::new(Arc::new(store)))
    }
}

#[async_trait]
impl BlobStore for ObjectBlobStore {
    #[tracing::instrument(skip(self), fields(location = %location))]
    async fn fetch(&self, location: &BlobLocation) -> Result<Bytes, BlobStoreError> {
        let object_path = location.object_path();
        if object_path.is_empty() {
            return Err(BlobStoreError::InvalidLocation(location.to_string()));
        }

        let store_path = StorePath::from(object_path.as_ref());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => BlobStoreError::NotFound(object_path.to_string()),
            other => BlobStoreError::DownloadFailed(other.to_string()),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;

        tracing::debug!(bytes = bytes.len(), "Blob downloaded");
        Ok(bytes)
    }
}
