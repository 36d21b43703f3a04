use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::presentation::config::{StorageProvider, StorageSettings};

use super::object_blob_store::ObjectBlobStore;

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreFactoryError {
    #[error("{0} is required for the Azure storage provider")]
    MissingSetting(&'static str),
    #[error("blob store initialization failed: {0}")]
    InitializationFailed(#[from] BlobStoreError),
}

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn BlobStore>, BlobStoreFactoryError> {
        match settings.provider {
            StorageProvider::Local => {
                tracing::info!(path = %settings.local_path, "Using local blob storage");
                let store = ObjectBlobStore::local(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
            StorageProvider::Azure => {
                let account = settings
                    .azure_account
                    .as_deref()
                    .ok_or(BlobStoreFactoryError::MissingSetting("azure_account"))?;
                let key = settings
                    .azure_access_key
                    .as_deref()
                    .ok_or(BlobStoreFactoryError::MissingSetting("azure_access_key"))?;
                let container = settings
                    .azure_container
                    .as_deref()
                    .ok_or(BlobStoreFactoryError::MissingSetting("azure_container"))?;
                tracing::info!(account, container, "Using Azure blob storage");
                let store = ObjectBlobStore::azure(account, key, container)?;
                Ok(Arc::new(store))
            }
        }
    }
}
