use serde::Deserialize;

use super::BlobLocation;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionRequest {
    pub blob_location: String,
    pub file_name: String,
    pub mime_type: String,
    pub client: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionRequestError {
    #[error("blobLocation is required")]
    MissingBlobLocation,
    #[error("fileName is required")]
    MissingFileName,
}

impl ConversionRequest {
    pub fn validate(&self) -> Result<(), ConversionRequestError> {
        if self.blob_location.trim().is_empty() {
            return Err(ConversionRequestError::MissingBlobLocation);
        }
        if self.file_name.trim().is_empty() {
            return Err(ConversionRequestError::MissingFileName);
        }
        Ok(())
    }

    pub fn location(&self) -> BlobLocation {
        BlobLocation::from_raw(self.blob_location.clone())
    }
}
