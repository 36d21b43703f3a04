use std::sync::Arc;

use crate::application::ports::{BlobStore, Clock};
use crate::application::services::ConversionService;

#[derive(Clone)]
pub struct AppState {
    pub conversion_service: Arc<ConversionService>,
    pub blob_store: Arc<dyn BlobStore>,
    pub clock: Arc<dyn Clock>,
}
