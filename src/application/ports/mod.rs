mod blob_store;
mod clock;
mod document_analyzer;
mod extractor;

pub use blob_store::{BlobStore, BlobStoreError};
pub use clock::{Clock, SystemClock};
pub use document_analyzer::{AnalysisError, DocumentAnalyzer};
pub use extractor::{ExtractionError, Extractor};
