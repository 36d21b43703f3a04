use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::ExtractedSection;

use super::AnalysisError;

/// Turns the raw bytes of one document kind into rendered-ready sections.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, data: Bytes) -> Result<Vec<ExtractedSection>, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("document analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("failed to read document package: {0}")]
    Package(String),
    #[error("failed to parse document: {0}")]
    Parse(String),
    #[error("extraction task failed: {0}")]
    Task(String),
}
