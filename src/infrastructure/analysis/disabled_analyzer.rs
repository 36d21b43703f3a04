use async_trait::async_trait;

use crate::application::ports::{AnalysisError, DocumentAnalyzer};
use crate::domain::{AnalysisMode, AnalyzedDocument};

/// Stands in when no analysis service is configured. PDF and image conversions then
/// carry a `CONVERSION ERROR` section instead of content.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledAnalyzer;

#[async_trait]
impl DocumentAnalyzer for DisabledAnalyzer {
    async fn analyze(
        &self,
        _data: &[u8],
        mode: AnalysisMode,
    ) -> Result<AnalyzedDocument, AnalysisError> {
        tracing::warn!(mode = mode.as_str(), "Analysis requested but no provider is configured");
        Err(AnalysisError::NotConfigured)
    }
}
