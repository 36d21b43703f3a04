use async_trait::async_trait;

use crate::domain::{AnalysisMode, AnalyzedDocument};

/// Layout/OCR analysis service. The call resolves only once the analysis has fully completed.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        data: &[u8],
        mode: AnalysisMode,
    ) -> Result<AnalyzedDocument, AnalysisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("document analysis is not configured")]
    NotConfigured,
    #[error("analysis request failed: {0}")]
    RequestFailed(String),
    #[error("analysis service returned {status}: {body}")]
    ServiceError { status: u16, body: String },
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
    #[error("analysis timed out after {0}s")]
    Timeout(u64),
    #[error("invalid analysis response: {0}")]
    InvalidResponse(String),
}
