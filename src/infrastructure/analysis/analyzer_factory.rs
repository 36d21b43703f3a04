use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::DocumentAnalyzer;
use crate::presentation::config::{AnalysisProvider, AnalysisSettings};

use super::azure_doc_intel_analyzer::{AnalyzerTimeouts, AzureDocIntelAnalyzer};
use super::disabled_analyzer::DisabledAnalyzer;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerFactoryError {
    #[error("azure_endpoint is required for the Azure Document Intelligence provider")]
    MissingAzureEndpoint,
    #[error("azure_key is required for the Azure Document Intelligence provider")]
    MissingAzureKey,
    #[error("analyzer initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct AnalyzerFactory;

impl AnalyzerFactory {
    pub fn create(
        settings: &AnalysisSettings,
    ) -> Result<Arc<dyn DocumentAnalyzer>, AnalyzerFactoryError> {
        match settings.provider {
            AnalysisProvider::Azure => {
                let endpoint = settings
                    .azure_endpoint
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
                    .ok_or(AnalyzerFactoryError::MissingAzureEndpoint)?;
                let key = settings
                    .azure_key
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
                    .ok_or(AnalyzerFactoryError::MissingAzureKey)?;
                let timeouts = AnalyzerTimeouts {
                    request: Duration::from_secs(settings.request_timeout_secs),
                    polling: Duration::from_secs(settings.poll_timeout_secs),
                };
                tracing::info!(endpoint, "Loading Azure Document Intelligence analyzer");
                let analyzer = AzureDocIntelAnalyzer::new(endpoint, key, timeouts)
                    .map_err(|e| AnalyzerFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(analyzer))
            }
            AnalysisProvider::Disabled => {
                tracing::warn!("Document analysis disabled; PDF and image conversions will report errors");
                Ok(Arc::new(DisabledAnalyzer))
            }
        }
    }
}
