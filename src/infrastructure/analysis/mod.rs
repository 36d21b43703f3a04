mod analyzer_factory;
mod azure_doc_intel_analyzer;
mod disabled_analyzer;

pub use analyzer_factory::{AnalyzerFactory, AnalyzerFactoryError};
pub use azure_doc_intel_analyzer::{
    API_VERSION, AnalyzeResponse, AnalyzeResult, AnalyzerTimeouts, AzureDocIntelAnalyzer,
};
pub use disabled_analyzer::DisabledAnalyzer;
