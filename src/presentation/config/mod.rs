mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AnalysisProvider, AnalysisSettings, LoggingSettings, ServerSettings, Settings,
    StorageProvider, StorageSettings,
};
