mod convert;
mod health;

pub use convert::{ErrorResponse, convert_handler};
pub use health::{HealthResponse, health_handler};
