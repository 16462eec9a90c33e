//! Startup and serving errors for the binary.

use thiserror::Error;

use crate::adapters::benchmark::CatalogError;
use crate::config::{ConfigError, ValidationError};
use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("benchmark catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid CORS origin '{0}'")]
    CorsOrigin(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
