//! Service wiring: state from configuration, middleware, serving.

use std::path::Path;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::adapters::benchmark::InMemoryBenchmarkCatalog;
use crate::adapters::http::{mcda_router, McdaAppState};
use crate::adapters::import::CsvDecisionMatrixImporter;
use crate::config::{AppConfig, BenchmarkConfig, ServerConfig};
use crate::domain::attributes::HardwareScorer;
use crate::error::AppError;

fn load_catalog(path: Option<&Path>, label: &str) -> Result<InMemoryBenchmarkCatalog, AppError> {
    match path {
        Some(path) => {
            let catalog = InMemoryBenchmarkCatalog::from_path(path)?;
            info!(catalog = label, path = %path.display(), entries = catalog.len(), "Benchmark catalog loaded");
            Ok(catalog)
        }
        None => {
            info!(catalog = label, "No benchmark catalog configured, hardware scores use the default");
            Ok(InMemoryBenchmarkCatalog::default())
        }
    }
}

/// Builds handler state: CSV importer plus the configured benchmark catalogs.
pub fn build_state(config: &BenchmarkConfig) -> Result<McdaAppState, AppError> {
    let cpu = load_catalog(config.cpu_catalog_path.as_deref(), "cpu")?;
    let gpu = load_catalog(config.gpu_catalog_path.as_deref(), "gpu")?;

    Ok(McdaAppState::new(
        Arc::new(CsvDecisionMatrixImporter::new()),
        HardwareScorer::new(Arc::new(cpu), Arc::new(gpu)),
    ))
}

/// CORS from configured origins; any origin when none are configured.
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, AppError> {
    let origins = config.cors_origins_list();
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(&origin).map_err(|_| AppError::CorsOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(origins))
}

/// Full application: routes, state and middleware.
pub fn build_app(config: &AppConfig) -> Result<Router, AppError> {
    let state = build_state(&config.benchmark)?;

    Ok(mcda_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server)?)
        .layer(TraceLayer::new_for_http()))
}

/// Binds the configured address and serves until the process stops.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let app = build_app(&config)?;

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(environment = ?config.server.environment, %addr, "MCDA engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn state_without_catalogs_scores_default() {
        let state = build_state(&BenchmarkConfig::default()).unwrap();
        let score = state.hardware_scorer.cpu_score(Some("Ryzen 5 3600"));
        assert!(score.is_default());
    }

    #[test]
    fn state_loads_configured_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,mark\nAMD Ryzen 5 3600,\"17,800\"").unwrap();

        let config = BenchmarkConfig {
            cpu_catalog_path: Some(file.path().to_path_buf()),
            gpu_catalog_path: None,
        };
        let state = build_state(&config).unwrap();
        assert_eq!(state.hardware_scorer.cpu_score(Some("Ryzen 5 3600")).score, 5);
    }

    #[test]
    fn missing_catalog_file_fails_startup() {
        let config = BenchmarkConfig {
            cpu_catalog_path: Some("/nonexistent/cpu.csv".into()),
            gpu_catalog_path: None,
        };
        assert!(matches!(build_state(&config), Err(AppError::Catalog(_))));
    }

    #[test]
    fn cors_rejects_invalid_origin() {
        let config = ServerConfig {
            cors_origins: Some("http://ok.example, bad\norigin".to_string()),
            ..Default::default()
        };
        assert!(matches!(cors_layer(&config), Err(AppError::CorsOrigin(_))));
    }
}
