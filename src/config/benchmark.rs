//! Benchmark catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the CPU and GPU benchmark catalogs are read from.
///
/// Both are optional; without a catalog every hardware lookup misses and
/// the default score applies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchmarkConfig {
    /// CSV with `name,mark` columns holding CPU marks
    pub cpu_catalog_path: Option<PathBuf>,

    /// CSV with `name,mark` columns holding GPU G3D marks
    pub gpu_catalog_path: Option<PathBuf>,
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for path in [&self.cpu_catalog_path, &self.gpu_catalog_path]
            .into_iter()
            .flatten()
        {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::EmptyCatalogPath);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_are_optional() {
        assert!(BenchmarkConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let config = BenchmarkConfig {
            cpu_catalog_path: Some(PathBuf::new()),
            gpu_catalog_path: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyCatalogPath)
        ));
    }
}
