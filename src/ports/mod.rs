//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engines and the outside world. Adapters implement these ports.
//!
//! - `BenchmarkLookup` - Raw hardware benchmark marks by name
//! - `DecisionMatrixImporter` - Tabular sources read into SAW inputs

mod benchmark_lookup;
mod decision_matrix_importer;

pub use benchmark_lookup::BenchmarkLookup;
pub use decision_matrix_importer::{DecisionMatrixImporter, ImportError, ImportedTable};
