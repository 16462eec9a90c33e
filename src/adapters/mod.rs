//! Adapters - Implementations of ports and the HTTP surface.
//!
//! - `http` - Axum routes over the application handlers
//! - `import` - CSV decision-table importer (`DecisionMatrixImporter`)
//! - `benchmark` - In-memory benchmark catalog (`BenchmarkLookup`)

pub mod benchmark;
pub mod http;
pub mod import;
