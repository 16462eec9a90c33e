//! Benchmark catalogs implementing `BenchmarkLookup`.

mod in_memory_catalog;

pub use in_memory_catalog::{BenchmarkEntry, CatalogError, InMemoryBenchmarkCatalog};
