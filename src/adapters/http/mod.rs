//! HTTP adapters - REST API implementations.

pub mod mcda;

// Re-export key types for convenience
pub use mcda::mcda_router;
pub use mcda::McdaAppState;
