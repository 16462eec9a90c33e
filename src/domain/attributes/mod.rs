//! Attributes Module - Raw product attributes converted to criterion scores.
//!
//! Each table is explicit and documents its fallback:
//!
//! - `BenchmarkKind::scale` - CPU / GPU benchmark marks to 1-5
//! - `HardwareScorer` - Hardware names to 1-5 via an injected `BenchmarkLookup`,
//!   falling back to `DEFAULT_HARDWARE_SCORE`
//! - `release_year_score` - Release year to 1-4
//! - `StoreRating` - Store review labels to 1-8, unknown labels counting as mixed

mod benchmark_scale;
mod hardware_scorer;
mod release_year;
mod store_rating;

pub use benchmark_scale::{BenchmarkKind, DEFAULT_HARDWARE_SCORE};
pub use hardware_scorer::{HardwareScore, HardwareScorer};
pub use release_year::release_year_score;
pub use store_rating::{rating_score, StoreRating};
