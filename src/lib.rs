//! MCDA Engine - Multi-criteria decision analysis
//!
//! Two engines and the service around them:
//!
//! - AHP derives criterion weights from pairwise comparisons and checks the
//!   judgments for consistency.
//! - SAW normalizes a decision matrix, scores alternatives as weighted sums
//!   and ranks them.
//!
//! The engines live in `domain` and are pure; `application` wraps their
//! results in the `{ success, ... }` response envelope; `adapters` expose
//! them over HTTP and read CSV decision tables and benchmark catalogs.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod server;
pub mod telemetry;
