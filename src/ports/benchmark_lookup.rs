//! Benchmark Lookup Port - Raw benchmark marks by hardware name.
//!
//! The attribute scorers depend on this trait to turn a CPU or GPU name into
//! a raw benchmark mark. Adapters decide where the marks come from (an
//! in-memory catalog, a file, a remote database).

/// Port for resolving a hardware name to its raw benchmark mark.
///
/// # Contract
///
/// Implementations must:
/// - Return `None` when nothing matches or the match has no mark
/// - Be free of side effects visible to the caller (no shared caches)
///
/// Closures implement the trait, which keeps test doubles short:
///
/// ```rust,ignore
/// let lookup = |name: &str| (name == "Ryzen 5 5600").then_some(21_000.0);
/// let scorer = HardwareScorer::new(Arc::new(lookup), Arc::new(|_: &str| None));
/// ```
pub trait BenchmarkLookup: Send + Sync {
    /// Raw mark for the best match of `name`.
    fn raw_mark(&self, name: &str) -> Option<f64>;
}

impl<F> BenchmarkLookup for F
where
    F: Fn(&str) -> Option<f64> + Send + Sync,
{
    fn raw_mark(&self, name: &str) -> Option<f64> {
        self(name)
    }
}
