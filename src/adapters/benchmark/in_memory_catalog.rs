//! In-memory benchmark catalog.
//!
//! Matches hardware names by counting how many words of the query occur in
//! each entry's name. The catalog is immutable once built; nothing is cached
//! between lookups.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::BenchmarkLookup;

/// One benchmarked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub name: String,
    /// `None` when the product is listed without a mark.
    pub mark: Option<f64>,
}

impl BenchmarkEntry {
    pub fn new(name: impl Into<String>, mark: f64) -> Self {
        Self {
            name: name.into(),
            mark: Some(mark),
        }
    }
}

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read benchmark catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed benchmark catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid mark '{value}' for '{name}'")]
    InvalidMark { name: String, value: String },
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    #[serde(default)]
    mark: String,
}

/// Benchmark marks held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBenchmarkCatalog {
    entries: Vec<BenchmarkEntry>,
}

impl InMemoryBenchmarkCatalog {
    pub fn new(entries: Vec<BenchmarkEntry>) -> Self {
        Self { entries }
    }

    /// Reads a `name,mark` CSV. Marks may use `,` as a thousands separator
    /// when quoted; an empty or `NA` mark means the product has no mark.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            let row = row?;
            let mark = parse_mark(&row.mark).map_err(|_| CatalogError::InvalidMark {
                name: row.name.clone(),
                value: row.mark.clone(),
            })?;
            entries.push(BenchmarkEntry {
                name: row.name,
                mark,
            });
        }

        Ok(Self { entries })
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::from_csv(File::open(path)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best match for `query`, or `None` if no query word occurs in any name.
    ///
    /// Matching is case-insensitive substring containment per word. Among
    /// entries with the same number of matching words the earliest wins.
    pub fn search(&self, query: &str) -> Option<&BenchmarkEntry> {
        let words: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            return None;
        }

        let mut best: Option<(&BenchmarkEntry, usize)> = None;
        for entry in &self.entries {
            let name = entry.name.to_lowercase();
            let matches = words.iter().filter(|word| name.contains(word.as_str())).count();
            if matches == 0 {
                continue;
            }
            if best.map_or(true, |(_, most)| matches > most) {
                best = Some((entry, matches));
            }
        }

        best.map(|(entry, _)| entry)
    }
}

impl BenchmarkLookup for InMemoryBenchmarkCatalog {
    fn raw_mark(&self, name: &str) -> Option<f64> {
        self.search(name).and_then(|entry| entry.mark)
    }
}

fn parse_mark(raw: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    let cleaned = raw.replace(',', "");
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    cleaned.parse::<f64>().map(Some)
}
