//! ScoreStoreListingHandler - Query handler for release year and review label scores.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::attributes::{rating_score, release_year_score};

/// Store listing attributes to score. Either may be absent.
#[derive(Debug, Clone, Default)]
pub struct ScoreStoreListingQuery {
    pub release_year: Option<i32>,
    pub rating: Option<String>,
}

/// Listing scores; `None` where the attribute was unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreListingScores {
    /// 1-4
    pub release_year_score: Option<u8>,
    /// 1-8
    pub rating_score: Option<u8>,
}

/// Handler for store listing scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreStoreListingHandler;

impl ScoreStoreListingHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: ScoreStoreListingQuery) -> StoreListingScores {
        let scores = StoreListingScores {
            release_year_score: release_year_score(query.release_year),
            rating_score: rating_score(query.rating.as_deref()),
        };

        debug!(
            release_year = query.release_year,
            rating = query.rating.as_deref(),
            release_year_score = scores.release_year_score,
            rating_score = scores.rating_score,
            "Store listing scored"
        );

        scores
    }
}
