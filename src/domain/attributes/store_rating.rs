//! Store review rating labels on an ordinal 1 to 8 scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review summary label shown by a game store, ordered worst to best.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StoreRating {
    VeryNegative = 1,
    Negative = 2,
    MostlyNegative = 3,
    #[default]
    Mixed = 4,
    MostlyPositive = 5,
    Positive = 6,
    VeryPositive = 7,
    OverwhelminglyPositive = 8,
}

impl StoreRating {
    /// Parses a store label, ignoring case.
    ///
    /// Labels outside the table fall back to `Mixed`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "overwhelmingly positive" => StoreRating::OverwhelminglyPositive,
            "very positive" => StoreRating::VeryPositive,
            "positive" => StoreRating::Positive,
            "mostly positive" => StoreRating::MostlyPositive,
            "mixed" => StoreRating::Mixed,
            "mostly negative" => StoreRating::MostlyNegative,
            "negative" => StoreRating::Negative,
            "very negative" => StoreRating::VeryNegative,
            _ => StoreRating::default(),
        }
    }

    /// Returns the score, 1 (very negative) to 8 (overwhelmingly positive).
    pub fn score(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            StoreRating::OverwhelminglyPositive => "Overwhelmingly Positive",
            StoreRating::VeryPositive => "Very Positive",
            StoreRating::Positive => "Positive",
            StoreRating::MostlyPositive => "Mostly Positive",
            StoreRating::Mixed => "Mixed",
            StoreRating::MostlyNegative => "Mostly Negative",
            StoreRating::Negative => "Negative",
            StoreRating::VeryNegative => "Very Negative",
        }
    }
}

impl fmt::Display for StoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score for an optional label. An absent or empty label has no score.
pub fn rating_score(label: Option<&str>) -> Option<u8> {
    label
        .filter(|label| !label.is_empty())
        .map(|label| StoreRating::from_label(label).score())
}
