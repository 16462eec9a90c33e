//! Criterion type: whether higher or lower raw values are preferred.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of preference for a criterion column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher raw value is better.
    Benefit,
    /// Lower raw value is better.
    Cost,
}

/// Returned when a label is neither "benefit" nor "cost".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion type '{0}'")]
pub struct UnknownCriterionType(pub String);

impl CriterionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "benefit",
            CriterionType::Cost => "cost",
        }
    }
}

impl FromStr for CriterionType {
    type Err = UnknownCriterionType;

    /// Parses a label case-insensitively. Surrounding whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "benefit" => Ok(CriterionType::Benefit),
            "cost" => Ok(CriterionType::Cost),
            _ => Err(UnknownCriterionType(s.to_string())),
        }
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
