//! HardwareScorer - CPU and GPU names to 1 to 5 benchmark scores.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::ports::BenchmarkLookup;

use super::{BenchmarkKind, DEFAULT_HARDWARE_SCORE};

/// Outcome of scoring one hardware name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareScore {
    pub score: u8,
    /// The mark the score was bucketed from; `None` when the default was used.
    pub raw_mark: Option<f64>,
}

impl HardwareScore {
    fn fallback() -> Self {
        Self {
            score: DEFAULT_HARDWARE_SCORE,
            raw_mark: None,
        }
    }

    /// True when no usable mark was found and the default score applies.
    pub fn is_default(&self) -> bool {
        self.raw_mark.is_none()
    }
}

/// Scores hardware names against injected benchmark lookups.
///
/// A missing name, a lookup miss, or a zero or non-finite mark all yield
/// [`DEFAULT_HARDWARE_SCORE`].
#[derive(Clone)]
pub struct HardwareScorer {
    cpu_marks: Arc<dyn BenchmarkLookup>,
    gpu_marks: Arc<dyn BenchmarkLookup>,
}

impl HardwareScorer {
    pub fn new(cpu_marks: Arc<dyn BenchmarkLookup>, gpu_marks: Arc<dyn BenchmarkLookup>) -> Self {
        Self {
            cpu_marks,
            gpu_marks,
        }
    }

    pub fn cpu_score(&self, name: Option<&str>) -> HardwareScore {
        self.score(BenchmarkKind::CpuMark, name)
    }

    pub fn gpu_score(&self, name: Option<&str>) -> HardwareScore {
        self.score(BenchmarkKind::GpuG3dMark, name)
    }

    pub fn score(&self, kind: BenchmarkKind, name: Option<&str>) -> HardwareScore {
        let name = match name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => return HardwareScore::fallback(),
        };

        let lookup = match kind {
            BenchmarkKind::CpuMark => &self.cpu_marks,
            BenchmarkKind::GpuG3dMark => &self.gpu_marks,
        };

        match lookup.raw_mark(name) {
            Some(mark) if mark.is_finite() && mark > 0.0 => HardwareScore {
                score: kind.scale(mark),
                raw_mark: Some(mark),
            },
            _ => HardwareScore::fallback(),
        }
    }
}

impl std::fmt::Debug for HardwareScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HardwareScorer").finish_non_exhaustive()
    }
}
