//! ScoreHardwareHandler - Query handler for CPU/GPU benchmark scores.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::attributes::{HardwareScore, HardwareScorer};

/// Query naming the hardware to score. Either name may be absent.
#[derive(Debug, Clone, Default)]
pub struct ScoreHardwareQuery {
    pub cpu: Option<String>,
    pub gpu: Option<String>,
}

/// Benchmark scores on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareScores {
    pub cpu_mark_score: u8,
    pub gpu_g3d_score: u8,
}

/// Handler for hardware scoring.
pub struct ScoreHardwareHandler {
    scorer: HardwareScorer,
}

impl ScoreHardwareHandler {
    pub fn new(scorer: HardwareScorer) -> Self {
        Self { scorer }
    }

    pub fn handle(&self, query: ScoreHardwareQuery) -> HardwareScores {
        let cpu = self.scorer.cpu_score(query.cpu.as_deref());
        log_score("cpu", query.cpu.as_deref(), &cpu);

        let gpu = self.scorer.gpu_score(query.gpu.as_deref());
        log_score("gpu", query.gpu.as_deref(), &gpu);

        HardwareScores {
            cpu_mark_score: cpu.score,
            gpu_g3d_score: gpu.score,
        }
    }
}

fn log_score(component: &str, name: Option<&str>, score: &HardwareScore) {
    match (name, score.raw_mark) {
        (_, Some(raw_mark)) => {
            debug!(component, name, raw_mark, score = score.score, "Benchmark mark found");
        }
        (Some(name), None) => {
            warn!(component, name, score = score.score, "No benchmark mark, using default score");
        }
        (None, None) => {}
    }
}
