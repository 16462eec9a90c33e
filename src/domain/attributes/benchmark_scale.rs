//! Raw hardware benchmark marks bucketed onto a 1 to 5 scale.

use serde::{Deserialize, Serialize};

/// Score used whenever a mark cannot be determined.
pub const DEFAULT_HARDWARE_SCORE: u8 = 2;

/// Which benchmark a raw mark comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkKind {
    /// PassMark-style CPU mark.
    CpuMark,
    /// PassMark-style G3D mark.
    GpuG3dMark,
}

impl BenchmarkKind {
    /// Lower bounds (exclusive) for scores 5, 4, 3 and 2, in that order.
    fn thresholds(&self) -> [f64; 4] {
        match self {
            BenchmarkKind::CpuMark => [13_000.0, 8_500.0, 5_000.0, 3_500.0],
            BenchmarkKind::GpuG3dMark => [13_000.0, 8_500.0, 5_000.0, 2_000.0],
        }
    }

    /// Buckets a raw mark. A mark on a threshold falls into the lower band.
    pub fn scale(&self, raw_mark: f64) -> u8 {
        let thresholds = self.thresholds();
        thresholds
            .iter()
            .position(|&threshold| raw_mark > threshold)
            .map(|band| 5 - band as u8)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_bands() {
        let cpu = BenchmarkKind::CpuMark;
        assert_eq!(cpu.scale(25_000.0), 5);
        assert_eq!(cpu.scale(13_000.0), 4);
        assert_eq!(cpu.scale(8_501.0), 4);
        assert_eq!(cpu.scale(8_500.0), 3);
        assert_eq!(cpu.scale(5_000.0), 2);
        assert_eq!(cpu.scale(3_501.0), 2);
        assert_eq!(cpu.scale(3_500.0), 1);
        assert_eq!(cpu.scale(0.0), 1);
    }

    #[test]
    fn gpu_second_band_starts_lower() {
        let gpu = BenchmarkKind::GpuG3dMark;
        assert_eq!(gpu.scale(3_000.0), 2);
        assert_eq!(gpu.scale(2_000.0), 1);
        assert_eq!(gpu.scale(13_001.0), 5);
        // Same mark lands a band lower on the CPU scale
        assert_eq!(BenchmarkKind::CpuMark.scale(3_000.0), 1);
    }

    #[test]
    fn nan_mark_is_lowest_band() {
        assert_eq!(BenchmarkKind::CpuMark.scale(f64::NAN), 1);
    }
}
