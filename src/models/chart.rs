// Chart-ready points and the summary totals shown in table cells

use serde::{Deserialize, Serialize};

use super::TransferStats;

/// One renderable point: epoch seconds plus the (possibly summed) byte counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferChartData {
    pub timestamp: i64,
    pub upload: i64,
    pub download: i64,
}

/// Total upload/download over a sample or point set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSummary {
    pub upload: i64,
    pub download: i64,
}

impl TransferSummary {
    /// Plain sums over raw samples, including ones the chart would filter out.
    pub fn of_samples(samples: &[TransferStats]) -> Self {
        Self {
            upload: samples.iter().map(|s| s.upload).sum(),
            download: samples.iter().map(|s| s.download).sum(),
        }
    }

    /// Plain sums over an already converted (possibly merged) series.
    pub fn of_points(points: &[TransferChartData]) -> Self {
        Self {
            upload: points.iter().map(|p| p.upload).sum(),
            download: points.iter().map(|p| p.download).sum(),
        }
    }
}
