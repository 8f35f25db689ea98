// Shared test helpers

use traffic_stats::models::{DeviceTraffic, TransferStats};

pub fn sample(collected_at: &str, upload: i64, download: i64) -> TransferStats {
    TransferStats {
        collected_at: collected_at.into(),
        upload,
        download,
    }
}

pub fn device(id: i64, stats: Vec<TransferStats>) -> DeviceTraffic {
    DeviceTraffic {
        id,
        name: format!("device-{}", id),
        stats,
    }
}
