// Series aggregation: filter idle samples, parse UTC timestamps to epoch
// seconds, sort, and merge multiple devices on the exact collected_at string.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime};

use crate::models::{DeviceTraffic, TransferChartData, TransferStats};

/// Converts raw samples into a chronological chart series.
/// Samples with no traffic in either direction are dropped to keep the chart
/// dense; so are samples whose `collected_at` does not parse (logged at WARN).
pub fn to_chart_series(samples: &[TransferStats]) -> Vec<TransferChartData> {
    let mut points: Vec<TransferChartData> = samples
        .iter()
        .filter(|s| s.upload != 0 || s.download != 0)
        .filter_map(|s| {
            let timestamp = parse_collected_at(&s.collected_at)?;
            Some(TransferChartData {
                timestamp,
                upload: s.upload,
                download: s.download,
            })
        })
        .collect();
    points.sort_by_key(|p| p.timestamp);
    points
}

/// Sums samples from all devices into one series. Samples combine only when
/// their `collected_at` strings are identical; there is no bucketing, so
/// timestamps differing by a fraction of a second stay separate points.
/// The result does not depend on device order (string key + sum).
pub fn merge_device_series(devices: &[DeviceTraffic]) -> Vec<TransferChartData> {
    let mut by_collected_at: HashMap<&str, (i64, i64)> = HashMap::new();
    for device in devices {
        for s in &device.stats {
            let totals = by_collected_at.entry(s.collected_at.as_str()).or_insert((0, 0));
            totals.0 += s.upload;
            totals.1 += s.download;
        }
    }

    let merged: Vec<TransferStats> = by_collected_at
        .into_iter()
        .map(|(collected_at, (upload, download))| TransferStats {
            collected_at: collected_at.to_owned(),
            upload,
            download,
        })
        .collect();
    to_chart_series(&merged)
}

/// Parses a `collected_at` wire timestamp as UTC and returns epoch seconds.
/// Accepts RFC 3339 (`2024-06-01T12:00:00Z`) and the zone-less form the
/// backend emits (`2024-06-01T12:00:00`, optional fractional seconds).
fn parse_collected_at(raw: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => Some(naive.and_utc().timestamp()),
        Err(e) => {
            tracing::warn!(collected_at = raw, error = %e, "dropping sample with unparseable timestamp");
            None
        }
    }
}
