// Raw transfer samples as returned by the stats API

use serde::{Deserialize, Serialize};

/// One upload/download measurement. `collected_at` stays the raw wire string;
/// it is parsed only when the sample becomes a chart point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferStats {
    pub collected_at: String,
    #[serde(default)]
    pub upload: i64,
    #[serde(default)]
    pub download: i64,
}

/// One device and its sample sequence, as listed for a user or location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTraffic {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<TransferStats>,
}
