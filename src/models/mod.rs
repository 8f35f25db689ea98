// Domain models (wire shapes of the stats API)

mod chart;
mod transfer;

pub use chart::{TransferChartData, TransferSummary};
pub use transfer::{DeviceTraffic, TransferStats};
