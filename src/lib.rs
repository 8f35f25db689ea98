// Chart-data shaping for the admin console: raw transfer samples in,
// merged chronological series and summary totals out.

pub mod format;
pub mod models;
pub mod series;
