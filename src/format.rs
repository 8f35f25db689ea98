// Human-readable byte totals for table cells and tooltips

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Formats a byte count with binary units: exact integers below 1 KiB, one
/// decimal place above ("1.5 MiB"). Values past the ladder stay in TiB.
pub fn format_bytes(bytes: i64) -> String {
    let sign = if bytes < 0 { "-" } else { "" };
    let magnitude = bytes.unsigned_abs();
    if magnitude < 1024 {
        return format!("{}{} B", sign, magnitude);
    }

    let mut value = magnitude as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{}{:.1} {}", sign, value, UNITS[unit])
}
