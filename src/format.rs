#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Human-readable byte-size formatting

/// Convert a byte count to a human-readable string.
///
/// Walks the units B, KB, MB, dividing by 1024 until the magnitude drops
/// below 1024; anything still at or above 1024 after the MB step is rendered
/// in GB (the terminal unit, so the value may itself exceed 1024). The value
/// is always formatted to two decimal places.
///
/// Accepts any real number: fractional byte counts and negative deltas (a
/// process can shrink between samples) format as-is, e.g. `"-5.00 B"`.
///
/// # Examples
///
/// ```
/// use callprof::format_size;
///
/// assert_eq!(format_size(0.0), "0.00 B");
/// assert_eq!(format_size(1536.0), "1.50 KB");
/// assert_eq!(format_size(1_048_576.0), "1.00 MB");
/// ```
#[must_use]
pub fn format_size(size_in_bytes: f64) -> String {
    let mut size = size_in_bytes;
    for unit in ["B", "KB", "MB"] {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} GB")
}
