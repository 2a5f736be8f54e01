//! Human-readable sizes, durations and gauges

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with binary (1024) steps and up to two decimals
///
/// Trailing zeros are dropped, so 500 MiB renders as `500 MB` and
/// 45,000,000 bytes as `42.92 MB`. Sizes beyond the GB range stay in GB.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor: u64 = 1;
    while unit < SIZE_UNITS.len() - 1 && bytes >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let value = format!("{:.2}", bytes as f64 / divisor as f64);
    let value = value.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", value, SIZE_UNITS[unit])
}

/// Format seconds as `m:ss`
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Fixed-width bar showing how much of a limit is used
///
/// Ratios above 1.0 render as a full bar.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn gauge(ratio: f64, width: usize) -> String {
    let clamped = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled = (clamped * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Pick the singular or plural form of a noun for a count
pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(500 * 1024 * 1024), "500 MB");
        assert_eq!(format_file_size(45_000_000), "42.92 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_file_size_caps_at_gigabytes() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(180), "3:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(3725), "62:05");
    }

    #[test]
    fn test_gauge() {
        assert_eq!(gauge(0.0, 4), "[----]");
        assert_eq!(gauge(0.5, 4), "[##--]");
        assert_eq!(gauge(1.7, 4), "[####]");
        assert_eq!(gauge(f64::NAN, 2), "[--]");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "channel", "channels"), "channel");
        assert_eq!(plural(0, "channel", "channels"), "channels");
        assert_eq!(plural(3, "channel", "channels"), "channels");
    }
}
