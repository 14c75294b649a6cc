//! Human-readable formatting for report output.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 symbols)
/// - `plural_s(1)` -> `""` (1 symbol)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// `plural_count(3, "file")` -> `"3 files"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count with a binary unit suffix.
///
/// Bytes below 1 KB are printed exactly, larger values with two decimals:
///
/// - `format_size(512)` -> `"512 B"`
/// - `format_size(1536)` -> `"1.50 KB"`
/// - `format_size(3 * 1024 * 1024)` -> `"3.00 MB"`
pub fn format_size(bytes: u64) -> String {
    // Display only, precision loss above 2^52 bytes is irrelevant
    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64;
    if bytes >= MIB {
        format!("{:.2} MB", value / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KB", value / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "file"), "0 files");
        assert_eq!(plural_count(1, "file"), "1 file");
        assert_eq!(plural_count(12, "symbol"), "12 symbols");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.50 MB");
    }
}
