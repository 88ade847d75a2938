//! Display formatting for raw metric values

/// Binary units, smallest first
pub const BYTE_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

const UNIT_STEP: u64 = 1024;

/// Smallest unit index `u` with `bytes / 1024^u < 1024`, capped at the last unit.
pub fn byte_unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut scaled = bytes;
    while scaled >= UNIT_STEP && index < BYTE_UNITS.len() - 1 {
        scaled /= UNIT_STEP;
        index += 1;
    }
    index
}

/// Render a byte count using 1024-based units.
///
/// Plain bytes print as an integer, every larger unit with one decimal:
/// `1023 -> "1023 B"`, `1536 -> "1.5 KiB"`.
pub fn format_bytes(bytes: u64) -> String {
    let index = byte_unit_index(bytes);
    if index == 0 {
        return format!("{} B", bytes);
    }
    let divisor = (UNIT_STEP as f64).powi(index as i32);
    format!("{:.1} {}", bytes as f64 / divisor, BYTE_UNITS[index])
}

/// Two decimals with a `%` suffix
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_float(value))
}

/// Two decimals; non-finite values render as zero
pub fn format_float(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.2}", value)
}

pub fn format_celsius(value: f64) -> String {
    format!("{:.1}°C", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_examples() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.0 KiB");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(1_073_741_824), "1.0 GiB");
    }

    #[test]
    fn test_unit_index_invariant() {
        let mut samples = vec![0u64, 1, 512, u64::MAX, u64::MAX - 1];
        for exp in 1..=6u32 {
            let boundary = 1024u64.pow(exp);
            samples.extend([boundary - 1, boundary, boundary + 1, boundary * 3 / 2]);
        }

        for bytes in samples {
            let u = byte_unit_index(bytes);
            assert!(u < BYTE_UNITS.len(), "unit overflow for {}", bytes);
            let at_u = bytes / 1024u64.pow(u as u32);
            if u < BYTE_UNITS.len() - 1 {
                assert!(at_u < 1024, "{} scaled to {} at unit {}", bytes, at_u, u);
            }
            if u > 0 {
                assert!(bytes / 1024u64.pow(u as u32 - 1) >= 1024, "{} not minimal", bytes);
            }
        }
    }

    #[test]
    fn test_format_bytes_caps_at_largest_unit() {
        assert_eq!(byte_unit_index(u64::MAX), 6);
        assert_eq!(format_bytes(u64::MAX), "16.0 EiB");
        assert_eq!(format_bytes(1024u64.pow(6)), "1.0 EiB");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(3.0), "3.00%");
        assert_eq!(format_percent(99.999), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(12.345678), "12.35%");
        assert_eq!(format_percent(f64::NAN), "0.00%");
    }

    #[test]
    fn test_format_celsius() {
        assert_eq!(format_celsius(45.0), "45.0°C");
        assert_eq!(format_celsius(52.36), "52.4°C");
    }
}
