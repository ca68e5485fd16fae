//! CLI command implementations

pub mod decode;
pub mod encode;
pub mod table;
pub mod target;

/// Format a code or luminance for display.
///
/// Integer codes print without a fraction; everything else keeps full
/// precision. NaN and infinities print as Rust formats them.
pub fn format_value(v: f64, integer: bool) -> String {
    if integer && v.is_finite() {
        format!("{:.0}", v)
    } else if v.is_finite() {
        format!("{:.15}", v)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(512.0, true), "512");
        assert_eq!(format_value(0.5, false), "0.500000000000000");
        assert_eq!(format_value(f64::NAN, true), "NaN");
        assert_eq!(format_value(f64::NEG_INFINITY, false), "-inf");
    }
}
