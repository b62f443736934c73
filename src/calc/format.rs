//! Conversions between the display buffer and `f64`.
//!
//! Parsing is permissive: anything that is not a number reads as zero.
//! Formatting uses the round-trip representation of `f64`, which always keeps
//! a fractional part for finite values (`8.0`, `0.05`, `-1.0`).

pub fn parse_display(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}

pub fn format_number(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("0"), 0.0);
        assert_eq!(parse_display("37"), 37.0);
        assert_eq!(parse_display("8.0"), 8.0);
        assert_eq!(parse_display(".5"), 0.5);
        assert_eq!(parse_display("5."), 5.0);
        assert_eq!(parse_display("-1.0"), -1.0);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_display("1.2.3"), 0.0);
        assert_eq!(parse_display("5±"), 0.0);
        assert_eq!(parse_display(""), 0.0);
    }

    #[test]
    fn test_parse_nan_display() {
        assert!(parse_display("NaN").is_nan());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8.0), "8.0");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(-1.0), "-1.0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
