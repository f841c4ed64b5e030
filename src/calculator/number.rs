//! Number parsing and formatting.
//!
//! Operands live as text so the exact keystrokes survive; they are only
//! parsed when an operation needs them. Results are written back as text in
//! the shortest form that round-trips.

use std::fmt;

/// A computed result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// A finite result with no fractional part, printed without a decimal point.
    Integer(f64),
    /// Anything else, printed as a float.
    Real(f64),
}

impl Number {
    /// Classify a raw `f64` result.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 {
            // Normalizes -0.0 so it prints as "0".
            Self::Integer(value + 0.0)
        } else {
            Self::Real(value)
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{:.0}", v),
            Self::Real(v) => f.write_str(&format_float(*v)),
        }
    }
}

/// Parse operand text into a number.
///
/// Returns `None` for text that is not a number (empty, a bare `.` or `-`).
pub fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Format a float in its shortest round-trip form, always keeping a
/// fractional part or exponent.
///
/// `5.0` stays `"5.0"`, tiny and huge values switch to scientific notation
/// with a signed two-digit exponent (`1e-05`, `1.5e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Trim operand text for presentation: trailing zeros after a decimal point
/// and a dangling point are dropped (`"5.0"` → `"5"`, `"0.50"` → `"0.5"`).
///
/// Text without a decimal point is returned untouched.
pub fn trim_for_display(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_results_drop_fraction() {
        assert_eq!(Number::from_f64(8.0).to_string(), "8");
        assert_eq!(Number::from_f64(-3.0).to_string(), "-3");
        assert_eq!(Number::from_f64(-0.0).to_string(), "0");
        assert_eq!(Number::from_f64(1e20).to_string(), "100000000000000000000");
    }

    #[test]
    fn test_real_results_keep_fraction() {
        assert_eq!(Number::from_f64(2.5).to_string(), "2.5");
        assert_eq!(Number::from_f64(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Number::from_f64(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(5.0), "5.0");
        assert_eq!(format_float(0.05), "0.05");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(1e100), "1e+100");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("-0.5"), Some(-0.5));
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("1e-05"), Some(0.00001));
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("-"), None);
    }

    #[test]
    fn test_trim_for_display() {
        assert_eq!(trim_for_display("5.0"), "5");
        assert_eq!(trim_for_display("0.50"), "0.5");
        assert_eq!(trim_for_display("100"), "100");
        assert_eq!(trim_for_display("3."), "3");
        assert_eq!(trim_for_display("1.5e+16"), "1.5e+16");
    }
}
