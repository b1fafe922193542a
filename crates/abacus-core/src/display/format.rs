//! Number to display text conversion.
//!
//! Whole numbers below 10^15 render as plain integers. Everything else uses
//! the shortest decimal literal that round-trips, switching to a six
//! significant digit general format when that literal is wider than
//! [`MAX_LITERAL_WIDTH`] characters.

/// Widest decimal literal shown before falling back to the general format.
pub const MAX_LITERAL_WIDTH: usize = 12;

/// Significant digits used by the general format.
pub const GENERAL_PRECISION: usize = 6;

/// Magnitude below which whole numbers render without a decimal point.
const INTEGRAL_LIMIT: f64 = 1e15;

/// Plain notation range of the decimal literal, `[1e-3, 1e7)`.
const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Formats a computed value for the display.
///
/// # Examples
///
/// ```rust
/// use abacus_core::display::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(0.1 + 0.2), "0.300000");
/// assert_eq!(format_number(1e-4), "1.0E-4");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < INTEGRAL_LIMIT {
        return format!("{}", n as i64);
    }

    let literal = decimal_literal(n);
    if literal.chars().count() > MAX_LITERAL_WIDTH {
        general(n, GENERAL_PRECISION)
    } else {
        literal
    }
}

/// Shortest round-trip literal, always carrying a fractional digit.
fn decimal_literal(n: f64) -> String {
    if let Some(text) = non_finite(n) {
        return text.to_string();
    }

    let magnitude = n.abs();
    if (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        let text = n.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{text}.0")
        }
    } else {
        let text = format!("{n:e}");
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        if mantissa.contains('.') {
            format!("{mantissa}E{exponent}")
        } else {
            format!("{mantissa}.0E{exponent}")
        }
    }
}

/// General format with `precision` significant digits, trailing zeros kept.
fn general(n: f64, precision: usize) -> String {
    if let Some(text) = non_finite(n) {
        return text.to_string();
    }
    if n == 0.0 {
        return format!("{:.*}", precision - 1, 0.0);
    }

    let sign = if n.is_sign_negative() { "-" } else { "" };
    let magnitude = n.abs();

    // Exponent after rounding, so 999999.7 counts as 1.00000e6.
    let scientific = format!("{:.*e}", precision - 1, magnitude);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..precision as i32).contains(&exponent) {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        format!("{sign}{:.*}", decimals, magnitude)
    } else {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exponent_sign}{:02}", exponent.abs())
    }
}

fn non_finite(n: f64) -> Option<&'static str> {
    if n.is_nan() {
        Some("NaN")
    } else if n == f64::INFINITY {
        Some("Infinity")
    } else if n == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}
