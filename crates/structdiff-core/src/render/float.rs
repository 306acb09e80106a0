//! General-format floating point text.

use crate::value::Float;

/// Smallest and largest decimal exponents printed without scientific notation.
const PLAIN_EXPONENTS: std::ops::Range<i32> = -4..21;

/// Format a float with the shortest digits that round-trip at its stored
/// width, switching to `d.ddde±XX` for very small or very large magnitudes.
pub fn format_float(value: Float) -> String {
    let wide = value.to_f64();
    if wide.is_nan() {
        return "NaN".to_string();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let (plain, scientific) = match value {
        Float::Single(x) => (format!("{x}"), format!("{x:e}")),
        Float::Double(x) => (format!("{x}"), format!("{x:e}")),
    };

    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return plain;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return plain;
    };

    if PLAIN_EXPONENTS.contains(&exponent) {
        plain
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
