//! Lenient numeric parsing.
//!
//! Command-line numbers are read permissively: leading whitespace is skipped
//! and only the longest numeric prefix counts, so `"42abc"` reads as `42`
//! and `"3.7"` as the integer `3`. Callers depend on this leniency; do not
//! tighten it.

use crate::value::Value;

/// Parses the longest floating-point prefix of `input`.
///
/// Accepts an optional sign followed by `Infinity` or by
/// `digits[.digits][(e|E)[+-]digits]`; at least one mantissa digit is
/// required. Returns `None` where a lenient parse would yield NaN.
#[must_use]
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // An exponent only counts when digits follow it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parses the longest base-10 integer prefix of `input`.
///
/// Fractional parts and trailing garbage are ignored. Returns `None` when no
/// digit is present or the number does not fit in an `i64`.
#[must_use]
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse::<i64>().ok()
}

/// Whether a lenient float parse of the value's string form yields a number.
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(x) => !x.is_nan(),
        other => parse_float_prefix(&other.to_string()).is_some(),
    }
}

/// Integer coercion used by `INT` flag validation.
///
/// Floats are truncated toward zero; everything else goes through
/// [`parse_int_prefix`] on its string form.
#[must_use]
pub fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Float(x) if x.is_finite() => {
            let truncated = x.trunc();
            // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
            (truncated >= i64::MIN as f64 && truncated < i64::MAX as f64)
                .then(|| truncated as i64)
        }
        Value::Float(_) => None,
        other => parse_int_prefix(&other.to_string()),
    }
}

/// Float coercion used by `FLOAT` flag validation.
#[must_use]
pub fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(x) => (!x.is_nan()).then_some(*x),
        other => parse_float_prefix(&other.to_string()),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
