use alloc::string::String;

use num_traits::Float;

/// Formats a value with a fixed number of decimal digits
///
/// Non-finite values are spelled the way a browser host prints them
/// (`NaN`, `Infinity`, `-Infinity`) and negative zero prints as zero.
/// Exact ties round away from zero, so `0.125` at two digits is `0.13`.
///
/// # Arguments
///
/// * `value` - The value to format
/// * `precision` - The number of digits after the decimal point
///
/// # Returns
///
/// * `String` - The formatted value
#[inline]
pub fn to_fixed<T: Float>(value: T, precision: usize) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        let s = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return String::from(s);
    }
    match value.to_f64() {
        Some(v) if v == 0.0 => format!("{:.*}", precision, 0.0),
        Some(v) if is_decimal_tie(v, precision) => {
            round_tie_away_from_zero(format!("{:.*}", precision + 1, v))
        }
        Some(v) => format!("{v:.precision$}"),
        None => String::from("NaN"),
    }
}

/// Returns `true` if `v` lies exactly halfway between two `precision`-digit decimals
///
/// That is the case iff `v * 2^(precision + 1)` is an odd integer, which is
/// exact to check since scaling by a power of two does not round.
#[inline]
fn is_decimal_tie(v: f64, precision: usize) -> bool {
    let exp = i32::try_from(precision + 1).unwrap_or(i32::MAX);
    let scaled = v * Float::powi(2.0_f64, exp);
    Float::fract(scaled) == 0.0 && Float::fract(scaled / 2.0) != 0.0
}

/// Drops the trailing `5` of an exact tie and rounds the rest away from zero
///
/// `digits` must hold exactly one more decimal digit than the result.
fn round_tie_away_from_zero(digits: String) -> String {
    let mut digits = digits.into_bytes();
    digits.pop();
    if digits.last() == Some(&b'.') {
        digits.pop();
    }

    for i in (0..digits.len()).rev() {
        match digits[i] {
            b'9' => digits[i] = b'0',
            b'0'..=b'8' => {
                digits[i] += 1;
                return digits.into_iter().map(char::from).collect();
            }
            _ => {}
        }
    }

    // every digit carried, e.g. 9.5 -> 10
    let at = usize::from(digits.first() == Some(&b'-'));
    digits.insert(at, b'1');
    digits.into_iter().map(char::from).collect()
}
