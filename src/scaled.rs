//! Fixed-scale decimal emitters: the value is rendered as if a decimal
//! point sat `scale` digits from the right, the usual shape for money and
//! other fixed-point quantities stored as integers.

use crate::constants::{DIGITS, I32_MIN_DIGITS, I64_MIN_DIGITS};
use crate::decimal::{append_2_digits, append_positive_i32, append_positive_i64};
use crate::sink::CharSink;

/// Append `i` with an implied decimal point `scale` digits from the right,
/// using `separator` as the point character.
///
/// A `scale` of zero or less emits the plain integer. When the value has
/// fewer digits than the scale demands, the output is zero-filled so that
/// exactly one `0` precedes the separator.
///
/// ```
/// use int_output::{append_i32_scaled, Buffer};
///
/// let mut buf = Buffer::new();
/// append_i32_scaled(&mut buf, 123456, 3, '.').unwrap();
/// assert_eq!(buf.as_str(), "123.456");
///
/// buf.clear();
/// append_i32_scaled(&mut buf, 123456, 8, '.').unwrap();
/// assert_eq!(buf.as_str(), "0.00123456");
/// ```
pub fn append_i32_scaled<S: CharSink>(
    sink: &mut S,
    i: i32,
    scale: i32,
    separator: char,
) -> Result<(), S::Error> {
    if i < 0 {
        sink.append('-')?;
        if i == i32::MIN {
            append_scaled_digits(sink, I32_MIN_DIGITS, scale, separator)
        } else {
            append_positive_i32_scaled(sink, -i, scale, separator)
        }
    } else {
        append_positive_i32_scaled(sink, i, scale, separator)
    }
}

/// Append a non-negative `i` with an implied decimal point `scale` digits
/// from the right. See [`append_positive_i32`] for the non-negative
/// contract.
pub fn append_positive_i32_scaled<S: CharSink>(
    sink: &mut S,
    i: i32,
    scale: i32,
    separator: char,
) -> Result<(), S::Error> {
    if scale <= 0 {
        append_positive_i32(sink, i)
    } else if scale == 1 {
        let n = i / 10;
        append_positive_i32(sink, n)?;
        sink.append(separator)?;
        sink.append(DIGITS[(i - n * 10) as usize] as char)
    } else if scale == 2 {
        let n = i / 100;
        append_positive_i32(sink, n)?;
        sink.append(separator)?;
        append_2_digits(sink, i - n * 100)
    } else {
        // peel two digits per level until the separator lands in the pair
        let n = i / 100;
        append_positive_i32_scaled(sink, n, scale - 2, separator)?;
        append_2_digits(sink, i - n * 100)
    }
}

/// Append `n` with an implied decimal point `scale` digits from the right,
/// using `separator` as the point character.
pub fn append_i64_scaled<S: CharSink>(
    sink: &mut S,
    n: i64,
    scale: i32,
    separator: char,
) -> Result<(), S::Error> {
    if n < 0 {
        sink.append('-')?;
        if n == i64::MIN {
            append_scaled_digits(sink, I64_MIN_DIGITS, scale, separator)
        } else {
            append_positive_i64_scaled(sink, -n, scale, separator)
        }
    } else {
        append_positive_i64_scaled(sink, n, scale, separator)
    }
}

/// Append a non-negative `n` with an implied decimal point `scale` digits
/// from the right.
pub fn append_positive_i64_scaled<S: CharSink>(
    sink: &mut S,
    n: i64,
    scale: i32,
    separator: char,
) -> Result<(), S::Error> {
    if scale <= 0 {
        append_positive_i64(sink, n)
    } else if scale == 1 {
        let m = n / 10;
        append_positive_i64(sink, m)?;
        sink.append(separator)?;
        sink.append(DIGITS[(n - m * 10) as usize] as char)
    } else if scale == 2 {
        let m = n / 100;
        append_positive_i64(sink, m)?;
        sink.append(separator)?;
        append_2_digits(sink, (n - m * 100) as i32)
    } else {
        let m = n / 100;
        append_positive_i64_scaled(sink, m, scale - 2, separator)?;
        append_2_digits(sink, (n - m * 100) as i32)
    }
}

// Scale logic applied to a pre-rendered digit string; used for the two
// minimum values, which must not be negated.
fn append_scaled_digits<S: CharSink>(
    sink: &mut S,
    digits: &str,
    scale: i32,
    separator: char,
) -> Result<(), S::Error> {
    let len = digits.len() as i32;
    if scale <= 0 {
        sink.append_str(digits)
    } else if scale < len {
        let split = (len - scale) as usize;
        sink.append_str(&digits[..split])?;
        sink.append(separator)?;
        sink.append_str(&digits[split..])
    } else {
        sink.append('0')?;
        sink.append(separator)?;
        for _ in len..scale {
            sink.append('0')?;
        }
        sink.append_str(digits)
    }
}
