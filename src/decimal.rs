//! Decimal digit emitters.
//!
//! Digits are produced most-significant first by a recursive divide-by-100,
//! with the trailing pair of each step emitted through the paired lookup
//! tables — one division per two digits, no intermediate storage.

use crate::constants::{DIGITS, I32_MIN_DIGITS, I64_MIN_DIGITS, TENS_DIGITS};
use crate::sink::CharSink;

/// Append `i` to the sink as its minimal decimal representation, with a
/// leading `-` for negative values.
///
/// ```
/// use int_output::{append_i32, Buffer};
///
/// let mut buf = Buffer::new();
/// append_i32(&mut buf, -22334455).unwrap();
/// assert_eq!(buf.as_str(), "-22334455");
/// ```
pub fn append_i32<S: CharSink>(sink: &mut S, i: i32) -> Result<(), S::Error> {
    if i < 0 {
        sink.append('-')?;
        if i == i32::MIN {
            // the one magnitude with no positive i32 counterpart
            sink.append_str(I32_MIN_DIGITS)
        } else {
            append_positive_i32(sink, -i)
        }
    } else {
        append_positive_i32(sink, i)
    }
}

/// Append a non-negative `i` to the sink as its minimal decimal
/// representation.
///
/// The value must be in `[0, i32::MAX]`; a negative input panics on table
/// indexing. Exposed so callers composing larger formats (money, time) can
/// skip the sign check they have already done.
pub fn append_positive_i32<S: CharSink>(sink: &mut S, i: i32) -> Result<(), S::Error> {
    if i >= 100 {
        let n = i / 100;
        append_positive_i32(sink, n)?;
        append_2_digits(sink, i - n * 100)
    } else if i >= 10 {
        append_2_digits(sink, i)
    } else {
        sink.append(DIGITS[i as usize] as char)
    }
}

/// Append `u` to the sink as its minimal decimal representation.
pub fn append_u32<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    if u <= i32::MAX as u32 {
        append_positive_i32(sink, u as i32)
    } else {
        // peel the trailing pair; the quotient always fits the signed width
        append_positive_i32(sink, (u / 100) as i32)?;
        append_2_digits(sink, (u % 100) as i32)
    }
}

/// Append `n` to the sink as its minimal decimal representation, with a
/// leading `-` for negative values.
pub fn append_i64<S: CharSink>(sink: &mut S, n: i64) -> Result<(), S::Error> {
    if n < 0 {
        sink.append('-')?;
        if n == i64::MIN {
            sink.append_str(I64_MIN_DIGITS)
        } else {
            append_positive_i64(sink, -n)
        }
    } else {
        append_positive_i64(sink, n)
    }
}

/// Append a non-negative `n` to the sink as its minimal decimal
/// representation. See [`append_positive_i32`] for the contract.
pub fn append_positive_i64<S: CharSink>(sink: &mut S, n: i64) -> Result<(), S::Error> {
    if n >= 100 {
        let m = n / 100;
        append_positive_i64(sink, m)?;
        append_2_digits(sink, (n - m * 100) as i32)
    } else {
        let i = n as i32;
        if i >= 10 {
            sink.append(TENS_DIGITS[i as usize] as char)?;
        }
        sink.append(DIGITS[i as usize] as char)
    }
}

/// Append `u` to the sink as its minimal decimal representation.
pub fn append_u64<S: CharSink>(sink: &mut S, u: u64) -> Result<(), S::Error> {
    if u <= i64::MAX as u64 {
        append_positive_i64(sink, u as i64)
    } else {
        append_positive_i64(sink, (u / 100) as i64)?;
        append_2_digits(sink, (u % 100) as i32)
    }
}

/// Append `i` as exactly one decimal digit.
///
/// The value must be in `[0, 10)`; use [`append_1_digit_safe`] when the
/// caller has not already range-checked it.
pub fn append_1_digit<S: CharSink>(sink: &mut S, i: i32) -> Result<(), S::Error> {
    sink.append(DIGITS[i as usize] as char)
}

/// Append the low decimal digit of `i`, accepting any input.
///
/// Reduces via `(i % 10).abs()`, so negative and oversized magnitudes are
/// well-defined rather than an error.
pub fn append_1_digit_safe<S: CharSink>(sink: &mut S, i: i32) -> Result<(), S::Error> {
    append_1_digit(sink, (i % 10).abs())
}

/// Append `i` as exactly two decimal digits, zero-padded.
///
/// Covers the recurring two-digit fields: cents, hours, minutes, seconds.
/// The value must be in `[0, 100)`; use [`append_2_digits_safe`] when it
/// is not guaranteed to be.
pub fn append_2_digits<S: CharSink>(sink: &mut S, i: i32) -> Result<(), S::Error> {
    let i = i as usize;
    sink.append(TENS_DIGITS[i] as char)?;
    sink.append(DIGITS[i] as char)
}

/// Append the low two decimal digits of `i`, accepting any input.
pub fn append_2_digits_safe<S: CharSink>(sink: &mut S, i: i32) -> Result<(), S::Error> {
    append_2_digits(sink, (i % 100).abs())
}

/// Append `i` as exactly three decimal digits, zero-padded (for example
/// the milliseconds field of a timestamp).
///
/// The value must be in `[0, 1000)`; use [`append_3_digits_safe`] when it
/// is not guaranteed to be.
pub fn append_3_digits<S: CharSink>(sink: &mut S, i: i32) -> Result<(), S::Error> {
    let n = i / 100;
    sink.append(DIGITS[n as usize] as char)?;
    append_2_digits(sink, i - n * 100)
}

/// Append the low three decimal digits of `i`, accepting any input.
pub fn append_3_digits_safe<S: CharSink>(sink: &mut S, i: i32) -> Result<(), S::Error> {
    append_3_digits(sink, (i % 1000).abs())
}
