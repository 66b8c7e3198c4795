//! Decimal emitters with thousands grouping.
//!
//! Grouping boundaries are measured from the ones place, so the position
//! of the next separator is tracked structurally by a three-way mutual
//! recursion rather than a counter: each recursion level peels two digits,
//! and the three phases place the separator nowhere, between its pair, or
//! before its pair respectively.

use crate::constants::{DIGITS, I32_MIN_DIGITS, I64_MIN_DIGITS, TENS_DIGITS};
use crate::decimal::append_2_digits;
use crate::sink::CharSink;

/// Append `i` with digits grouped in threes, separated by `grouping_char`.
///
/// A value of one, two or three digits gets no separator, and a separator
/// never appears first.
///
/// ```
/// use int_output::{append_i32_grouped, Buffer};
///
/// let mut buf = Buffer::new();
/// append_i32_grouped(&mut buf, 1234567, ',').unwrap();
/// assert_eq!(buf.as_str(), "1,234,567");
/// ```
pub fn append_i32_grouped<S: CharSink>(
    sink: &mut S,
    i: i32,
    grouping_char: char,
) -> Result<(), S::Error> {
    if i < 0 {
        sink.append('-')?;
        if i == i32::MIN {
            append_grouped_digits(sink, I32_MIN_DIGITS, grouping_char)
        } else {
            append_positive_i32_grouped(sink, -i, grouping_char)
        }
    } else {
        append_positive_i32_grouped(sink, i, grouping_char)
    }
}

/// Append a non-negative `i` with digits grouped in threes. See
/// [`append_positive_i32`](crate::append_positive_i32) for the
/// non-negative contract.
pub fn append_positive_i32_grouped<S: CharSink>(
    sink: &mut S,
    i: i32,
    grouping_char: char,
) -> Result<(), S::Error> {
    if i >= 100 {
        let n = i / 100;
        append_positive_i32_grouped_1(sink, n, grouping_char)?;
        append_2_digits(sink, i - n * 100)
    } else if i >= 10 {
        append_2_digits(sink, i)
    } else {
        sink.append(DIGITS[i as usize] as char)
    }
}

// Phase 1: the separator falls between the tens and units characters of
// this level's pair.
fn append_positive_i32_grouped_1<S: CharSink>(
    sink: &mut S,
    i: i32,
    grouping_char: char,
) -> Result<(), S::Error> {
    if i >= 100 {
        let n = i / 100;
        append_positive_i32_grouped_2(sink, n, grouping_char)?;
        let r = (i - n * 100) as usize;
        sink.append(TENS_DIGITS[r] as char)?;
        sink.append(grouping_char)?;
        sink.append(DIGITS[r] as char)
    } else if i >= 10 {
        let r = i as usize;
        sink.append(TENS_DIGITS[r] as char)?;
        sink.append(grouping_char)?;
        sink.append(DIGITS[r] as char)
    } else {
        sink.append(DIGITS[i as usize] as char)
    }
}

// Phase 2: the separator falls immediately before this level's pair.
fn append_positive_i32_grouped_2<S: CharSink>(
    sink: &mut S,
    i: i32,
    grouping_char: char,
) -> Result<(), S::Error> {
    if i >= 100 {
        let n = i / 100;
        append_positive_i32_grouped(sink, n, grouping_char)?;
        sink.append(grouping_char)?;
        append_2_digits(sink, i - n * 100)
    } else if i >= 10 {
        append_2_digits(sink, i)
    } else {
        sink.append(DIGITS[i as usize] as char)
    }
}

/// Append `n` with digits grouped in threes, separated by `grouping_char`.
pub fn append_i64_grouped<S: CharSink>(
    sink: &mut S,
    n: i64,
    grouping_char: char,
) -> Result<(), S::Error> {
    if n < 0 {
        sink.append('-')?;
        if n == i64::MIN {
            append_grouped_digits(sink, I64_MIN_DIGITS, grouping_char)
        } else {
            append_positive_i64_grouped(sink, -n, grouping_char)
        }
    } else {
        append_positive_i64_grouped(sink, n, grouping_char)
    }
}

/// Append a non-negative `n` with digits grouped in threes.
///
/// ```
/// use int_output::{append_2_digits, append_positive_i64_grouped, Buffer, CharSink};
///
/// // dollars and cents without a heap allocation
/// let mut buf = Buffer::new();
/// buf.append('$').unwrap();
/// append_positive_i64_grouped(&mut buf, 1234, ',').unwrap();
/// buf.append('.').unwrap();
/// append_2_digits(&mut buf, 56).unwrap();
/// assert_eq!(buf.as_str(), "$1,234.56");
/// ```
pub fn append_positive_i64_grouped<S: CharSink>(
    sink: &mut S,
    n: i64,
    grouping_char: char,
) -> Result<(), S::Error> {
    if n >= 100 {
        let m = n / 100;
        append_positive_i64_grouped_1(sink, m, grouping_char)?;
        append_2_digits(sink, (n - m * 100) as i32)
    } else {
        let i = n as i32;
        if i >= 10 {
            sink.append(TENS_DIGITS[i as usize] as char)?;
        }
        sink.append(DIGITS[i as usize] as char)
    }
}

fn append_positive_i64_grouped_1<S: CharSink>(
    sink: &mut S,
    n: i64,
    grouping_char: char,
) -> Result<(), S::Error> {
    if n >= 100 {
        let m = n / 100;
        append_positive_i64_grouped_2(sink, m, grouping_char)?;
        let r = (n - m * 100) as usize;
        sink.append(TENS_DIGITS[r] as char)?;
        sink.append(grouping_char)?;
        sink.append(DIGITS[r] as char)
    } else {
        let i = n as i32;
        if i >= 10 {
            sink.append(TENS_DIGITS[i as usize] as char)?;
            sink.append(grouping_char)?;
        }
        sink.append(DIGITS[i as usize] as char)
    }
}

fn append_positive_i64_grouped_2<S: CharSink>(
    sink: &mut S,
    n: i64,
    grouping_char: char,
) -> Result<(), S::Error> {
    if n >= 100 {
        let m = n / 100;
        append_positive_i64_grouped(sink, m, grouping_char)?;
        sink.append(grouping_char)?;
        append_2_digits(sink, (n - m * 100) as i32)
    } else {
        let i = n as i32;
        if i >= 10 {
            sink.append(TENS_DIGITS[i as usize] as char)?;
        }
        sink.append(DIGITS[i as usize] as char)
    }
}

// Emits a pre-rendered digit string with separators after the leading
// group; used for the two minimum values, which must not be negated.
fn append_grouped_digits<S: CharSink>(
    sink: &mut S,
    digits: &str,
    grouping_char: char,
) -> Result<(), S::Error> {
    let mut first = digits.len() % 3;
    if first == 0 {
        first = 3;
    }
    sink.append_str(&digits[..first])?;
    let mut index = first;
    while index < digits.len() {
        sink.append(grouping_char)?;
        sink.append_str(&digits[index..index + 3])?;
        index += 3;
    }
    Ok(())
}
