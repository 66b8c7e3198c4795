//! Hexadecimal emitters.
//!
//! The minimal form halves the bit width at each recursion level
//! (64→32→16→8→4): a level whose upper half is all zero skips it, giving
//! no-leading-zero output, otherwise the upper half is emitted minimally
//! and the lower half at fixed width. Fixed-width variants emit every
//! nibble unconditionally.

use crate::constants::{HEX_DIGITS, HEX_DIGITS_LOWER};
use crate::sink::CharSink;

/// Append the minimal upper-case hexadecimal form of `u`.
///
/// ```
/// use int_output::{append_u32_hex, Buffer};
///
/// let mut buf = Buffer::new();
/// append_u32_hex(&mut buf, 0xDEADFEED).unwrap();
/// assert_eq!(buf.as_str(), "DEADFEED");
/// ```
pub fn append_u32_hex<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    hex32(sink, u, HEX_DIGITS)
}

/// Append the minimal lower-case hexadecimal form of `u`.
pub fn append_u32_hex_lower<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    hex32(sink, u, HEX_DIGITS_LOWER)
}

/// Append the minimal upper-case hexadecimal form of `u`.
pub fn append_u64_hex<S: CharSink>(sink: &mut S, u: u64) -> Result<(), S::Error> {
    hex64(sink, u, HEX_DIGITS)
}

/// Append the minimal lower-case hexadecimal form of `u`.
pub fn append_u64_hex_lower<S: CharSink>(sink: &mut S, u: u64) -> Result<(), S::Error> {
    hex64(sink, u, HEX_DIGITS_LOWER)
}

/// Append the low nibble of `u` as one upper-case hex digit.
pub fn append_1_hex<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    nibble(sink, u, HEX_DIGITS)
}

/// Append the low nibble of `u` as one lower-case hex digit.
pub fn append_1_hex_lower<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    nibble(sink, u, HEX_DIGITS_LOWER)
}

/// Append the low byte of `u` as two upper-case hex digits.
pub fn append_2_hex<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    fixed2(sink, u, HEX_DIGITS)
}

/// Append the low byte of `u` as two lower-case hex digits.
pub fn append_2_hex_lower<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    fixed2(sink, u, HEX_DIGITS_LOWER)
}

/// Append the low 16 bits of `u` as four upper-case hex digits (the shape
/// of a `\u` escape).
pub fn append_4_hex<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    fixed4(sink, u, HEX_DIGITS)
}

/// Append the low 16 bits of `u` as four lower-case hex digits.
pub fn append_4_hex_lower<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    fixed4(sink, u, HEX_DIGITS_LOWER)
}

/// Append `u` as eight upper-case hex digits.
///
/// ```
/// use int_output::{append_8_hex_lower, Buffer};
///
/// let mut buf = Buffer::new();
/// append_8_hex_lower(&mut buf, 0xABCD).unwrap();
/// assert_eq!(buf.as_str(), "0000abcd");
/// ```
pub fn append_8_hex<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    fixed8(sink, u, HEX_DIGITS)
}

/// Append `u` as eight lower-case hex digits.
pub fn append_8_hex_lower<S: CharSink>(sink: &mut S, u: u32) -> Result<(), S::Error> {
    fixed8(sink, u, HEX_DIGITS_LOWER)
}

fn hex64<S: CharSink>(sink: &mut S, u: u64, table: &[u8; 16]) -> Result<(), S::Error> {
    if u & 0xFFFF_FFFF_0000_0000 != 0 {
        hex32(sink, (u >> 32) as u32, table)?;
        fixed8(sink, u as u32, table)
    } else {
        hex32(sink, u as u32, table)
    }
}

fn hex32<S: CharSink>(sink: &mut S, u: u32, table: &[u8; 16]) -> Result<(), S::Error> {
    if u & 0xFFFF_0000 != 0 {
        hex16(sink, u >> 16, table)?;
        fixed4(sink, u, table)
    } else {
        hex16(sink, u, table)
    }
}

fn hex16<S: CharSink>(sink: &mut S, u: u32, table: &[u8; 16]) -> Result<(), S::Error> {
    if u & 0xFF00 != 0 {
        hex8(sink, u >> 8, table)?;
        fixed2(sink, u, table)
    } else {
        hex8(sink, u, table)
    }
}

fn hex8<S: CharSink>(sink: &mut S, u: u32, table: &[u8; 16]) -> Result<(), S::Error> {
    if u & 0xF0 != 0 {
        nibble(sink, u >> 4, table)?;
    }
    nibble(sink, u, table)
}

fn fixed8<S: CharSink>(sink: &mut S, u: u32, table: &[u8; 16]) -> Result<(), S::Error> {
    fixed4(sink, u >> 16, table)?;
    fixed4(sink, u, table)
}

fn fixed4<S: CharSink>(sink: &mut S, u: u32, table: &[u8; 16]) -> Result<(), S::Error> {
    fixed2(sink, u >> 8, table)?;
    fixed2(sink, u, table)
}

fn fixed2<S: CharSink>(sink: &mut S, u: u32, table: &[u8; 16]) -> Result<(), S::Error> {
    nibble(sink, u >> 4, table)?;
    nibble(sink, u, table)
}

fn nibble<S: CharSink>(sink: &mut S, u: u32, table: &[u8; 16]) -> Result<(), S::Error> {
    sink.append(table[(u & 0xF) as usize] as char)
}
