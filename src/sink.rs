//! The destination abstraction all emitters write through.
//!
//! A [`CharSink`] accepts characters one at a time, in order. Writes may
//! fail (a full fixed-capacity buffer, an I/O error); the first failure
//! aborts the emission that caused it, leaving the sink holding exactly
//! the characters accepted so far. Destinations that cannot fail use
//! [`Infallible`] as their error type, so the failure path compiles away.

use core::convert::Infallible;
use core::fmt;

use arrayvec::{ArrayString, CapacityError};

#[cfg(feature = "std")]
use std::io;

/// A destination for emitted characters.
///
/// Implementations receive characters most-significant first and must not
/// reorder or buffer them observably. The emitters never retain a sink
/// beyond the duration of one call.
pub trait CharSink {
    /// The error a write can fail with. [`Infallible`] for destinations
    /// that always succeed.
    type Error;

    /// Accept one character.
    fn append(&mut self, ch: char) -> Result<(), Self::Error>;

    /// Accept every character of `s`, in order. Implementations with a
    /// cheaper bulk path should override this.
    fn append_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for ch in s.chars() {
            self.append(ch)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl CharSink for String {
    type Error = Infallible;

    fn append(&mut self, ch: char) -> Result<(), Infallible> {
        self.push(ch);
        Ok(())
    }

    fn append_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.push_str(s);
        Ok(())
    }
}

/// Writes fail once the backing array is full; the characters accepted
/// before that point are retained.
impl<const CAP: usize> CharSink for ArrayString<CAP> {
    type Error = CapacityError<char>;

    fn append(&mut self, ch: char) -> Result<(), CapacityError<char>> {
        self.try_push(ch)
    }
}

/// An infallible single-character callback destination.
///
/// Wraps any `FnMut(char)`; the [`output_*`](crate::output_i32) function
/// family is built on this sink.
///
/// ```
/// use int_output::{append_i32, CharConsumer, CharSink};
///
/// let mut out = String::new();
/// let mut sink = CharConsumer(|ch| out.push(ch));
/// let Ok(()) = append_i32(&mut sink, -12345);
/// assert_eq!(out, "-12345");
/// ```
pub struct CharConsumer<F>(pub F);

impl<F> CharSink for CharConsumer<F>
where
    F: FnMut(char),
{
    type Error = Infallible;

    fn append(&mut self, ch: char) -> Result<(), Infallible> {
        (self.0)(ch);
        Ok(())
    }
}

/// Adapter targeting any [`fmt::Write`], e.g. a `Formatter` inside a
/// `Display` implementation.
///
/// ```
/// use core::fmt;
/// use int_output::{append_i64_grouped, FmtSink};
///
/// struct Amount(i64);
///
/// impl fmt::Display for Amount {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         append_i64_grouped(&mut FmtSink(&mut *f), self.0, ',')
///     }
/// }
///
/// assert_eq!(Amount(1234567).to_string(), "1,234,567");
/// ```
pub struct FmtSink<W>(pub W);

impl<W> CharSink for FmtSink<W>
where
    W: fmt::Write,
{
    type Error = fmt::Error;

    fn append(&mut self, ch: char) -> Result<(), fmt::Error> {
        self.0.write_char(ch)
    }

    fn append_str(&mut self, s: &str) -> Result<(), fmt::Error> {
        self.0.write_str(s)
    }
}

/// Adapter targeting any [`io::Write`], encoding characters as UTF-8.
#[cfg(feature = "std")]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W> CharSink for IoSink<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn append(&mut self, ch: char) -> Result<(), io::Error> {
        let mut utf8 = [0u8; 4];
        self.0.write_all(ch.encode_utf8(&mut utf8).as_bytes())
    }

    fn append_str(&mut self, s: &str) -> Result<(), io::Error> {
        self.0.write_all(s.as_bytes())
    }
}
