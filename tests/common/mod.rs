#![allow(dead_code)]

use std::convert::Infallible;

use int_output::CharSink;

/// Runs one emission against a `String` sink and returns the result.
pub fn render<F>(emit: F) -> String
where
    F: FnOnce(&mut String) -> Result<(), Infallible>,
{
    let mut out = String::new();
    let Ok(()) = emit(&mut out);
    out
}

/// A sink that accepts a fixed number of characters and then fails,
/// keeping what it accepted. Used to check that the first write failure
/// aborts the rest of an emission.
pub struct LimitedSink {
    pub out: String,
    pub remaining: usize,
}

impl LimitedSink {
    pub fn new(limit: usize) -> LimitedSink {
        LimitedSink {
            out: String::new(),
            remaining: limit,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SinkFull;

impl CharSink for LimitedSink {
    type Error = SinkFull;

    fn append(&mut self, ch: char) -> Result<(), SinkFull> {
        if self.remaining == 0 {
            return Err(SinkFull);
        }
        self.remaining -= 1;
        self.out.push(ch);
        Ok(())
    }
}
