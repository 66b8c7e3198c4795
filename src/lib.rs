//! Zero-allocation integer-to-text emission.
//!
//! Converts signed and unsigned 32/64-bit integers into their decimal,
//! hexadecimal, grouped, and fixed-scale representations by writing
//! characters directly to a caller-supplied destination, most-significant
//! digit first. No intermediate string is ever materialized, which makes
//! the crate suitable for hot paths (logging, serialization, money and
//! time formatting) where per-call allocation is unacceptable.
//!
//! # Destinations
//!
//! Every emitter is generic over [`CharSink`], so one algorithm serves all
//! destination types:
//!
//! * [`Buffer`] — fixed-capacity, stack-allocated;
//! * `String` (with the default `std` feature);
//! * `arrayvec::ArrayString<CAP>` — fails with a `CapacityError` when full;
//! * [`FmtSink`] — any `fmt::Write`, e.g. a `Formatter` inside `Display`;
//! * [`IoSink`] — any `io::Write` (with `std`);
//! * [`CharConsumer`] — a bare `FnMut(char)` callback that cannot fail.
//!
//! The `output_*` functions are ready-made wrappers of the whole family
//! over [`CharConsumer`], with no `Result` in their signatures.
//!
//! # Examples
//!
//! ```
//! use int_output::{append_i64_grouped, append_i64_scaled, append_u32_hex, Buffer};
//!
//! let mut buf = Buffer::new();
//! append_i64_grouped(&mut buf, 1234567, ',').unwrap();
//! assert_eq!(buf.as_str(), "1,234,567");
//!
//! buf.clear();
//! append_i64_scaled(&mut buf, 123456, 3, '.').unwrap();
//! assert_eq!(buf.as_str(), "123.456");
//!
//! buf.clear();
//! append_u32_hex(&mut buf, 0xDEADFEED).unwrap();
//! assert_eq!(buf.as_str(), "DEADFEED");
//! ```
//!
//! Failures from a fallible sink abort the emission immediately and
//! propagate out; the sink then holds exactly the characters accepted
//! before the failure. Every value of every input type is formattable,
//! including `i32::MIN` and `i64::MIN`, whose magnitudes have no positive
//! representation and take a dedicated path.
//!
//! # Features
//!
//! * `std` (default) — `String` and [`IoSink`] destinations.
//! * `with-serde` — `Serialize`/`Deserialize` for [`Buffer`], as a plain
//!   string.
//!
//! The crate is `no_std`-compatible with `default-features = false`.

#![cfg_attr(not(feature = "std"), no_std)]
#![doc(html_root_url = "https://docs.rs/int-output/0.2.2")]

mod buffer;
mod constants;
mod consumer;
mod decimal;
mod grouped;
mod hex;
mod scaled;
mod sink;

pub use crate::buffer::Buffer;
pub use crate::consumer::{
    output_1_digit, output_1_digit_safe, output_1_hex, output_1_hex_lower, output_2_digits,
    output_2_digits_safe, output_2_hex, output_2_hex_lower, output_3_digits,
    output_3_digits_safe, output_4_hex, output_4_hex_lower, output_8_hex, output_8_hex_lower,
    output_i32, output_i32_grouped, output_i32_scaled, output_i64, output_i64_grouped,
    output_i64_scaled, output_positive_i32, output_positive_i32_grouped,
    output_positive_i32_scaled, output_positive_i64, output_positive_i64_grouped,
    output_positive_i64_scaled, output_u32, output_u32_hex, output_u32_hex_lower, output_u64,
    output_u64_hex, output_u64_hex_lower,
};
pub use crate::decimal::{
    append_1_digit, append_1_digit_safe, append_2_digits, append_2_digits_safe, append_3_digits,
    append_3_digits_safe, append_i32, append_i64, append_positive_i32, append_positive_i64,
    append_u32, append_u64,
};
pub use crate::grouped::{
    append_i32_grouped, append_i64_grouped, append_positive_i32_grouped,
    append_positive_i64_grouped,
};
pub use crate::hex::{
    append_1_hex, append_1_hex_lower, append_2_hex, append_2_hex_lower, append_4_hex,
    append_4_hex_lower, append_8_hex, append_8_hex_lower, append_u32_hex, append_u32_hex_lower,
    append_u64_hex, append_u64_hex_lower,
};
pub use crate::scaled::{
    append_i32_scaled, append_i64_scaled, append_positive_i32_scaled, append_positive_i64_scaled,
};
pub use crate::sink::{CharConsumer, CharSink, FmtSink};

#[cfg(feature = "std")]
pub use crate::sink::IoSink;
