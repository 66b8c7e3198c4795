//! The infallible destination family: every emitter re-targeted at a bare
//! `FnMut(char)` callback.
//!
//! Each `output_*` function forwards to its `append_*` counterpart through
//! a [`CharConsumer`] sink, whose error type is [`Infallible`]
//! (`core::convert::Infallible`), so the failure branch is statically
//! unreachable and no `Result` appears in these signatures.

use crate::decimal::{
    append_1_digit, append_1_digit_safe, append_2_digits, append_2_digits_safe, append_3_digits,
    append_3_digits_safe, append_i32, append_i64, append_positive_i32, append_positive_i64,
    append_u32, append_u64,
};
use crate::grouped::{
    append_i32_grouped, append_i64_grouped, append_positive_i32_grouped,
    append_positive_i64_grouped,
};
use crate::hex::{
    append_1_hex, append_1_hex_lower, append_2_hex, append_2_hex_lower, append_4_hex,
    append_4_hex_lower, append_8_hex, append_8_hex_lower, append_u32_hex, append_u32_hex_lower,
    append_u64_hex, append_u64_hex_lower,
};
use crate::scaled::{
    append_i32_scaled, append_i64_scaled, append_positive_i32_scaled, append_positive_i64_scaled,
};
use crate::sink::CharConsumer;

macro_rules! consumer_fn {
    ($(#[$attr:meta])* $name:ident => $append:ident($($param:ident: $ty:ty),*)) => {
        $(#[$attr])*
        pub fn $name<F>($($param: $ty,)* consumer: F)
        where
            F: FnMut(char),
        {
            match $append(&mut CharConsumer(consumer), $($param),*) {
                Ok(()) => (),
                Err(never) => match never {},
            }
        }
    };
}

consumer_fn! {
    /// [`append_i32`] re-targeted at an infallible consumer.
    ///
    /// ```
    /// use int_output::output_i32;
    ///
    /// let mut out = String::new();
    /// output_i32(-12345, |ch| out.push(ch));
    /// assert_eq!(out, "-12345");
    /// ```
    output_i32 => append_i32(i: i32)
}

consumer_fn! {
    /// [`append_positive_i32`] re-targeted at an infallible consumer.
    output_positive_i32 => append_positive_i32(i: i32)
}

consumer_fn! {
    /// [`append_u32`] re-targeted at an infallible consumer.
    output_u32 => append_u32(u: u32)
}

consumer_fn! {
    /// [`append_i64`] re-targeted at an infallible consumer.
    output_i64 => append_i64(n: i64)
}

consumer_fn! {
    /// [`append_positive_i64`] re-targeted at an infallible consumer.
    output_positive_i64 => append_positive_i64(n: i64)
}

consumer_fn! {
    /// [`append_u64`] re-targeted at an infallible consumer.
    output_u64 => append_u64(u: u64)
}

consumer_fn! {
    /// [`append_1_digit`] re-targeted at an infallible consumer.
    output_1_digit => append_1_digit(i: i32)
}

consumer_fn! {
    /// [`append_1_digit_safe`] re-targeted at an infallible consumer.
    output_1_digit_safe => append_1_digit_safe(i: i32)
}

consumer_fn! {
    /// [`append_2_digits`] re-targeted at an infallible consumer.
    output_2_digits => append_2_digits(i: i32)
}

consumer_fn! {
    /// [`append_2_digits_safe`] re-targeted at an infallible consumer.
    output_2_digits_safe => append_2_digits_safe(i: i32)
}

consumer_fn! {
    /// [`append_3_digits`] re-targeted at an infallible consumer.
    output_3_digits => append_3_digits(i: i32)
}

consumer_fn! {
    /// [`append_3_digits_safe`] re-targeted at an infallible consumer.
    output_3_digits_safe => append_3_digits_safe(i: i32)
}

consumer_fn! {
    /// [`append_i32_grouped`] re-targeted at an infallible consumer.
    output_i32_grouped => append_i32_grouped(i: i32, grouping_char: char)
}

consumer_fn! {
    /// [`append_positive_i32_grouped`] re-targeted at an infallible consumer.
    output_positive_i32_grouped => append_positive_i32_grouped(i: i32, grouping_char: char)
}

consumer_fn! {
    /// [`append_i64_grouped`] re-targeted at an infallible consumer.
    output_i64_grouped => append_i64_grouped(n: i64, grouping_char: char)
}

consumer_fn! {
    /// [`append_positive_i64_grouped`] re-targeted at an infallible consumer.
    output_positive_i64_grouped => append_positive_i64_grouped(n: i64, grouping_char: char)
}

consumer_fn! {
    /// [`append_i32_scaled`] re-targeted at an infallible consumer.
    output_i32_scaled => append_i32_scaled(i: i32, scale: i32, separator: char)
}

consumer_fn! {
    /// [`append_positive_i32_scaled`] re-targeted at an infallible consumer.
    output_positive_i32_scaled => append_positive_i32_scaled(i: i32, scale: i32, separator: char)
}

consumer_fn! {
    /// [`append_i64_scaled`] re-targeted at an infallible consumer.
    output_i64_scaled => append_i64_scaled(n: i64, scale: i32, separator: char)
}

consumer_fn! {
    /// [`append_positive_i64_scaled`] re-targeted at an infallible consumer.
    output_positive_i64_scaled => append_positive_i64_scaled(n: i64, scale: i32, separator: char)
}

consumer_fn! {
    /// [`append_u32_hex`] re-targeted at an infallible consumer.
    output_u32_hex => append_u32_hex(u: u32)
}

consumer_fn! {
    /// [`append_u32_hex_lower`] re-targeted at an infallible consumer.
    output_u32_hex_lower => append_u32_hex_lower(u: u32)
}

consumer_fn! {
    /// [`append_u64_hex`] re-targeted at an infallible consumer.
    output_u64_hex => append_u64_hex(u: u64)
}

consumer_fn! {
    /// [`append_u64_hex_lower`] re-targeted at an infallible consumer.
    output_u64_hex_lower => append_u64_hex_lower(u: u64)
}

consumer_fn! {
    /// [`append_1_hex`] re-targeted at an infallible consumer.
    output_1_hex => append_1_hex(u: u32)
}

consumer_fn! {
    /// [`append_1_hex_lower`] re-targeted at an infallible consumer.
    output_1_hex_lower => append_1_hex_lower(u: u32)
}

consumer_fn! {
    /// [`append_2_hex`] re-targeted at an infallible consumer.
    output_2_hex => append_2_hex(u: u32)
}

consumer_fn! {
    /// [`append_2_hex_lower`] re-targeted at an infallible consumer.
    output_2_hex_lower => append_2_hex_lower(u: u32)
}

consumer_fn! {
    /// [`append_4_hex`] re-targeted at an infallible consumer.
    output_4_hex => append_4_hex(u: u32)
}

consumer_fn! {
    /// [`append_4_hex_lower`] re-targeted at an infallible consumer.
    output_4_hex_lower => append_4_hex_lower(u: u32)
}

consumer_fn! {
    /// [`append_8_hex`] re-targeted at an infallible consumer.
    output_8_hex => append_8_hex(u: u32)
}

consumer_fn! {
    /// [`append_8_hex_lower`] re-targeted at an infallible consumer.
    output_8_hex_lower => append_8_hex_lower(u: u32)
}
