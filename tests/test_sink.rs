mod common;

use core::fmt;

use arrayvec::ArrayString;
use int_output::{
    append_i32, append_i64, append_i64_grouped, append_i64_scaled, append_u64_hex, output_i64,
    output_i64_grouped, output_i64_scaled, Buffer, CharConsumer, FmtSink, IoSink,
};
use rand::Rng;

use crate::common::{render, LimitedSink, SinkFull};

const SAMPLES: &[i64] = &[
    0,
    1,
    -1,
    99,
    100,
    12345,
    -12345,
    1234567890,
    i32::MAX as i64,
    i32::MIN as i64,
    i64::MAX,
    i64::MIN,
];

#[test]
fn all_sink_families_produce_identical_output() {
    let mut rng = rand::thread_rng();
    let random: Vec<i64> = (0..1000).map(|_| rng.gen()).collect();

    for &n in SAMPLES.iter().chain(random.iter()) {
        let via_string = render(|s| append_i64(s, n));

        let mut via_consumer = String::new();
        let Ok(()) = append_i64(&mut CharConsumer(|ch| via_consumer.push(ch)), n);
        assert_eq!(via_consumer, via_string);

        let mut buf = Buffer::new();
        append_i64(&mut buf, n).unwrap();
        assert_eq!(buf.as_str(), via_string);

        let mut array = ArrayString::<32>::new();
        append_i64(&mut array, n).unwrap();
        assert_eq!(array.as_str(), via_string);

        let mut via_fmt = String::new();
        append_i64(&mut FmtSink(&mut via_fmt), n).unwrap();
        assert_eq!(via_fmt, via_string);

        let mut via_io = Vec::new();
        append_i64(&mut IoSink(&mut via_io), n).unwrap();
        assert_eq!(String::from_utf8(via_io).unwrap(), via_string);
    }
}

#[test]
fn consumer_wrappers_match_the_append_family() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let n: i64 = rng.gen();

        let mut out = String::new();
        output_i64(n, |ch| out.push(ch));
        assert_eq!(out, render(|s| append_i64(s, n)));

        let mut out = String::new();
        output_i64_grouped(n, ',', |ch| out.push(ch));
        assert_eq!(out, render(|s| append_i64_grouped(s, n, ',')));

        let mut out = String::new();
        output_i64_scaled(n, 4, '.', |ch| out.push(ch));
        assert_eq!(out, render(|s| append_i64_scaled(s, n, 4, '.')));
    }
}

#[test]
fn first_failure_aborts_emission() {
    let mut sink = LimitedSink::new(5);
    assert_eq!(append_i64(&mut sink, -9876543210), Err(SinkFull));
    assert_eq!(sink.out, "-9876");

    let mut sink = LimitedSink::new(3);
    assert_eq!(append_i64_grouped(&mut sink, 1234567, ','), Err(SinkFull));
    assert_eq!(sink.out, "1,2");

    // a sink with room for the whole value does not fail
    let mut sink = LimitedSink::new(11);
    assert_eq!(append_i64(&mut sink, -9876543210), Ok(()));
    assert_eq!(sink.out, "-9876543210");
}

#[test]
fn array_string_overflow_surfaces_capacity_error() {
    let mut array = ArrayString::<4>::new();
    assert!(append_i32(&mut array, 123456).is_err());
    assert_eq!(array.as_str(), "1234");
}

#[test]
fn fmt_sink_works_inside_display() {
    struct Hex(u64);

    impl fmt::Display for Hex {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            append_u64_hex(&mut FmtSink(&mut *f), self.0)
        }
    }

    assert_eq!(Hex(0xDEADFEED).to_string(), "DEADFEED");
}

#[test]
fn buffer_accumulates_and_clears() {
    let mut buf = Buffer::new();
    assert!(buf.is_empty());

    append_i32(&mut buf, 123).unwrap();
    append_i32(&mut buf, -45).unwrap();
    assert_eq!(buf.as_str(), "123-45");
    assert_eq!(buf.len(), 6);
    assert_eq!(buf.to_string(), "123-45");
    assert_eq!(&buf[..3], "123");

    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.as_str(), "");
}

#[cfg(feature = "with-serde")]
#[test]
fn buffer_serializes_as_a_string() {
    let mut buf = Buffer::new();
    append_i64_grouped(&mut buf, 1234567, ',').unwrap();

    let json = serde_json::to_string(&buf).unwrap();
    assert_eq!(json, "\"1,234,567\"");

    let back: Buffer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, buf);
}
