mod common;

use int_output::{
    append_1_digit, append_1_digit_safe, append_2_digits, append_2_digits_safe, append_3_digits,
    append_3_digits_safe, append_i32, append_i64, append_u32, append_u64,
};
use rand::Rng;

use crate::common::render;

#[test]
fn converts_i32() {
    let cases: &[(i32, &str)] = &[
        (0, "0"),
        (1, "1"),
        (9, "9"),
        (10, "10"),
        (99, "99"),
        (100, "100"),
        (123456, "123456"),
        (-1, "-1"),
        (-22334455, "-22334455"),
        (i32::MAX, "2147483647"),
        (i32::MIN, "-2147483648"),
    ];
    for &(value, expected) in cases {
        assert_eq!(render(|s| append_i32(s, value)), expected);
    }
}

#[test]
fn converts_u32() {
    let cases: &[(u32, &str)] = &[
        (0, "0"),
        (123456, "123456"),
        (2147483648, "2147483648"),
        (3456789012, "3456789012"),
        (0x89ABCDEF, "2309737967"),
        (u32::MAX, "4294967295"),
    ];
    for &(value, expected) in cases {
        assert_eq!(render(|s| append_u32(s, value)), expected);
    }
}

#[test]
fn converts_i64() {
    let cases: &[(i64, &str)] = &[
        (0, "0"),
        (123456789012345678, "123456789012345678"),
        (-2233445566778899, "-2233445566778899"),
        (i32::MAX as i64, "2147483647"),
        (i32::MIN as i64, "-2147483648"),
        (i64::MAX, "9223372036854775807"),
        (i64::MIN, "-9223372036854775808"),
    ];
    for &(value, expected) in cases {
        assert_eq!(render(|s| append_i64(s, value)), expected);
    }
}

#[test]
fn converts_u64() {
    let cases: &[(u64, &str)] = &[
        (0, "0"),
        (1234567890123456789, "1234567890123456789"),
        (i64::MAX as u64 + 1, "9223372036854775808"),
        (12345678901234567890, "12345678901234567890"),
        (u64::MAX, "18446744073709551615"),
    ];
    for &(value, expected) in cases {
        assert_eq!(render(|s| append_u64(s, value)), expected);
    }
}

#[test]
fn emits_one_digit() {
    assert_eq!(render(|s| append_1_digit(s, 0)), "0");
    assert_eq!(render(|s| append_1_digit(s, 1)), "1");
    assert_eq!(render(|s| append_1_digit(s, 9)), "9");
}

#[test]
fn emits_one_digit_safely() {
    assert_eq!(render(|s| append_1_digit_safe(s, 50)), "0");
    assert_eq!(render(|s| append_1_digit_safe(s, -511)), "1");
    assert_eq!(render(|s| append_1_digit_safe(s, 99999999)), "9");
    assert_eq!(render(|s| append_1_digit_safe(s, i32::MIN)), "8");
}

#[test]
fn emits_two_digits() {
    assert_eq!(render(|s| append_2_digits(s, 0)), "00");
    assert_eq!(render(|s| append_2_digits(s, 1)), "01");
    assert_eq!(render(|s| append_2_digits(s, 21)), "21");
    assert_eq!(render(|s| append_2_digits(s, 99)), "99");
}

#[test]
fn emits_two_digits_safely() {
    assert_eq!(render(|s| append_2_digits_safe(s, 5000)), "00");
    assert_eq!(render(|s| append_2_digits_safe(s, -801)), "01");
    assert_eq!(render(|s| append_2_digits_safe(s, 222221)), "21");
    assert_eq!(render(|s| append_2_digits_safe(s, i32::MIN)), "48");
}

#[test]
fn emits_three_digits() {
    assert_eq!(render(|s| append_3_digits(s, 0)), "000");
    assert_eq!(render(|s| append_3_digits(s, 1)), "001");
    assert_eq!(render(|s| append_3_digits(s, 21)), "021");
    assert_eq!(render(|s| append_3_digits(s, 321)), "321");
}

#[test]
fn emits_three_digits_safely() {
    assert_eq!(render(|s| append_3_digits_safe(s, 5000)), "000");
    assert_eq!(render(|s| append_3_digits_safe(s, 1234569001)), "001");
    assert_eq!(render(|s| append_3_digits_safe(s, -4021)), "021");
    assert_eq!(render(|s| append_3_digits_safe(s, 7654321)), "321");
    assert_eq!(render(|s| append_3_digits_safe(s, i32::MIN)), "648");
}

#[test]
fn random_values_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..10_000 {
        let i: i32 = rng.gen();
        assert_eq!(render(|s| append_i32(s, i)).parse::<i32>().unwrap(), i);

        let n: i64 = rng.gen();
        assert_eq!(render(|s| append_i64(s, n)).parse::<i64>().unwrap(), n);

        let u: u32 = rng.gen();
        assert_eq!(render(|s| append_u32(s, u)).parse::<u32>().unwrap(), u);

        let u: u64 = rng.gen();
        assert_eq!(render(|s| append_u64(s, u)).parse::<u64>().unwrap(), u);
    }
}

#[test]
fn output_is_minimal_form() {
    let mut rng = rand::thread_rng();
    for _ in 0..10_000 {
        let n: i64 = rng.gen();
        let s = render(|sink| append_i64(sink, n));
        let digits = s.strip_prefix('-').unwrap_or(&s);
        if digits.len() > 1 {
            assert!(!digits.starts_with('0'), "leading zero in {:?}", s);
        }
        assert_eq!(s.starts_with('-'), n < 0);
    }
}
