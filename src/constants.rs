// Paired lookup tables for two-digit decimal emission: for a value i in
// [0, 100), TENS_DIGITS[i] and DIGITS[i] are the two characters of i
// zero-padded to two digits. One table index replaces a division and a
// remainder in the common two-digit case.
pub(crate) const DIGITS: &[u8; 100] =
    b"0123456789012345678901234567890123456789012345678901234567890123456789012345678901234567890123456789";

pub(crate) const TENS_DIGITS: &[u8; 100] =
    b"0000000000111111111122222222223333333333444444444455555555556666666666777777777788888888889999999999";

pub(crate) const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub(crate) const HEX_DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";

// Decimal magnitude of the two's-complement minimum for each width. These
// magnitudes have no positive representation in the same signed width, so
// the signed emitters route them through these literals instead of negating.
pub(crate) const I32_MIN_DIGITS: &str = "2147483648";
pub(crate) const I64_MIN_DIGITS: &str = "9223372036854775808";

// Capacity of `Buffer`, sized for the longest single emission with margin:
// an i64 grouped with 4-byte separator characters is 1 sign + 19 digits +
// 6 separators * 4 bytes = 44 bytes. Scaled output grows past that only
// when the scale exceeds the digit count (one zero-fill digit per extra
// point of scale), so 128 covers every scale any caller plausibly passes.
pub(crate) const MAX_BUF_LEN: usize = 128;
