//! Wide multiply-divide over 64-bit integers.

use crate::round::RoundPolicy;

pub(crate) fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i64
}

/// Computes `(value1 * value2) / divisor` rounded per `R`, staying within
/// 64-bit arithmetic even when the full product needs 128 bits.
///
/// Callers guarantee that the integer-part cross products fit in `i64`.
/// Division by zero propagates as the usual integer-division panic.
pub(crate) fn mult_div<R: RoundPolicy>(value1: i64, value2: i64, divisor: i64) -> i64 {
    let value1_int = value1 / divisor;
    let mut value1_dec = value1 % divisor;
    let value2_int = value2 / divisor;
    let mut value2_dec = value2 % divisor;

    let result = value1 * value2_int + value1_int * value2_dec;

    if value1_dec == 0 || value2_dec == 0 {
        return result;
    }

    if let Some(dec_product) = value1_dec.checked_mul(value2_dec) {
        return result + R::div_rounded(dec_product, divisor).unwrap_or(0);
    }

    // The fractional product overflows; cancel common factors against the
    // divisor and retry.
    let mut divisor = divisor;
    let common = gcd(value1_dec, divisor);
    if common != 1 {
        value1_dec /= common;
        divisor /= common;
    }
    let common = gcd(value2_dec, divisor);
    if common != 1 {
        value2_dec /= common;
        divisor /= common;
    }

    if let Some(dec_product) = value1_dec.checked_mul(value2_dec) {
        if let Some(rounded) = R::div_rounded(dec_product, divisor) {
            return result + rounded;
        }
    }

    // Still too wide; approximate the fractional contribution in floats.
    result + R::round(value1_dec as f64 * value2_dec as f64 / divisor as f64)
}
