//! Rounding policies for lossy decimal operations.

/// Rounds down to the nearest integer without going through the host float
/// library.
#[inline]
pub(crate) fn floor_to_i64(value: f64) -> i64 {
    let truncated = value as i64;
    if truncated as f64 <= value {
        truncated
    } else {
        truncated - 1
    }
}

/// Rounds up to the nearest integer without going through the host float
/// library.
#[inline]
pub(crate) fn ceil_to_i64(value: f64) -> i64 {
    let truncated = value as i64;
    if truncated as f64 >= value {
        truncated
    } else {
        truncated + 1
    }
}

mod sealed {
    pub trait Sealed {}
}

/// How lossy operations round.
///
/// A policy is a stateless strategy chosen at the type level; every decimal
/// operation that can drop digits consults it. The set of policies is closed
/// and dispatch is static, so the selection compiles away.
pub trait RoundPolicy: sealed::Sealed {
    /// Rounds a real-valued intermediate to an integer per the policy rule.
    ///
    /// `f64` is the widest real type available here, so inputs beyond 2^53
    /// lose low bits before rounding. Used for float conversions and as the
    /// last-resort fallback of the 64-bit product/quotient path.
    fn round(value: f64) -> i64;

    /// `dividend / divisor`, rounded per the policy.
    ///
    /// Returns `None` when an internal correction would overflow; callers
    /// fall back to the wide multiply-divide path. A wrong quotient is never
    /// silently produced.
    fn div_rounded(dividend: i64, divisor: i64) -> Option<i64>;
}

/// The fastest rounding. Rounds towards zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRoundPolicy;

/// Rounds towards zero, under the name matching the rest of the family.
pub type RoundDownRoundPolicy = NullRoundPolicy;

impl sealed::Sealed for NullRoundPolicy {}

impl RoundPolicy for NullRoundPolicy {
    #[inline]
    fn round(value: f64) -> i64 {
        value as i64
    }

    #[inline]
    fn div_rounded(dividend: i64, divisor: i64) -> Option<i64> {
        Some(dividend / divisor)
    }
}

/// Default rounding. Fast, rounds to nearest.
///
/// On 0.5, rounds away from zero. Also, sometimes rounds up numbers in the
/// neighborhood of 0.5, e.g. 0.49999999999999994 -> 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefRoundPolicy;

impl sealed::Sealed for DefRoundPolicy {}

impl RoundPolicy for DefRoundPolicy {
    #[inline]
    fn round(value: f64) -> i64 {
        (value + if value < 0.0 { -0.5 } else { 0.5 }) as i64
    }

    fn div_rounded(dividend: i64, divisor: i64) -> Option<i64> {
        let divisor_corr = (divisor / 2).abs();
        if dividend >= 0 {
            if i64::MAX - dividend >= divisor_corr {
                return Some((dividend + divisor_corr) / divisor);
            }
        } else if -(i64::MIN - dividend) >= divisor_corr {
            return Some((dividend - divisor_corr) / divisor);
        }
        None
    }
}

/// Rounds to nearest; 0.5 towards zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfDownRoundPolicy;

impl sealed::Sealed for HalfDownRoundPolicy {}

impl RoundPolicy for HalfDownRoundPolicy {
    fn round(value: f64) -> i64 {
        if value >= 0.0 {
            let decimals = value - floor_to_i64(value) as f64;
            if decimals > 0.5 {
                ceil_to_i64(value)
            } else {
                floor_to_i64(value)
            }
        } else {
            let decimals = ceil_to_i64(value) as f64 - value;
            if decimals > 0.5 {
                floor_to_i64(value)
            } else {
                ceil_to_i64(value)
            }
        }
    }

    fn div_rounded(dividend: i64, divisor: i64) -> Option<i64> {
        let divisor_corr = (divisor / 2).abs();
        let remainder = (dividend % divisor).abs();
        if dividend >= 0 {
            if i64::MAX - dividend < divisor_corr {
                return None;
            }
            if remainder > divisor_corr {
                Some((dividend + divisor_corr) / divisor)
            } else {
                Some(dividend / divisor)
            }
        } else {
            if -(i64::MIN - dividend) < divisor_corr {
                return None;
            }
            if remainder > divisor_corr {
                Some((dividend - divisor_corr) / divisor)
            } else {
                Some(dividend / divisor)
            }
        }
    }
}

/// Rounds to nearest; 0.5 away from zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfUpRoundPolicy;

impl sealed::Sealed for HalfUpRoundPolicy {}

impl RoundPolicy for HalfUpRoundPolicy {
    fn round(value: f64) -> i64 {
        if value >= 0.0 {
            let decimals = value - floor_to_i64(value) as f64;
            if decimals >= 0.5 {
                ceil_to_i64(value)
            } else {
                floor_to_i64(value)
            }
        } else {
            let decimals = ceil_to_i64(value) as f64 - value;
            if decimals >= 0.5 {
                floor_to_i64(value)
            } else {
                ceil_to_i64(value)
            }
        }
    }

    fn div_rounded(dividend: i64, divisor: i64) -> Option<i64> {
        let divisor_corr = (divisor / 2).abs();
        let remainder = (dividend % divisor).abs();
        if dividend >= 0 {
            if i64::MAX - dividend < divisor_corr {
                return None;
            }
            if remainder >= divisor_corr {
                Some((dividend + divisor_corr) / divisor)
            } else {
                Some(dividend / divisor)
            }
        } else {
            if -(i64::MIN - dividend) < divisor_corr {
                return None;
            }
            if remainder >= divisor_corr {
                Some((dividend - divisor_corr) / divisor)
            } else {
                Some(dividend / divisor)
            }
        }
    }
}

/// Rounds to nearest; 0.5 towards the number with an even last digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfEvenRoundPolicy;

impl sealed::Sealed for HalfEvenRoundPolicy {}

impl RoundPolicy for HalfEvenRoundPolicy {
    fn round(value: f64) -> i64 {
        if value >= 0.0 {
            let decimals = value - floor_to_i64(value) as f64;
            if decimals > 0.5 {
                ceil_to_i64(value)
            } else if decimals < 0.5 {
                floor_to_i64(value)
            } else if floor_to_i64(value) % 2 == 0 {
                floor_to_i64(value)
            } else {
                ceil_to_i64(value)
            }
        } else {
            let decimals = ceil_to_i64(value) as f64 - value;
            if decimals > 0.5 {
                floor_to_i64(value)
            } else if decimals < 0.5 {
                ceil_to_i64(value)
            } else if ceil_to_i64(value) % 2 == 0 {
                ceil_to_i64(value)
            } else {
                floor_to_i64(value)
            }
        }
    }

    fn div_rounded(dividend: i64, divisor: i64) -> Option<i64> {
        use core::cmp::Ordering;

        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        if remainder == 0 {
            return Some(quotient);
        }

        let away = if (dividend < 0) == (divisor < 0) {
            quotient + 1
        } else {
            quotient - 1
        };
        let twice_remainder = remainder.unsigned_abs() * 2;
        Some(match twice_remainder.cmp(&divisor.unsigned_abs()) {
            Ordering::Less => quotient,
            Ordering::Greater => away,
            Ordering::Equal => {
                if quotient % 2 == 0 {
                    quotient
                } else {
                    away
                }
            }
        })
    }
}

/// Rounds towards +infinity.
#[derive(Debug, Clone, Copy, Default)]
pub struct CeilingRoundPolicy;

impl sealed::Sealed for CeilingRoundPolicy {}

impl RoundPolicy for CeilingRoundPolicy {
    #[inline]
    fn round(value: f64) -> i64 {
        ceil_to_i64(value)
    }

    fn div_rounded(dividend: i64, divisor: i64) -> Option<i64> {
        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        if remainder != 0 && (dividend < 0) == (divisor < 0) {
            Some(quotient + 1)
        } else {
            Some(quotient)
        }
    }
}

/// Rounds towards -infinity.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorRoundPolicy;

impl sealed::Sealed for FloorRoundPolicy {}

impl RoundPolicy for FloorRoundPolicy {
    #[inline]
    fn round(value: f64) -> i64 {
        floor_to_i64(value)
    }

    fn div_rounded(dividend: i64, divisor: i64) -> Option<i64> {
        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        if remainder != 0 && (dividend < 0) != (divisor < 0) {
            Some(quotient - 1)
        } else {
            Some(quotient)
        }
    }
}

/// Rounds away from zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundUpRoundPolicy;

impl sealed::Sealed for RoundUpRoundPolicy {}

impl RoundPolicy for RoundUpRoundPolicy {
    #[inline]
    fn round(value: f64) -> i64 {
        if value >= 0.0 {
            ceil_to_i64(value)
        } else {
            floor_to_i64(value)
        }
    }

    fn div_rounded(dividend: i64, divisor: i64) -> Option<i64> {
        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        if remainder == 0 {
            Some(quotient)
        } else if (dividend < 0) == (divisor < 0) {
            Some(quotient + 1)
        } else {
            Some(quotient - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_and_ceil_helpers() {
        assert_eq!(floor_to_i64(2.7), 2);
        assert_eq!(floor_to_i64(-2.7), -3);
        assert_eq!(floor_to_i64(3.0), 3);
        assert_eq!(floor_to_i64(-3.0), -3);
        assert_eq!(ceil_to_i64(2.3), 3);
        assert_eq!(ceil_to_i64(-2.3), -2);
        assert_eq!(ceil_to_i64(3.0), 3);
        assert_eq!(ceil_to_i64(-3.0), -3);
    }

    #[test]
    fn test_null_round() {
        assert_eq!(NullRoundPolicy::round(2.7), 2);
        assert_eq!(NullRoundPolicy::round(-2.7), -2);
        assert_eq!(NullRoundPolicy::div_rounded(7, 2), Some(3));
        assert_eq!(NullRoundPolicy::div_rounded(-7, 2), Some(-3));
    }

    #[test]
    fn test_def_round() {
        assert_eq!(DefRoundPolicy::round(2.5), 3);
        assert_eq!(DefRoundPolicy::round(-2.5), -3);
        assert_eq!(DefRoundPolicy::round(2.4), 2);
        assert_eq!(DefRoundPolicy::round(-2.4), -2);
    }

    #[test]
    fn test_def_div_rounded() {
        assert_eq!(DefRoundPolicy::div_rounded(5, 2), Some(3));
        assert_eq!(DefRoundPolicy::div_rounded(-5, 2), Some(-3));
        assert_eq!(DefRoundPolicy::div_rounded(4, 2), Some(2));
        assert_eq!(DefRoundPolicy::div_rounded(7, 3), Some(2));
    }

    #[test]
    fn test_def_div_rounded_signals_overflow() {
        assert_eq!(DefRoundPolicy::div_rounded(i64::MAX, 100), None);
        assert_eq!(DefRoundPolicy::div_rounded(i64::MIN, 100), None);
        assert_eq!(DefRoundPolicy::div_rounded(i64::MAX - 1, 2), Some(i64::MAX / 2));
    }

    #[test]
    fn test_half_down_ties_towards_zero() {
        assert_eq!(HalfDownRoundPolicy::round(2.5), 2);
        assert_eq!(HalfDownRoundPolicy::round(-2.5), -2);
        assert_eq!(HalfDownRoundPolicy::round(2.6), 3);
        assert_eq!(HalfDownRoundPolicy::round(-2.6), -3);
        assert_eq!(HalfDownRoundPolicy::div_rounded(5, 2), Some(2));
        assert_eq!(HalfDownRoundPolicy::div_rounded(-5, 2), Some(-2));
        assert_eq!(HalfDownRoundPolicy::div_rounded(7, 2), Some(3));
        assert_eq!(HalfDownRoundPolicy::div_rounded(-7, 2), Some(-3));
        assert_eq!(HalfDownRoundPolicy::div_rounded(7, 4), Some(2));
    }

    #[test]
    fn test_half_up_ties_away_from_zero() {
        assert_eq!(HalfUpRoundPolicy::round(2.5), 3);
        assert_eq!(HalfUpRoundPolicy::round(-2.5), -3);
        assert_eq!(HalfUpRoundPolicy::round(2.4), 2);
        assert_eq!(HalfUpRoundPolicy::round(-2.4), -2);
        assert_eq!(HalfUpRoundPolicy::div_rounded(5, 2), Some(3));
        assert_eq!(HalfUpRoundPolicy::div_rounded(-5, 2), Some(-3));
        assert_eq!(HalfUpRoundPolicy::div_rounded(3, 2), Some(2));
        assert_eq!(HalfUpRoundPolicy::div_rounded(5, 4), Some(1));
    }

    #[test]
    fn test_half_even_ties_towards_even() {
        assert_eq!(HalfEvenRoundPolicy::round(2.5), 2);
        assert_eq!(HalfEvenRoundPolicy::round(3.5), 4);
        assert_eq!(HalfEvenRoundPolicy::round(-2.5), -2);
        assert_eq!(HalfEvenRoundPolicy::round(-3.5), -4);
        assert_eq!(HalfEvenRoundPolicy::div_rounded(5, 2), Some(2));
        assert_eq!(HalfEvenRoundPolicy::div_rounded(7, 2), Some(4));
        assert_eq!(HalfEvenRoundPolicy::div_rounded(-5, 2), Some(-2));
        assert_eq!(HalfEvenRoundPolicy::div_rounded(-7, 2), Some(-4));
        assert_eq!(HalfEvenRoundPolicy::div_rounded(13, 4), Some(3));
        assert_eq!(HalfEvenRoundPolicy::div_rounded(15, 4), Some(4));
    }

    #[test]
    fn test_ceiling_rounds_towards_positive_infinity() {
        assert_eq!(CeilingRoundPolicy::round(2.1), 3);
        assert_eq!(CeilingRoundPolicy::round(-2.9), -2);
        assert_eq!(CeilingRoundPolicy::div_rounded(7, 2), Some(4));
        assert_eq!(CeilingRoundPolicy::div_rounded(-7, 2), Some(-3));
        assert_eq!(CeilingRoundPolicy::div_rounded(6, 2), Some(3));
        assert_eq!(CeilingRoundPolicy::div_rounded(7, -2), Some(-3));
    }

    #[test]
    fn test_floor_rounds_towards_negative_infinity() {
        assert_eq!(FloorRoundPolicy::round(2.9), 2);
        assert_eq!(FloorRoundPolicy::round(-2.1), -3);
        assert_eq!(FloorRoundPolicy::div_rounded(7, 2), Some(3));
        assert_eq!(FloorRoundPolicy::div_rounded(-7, 2), Some(-4));
        assert_eq!(FloorRoundPolicy::div_rounded(7, -2), Some(-4));
    }

    #[test]
    fn test_round_up_rounds_away_from_zero() {
        assert_eq!(RoundUpRoundPolicy::round(2.1), 3);
        assert_eq!(RoundUpRoundPolicy::round(-2.1), -3);
        assert_eq!(RoundUpRoundPolicy::div_rounded(7, 2), Some(4));
        assert_eq!(RoundUpRoundPolicy::div_rounded(-7, 2), Some(-4));
        assert_eq!(RoundUpRoundPolicy::div_rounded(6, 2), Some(3));
    }
}
