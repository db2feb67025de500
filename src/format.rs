//! Rendering decimals as text.

use core::fmt;

use alloc::string::String;

use crate::decimal::Decimal;
use crate::pow::pow10;
use crate::round::RoundPolicy;

/// Divides out the widest power of 10 that leaves no remainder, returning
/// the number of zeros trimmed; 16/8/4/2/1 steps keep the work constant.
pub(crate) fn trim_trailing_zeros(prec: u32, after: &mut i64) -> u32 {
    if prec == 0 {
        return 0;
    }
    if *after == 0 {
        return prec;
    }

    let mut trimmed = 0;
    if prec >= 17 && *after % pow10(16) == 0 {
        *after /= pow10(16);
        trimmed += 16;
    }
    if prec >= 9 && *after % pow10(8) == 0 {
        *after /= pow10(8);
        trimmed += 8;
    }
    if prec >= 5 && *after % pow10(4) == 0 {
        *after /= pow10(4);
        trimmed += 4;
    }
    if prec >= 3 && *after % pow10(2) == 0 {
        *after /= pow10(2);
        trimmed += 2;
    }
    if *after % 10 == 0 {
        *after /= 10;
        trimmed += 1;
    }
    trimmed
}

impl<const PREC: u32, R: RoundPolicy> fmt::Display for Decimal<PREC, R> {
    /// Renders the decimal.
    ///
    /// `{}` trims trailing zeros and omits the dot when no fractional digits
    /// remain; the alternate form `{:#}` writes exactly `PREC` fractional
    /// digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unpacked = self.as_unpacked();
        let mut after = unpacked.after;
        let mut after_digits = PREC;

        if !f.alternate() {
            after_digits -= trim_trailing_zeros(PREC, &mut after);
        }

        if self.sign() < 0 {
            f.write_str("-")?;
        }

        let before = unpacked.before.unsigned_abs();
        if after_digits > 0 {
            write!(
                f,
                "{}.{:0width$}",
                before,
                after.unsigned_abs(),
                width = after_digits as usize
            )
        } else {
            write!(f, "{before}")
        }
    }
}

impl<const PREC: u32, R: RoundPolicy> fmt::Debug for Decimal<PREC, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // {:#?} shows the raw mantissa
            f.debug_struct("Decimal")
                .field("value", &self.as_unbiased())
                .finish()
        } else {
            write!(f, "Decimal<{}>({})", PREC, self)
        }
    }
}

impl<const PREC: u32, R: RoundPolicy> Decimal<PREC, R> {
    /// Renders with exactly `PREC` fractional digits, e.g. `1.5000`.
    pub fn to_string_trailing_zeros(self) -> String {
        alloc::format!("{self:#}")
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    type Money = Decimal<4>;

    #[test]
    fn test_trim_trailing_zeros() {
        let mut after = 1_400;
        assert_eq!(trim_trailing_zeros(4, &mut after), 2);
        assert_eq!(after, 14);

        let mut after = 0;
        assert_eq!(trim_trailing_zeros(4, &mut after), 4);

        let mut after = 1;
        assert_eq!(trim_trailing_zeros(4, &mut after), 0);

        let mut after = 100_000_000_000_000_000;
        assert_eq!(trim_trailing_zeros(18, &mut after), 17);
        assert_eq!(after, 1);

        let mut after = 0;
        assert_eq!(trim_trailing_zeros(0, &mut after), 0);
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        assert_eq!("3".parse::<Money>().unwrap().to_string(), "3");
        assert_eq!("3.1".parse::<Money>().unwrap().to_string(), "3.1");
        assert_eq!("3.1400".parse::<Money>().unwrap().to_string(), "3.14");
        assert_eq!("0".parse::<Money>().unwrap().to_string(), "0");
    }

    #[test]
    fn test_trailing_zeros_mode_is_fixed_width() {
        let d: Money = "1.5".parse().unwrap();
        assert_eq!(d.to_string_trailing_zeros(), "1.5000");
        let d: Money = "3".parse().unwrap();
        assert_eq!(d.to_string_trailing_zeros(), "3.0000");
        let d: Decimal<0> = "42".parse().unwrap();
        assert_eq!(d.to_string_trailing_zeros(), "42");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!("-3.14".parse::<Money>().unwrap().to_string(), "-3.14");
        let d: Money = "-3.14".parse().unwrap();
        assert_eq!(d.to_string_trailing_zeros(), "-3.1400");
    }

    #[test]
    fn test_negative_fraction_with_zero_integer_part() {
        let d: Money = "-0.14".parse().unwrap();
        assert_eq!(d.to_string(), "-0.14");
        assert_eq!(d.to_string_trailing_zeros(), "-0.1400");
    }

    #[test]
    fn test_zero_precision() {
        let d: Decimal<0> = "1000000".parse().unwrap();
        assert_eq!(d.to_string(), "1000000");
    }

    #[test]
    fn test_small_fractions_keep_leading_zeros() {
        let d: Money = "0.0003".parse().unwrap();
        assert_eq!(d.to_string(), "0.0003");
        let d: Money = "0.0030".parse().unwrap();
        assert_eq!(d.to_string(), "0.003");
    }

    #[test]
    fn test_debug() {
        let d: Money = "1.5".parse().unwrap();
        assert_eq!(std::format!("{d:?}"), "Decimal<4>(1.5)");
        assert!(std::format!("{d:#?}").contains("15000"));
    }
}
