//! Fixed-point base-10 decimal arithmetic over a 64-bit mantissa
//!
//! A [`Decimal<PREC, R>`](Decimal) stores a single signed 64-bit mantissa `v`
//! and denotes the rational number `v / 10^PREC`. The precision `PREC` (up to
//! 18 fractional digits) and the rounding policy `R` are compile-time
//! parameters, so decimals of different precision are different types, values
//! stay trivially copyable, and results are identical across platforms.
//!
//! Decimals should be stored and transmitted as strings, never as binary
//! floating-point: parse with [`str::parse`] (strict) or
//! [`Decimal::from_string_permissive`], and render with `to_string` or
//! [`Decimal::to_string_trailing_zeros`].
//!
//! ```
//! use decimal64::{Decimal, HalfEvenRoundPolicy};
//!
//! type Money = Decimal<4, HalfEvenRoundPolicy>;
//!
//! let mut sum = Money::ZERO;
//! for cost in ["2.35", "0.15"] {
//!     sum += cost.parse::<Money>()?;
//! }
//! assert_eq!(sum.to_string(), "2.5");
//! assert_eq!(sum.to_string_trailing_zeros(), "2.5000");
//! # Ok::<(), decimal64::ParseError>(())
//! ```
//!
//! Multiplication and division round according to the policy; pick the
//! precision with enough headroom, since plain `+` and `-` do not check the
//! mantissa for overflow.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod decimal;
mod error;
mod format;
mod ops;
mod parse;
mod pow;
mod round;

#[cfg(feature = "serde")]
mod serde_impl;

pub use decimal::Decimal;
pub use error::{ParseError, ParseErrorCode};
pub use parse::{CharSource, IterCharSource, ParseOptions, StrCharSource};
pub use pow::{pow10, MAX_DECIMAL_DIGITS};
pub use round::{
    CeilingRoundPolicy, DefRoundPolicy, FloorRoundPolicy, HalfDownRoundPolicy,
    HalfEvenRoundPolicy, HalfUpRoundPolicy, NullRoundPolicy, RoundDownRoundPolicy, RoundPolicy,
    RoundUpRoundPolicy,
};
