//! Parsing decimals out of characters.

use core::str::FromStr;

use crate::decimal::Decimal;
use crate::error::{ParseError, ParseErrorCode};
use crate::pow::{pow10, MAX_DECIMAL_DIGITS};
use crate::round::RoundPolicy;

/// A minimal get/unget character feed for the decimal parser.
///
/// The parser reads one character past the number and pushes it back, so a
/// single slot of lookback is enough for implementers; `unget` is only ever
/// called right after a successful [`next`](Self::next).
pub trait CharSource {
    /// Produces the next character, or `None` at the end of input.
    fn next(&mut self) -> Option<char>;

    /// Pushes the last produced character back into the source.
    fn unget(&mut self);
}

/// A char source over an in-memory string; positions are byte offsets.
#[derive(Debug, Clone)]
pub struct StrCharSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> StrCharSource<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }
}

impl CharSource for StrCharSource<'_> {
    fn next(&mut self) -> Option<char> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(char::from(byte))
    }

    fn unget(&mut self) {
        self.pos -= 1;
    }
}

/// A char source over an arbitrary character iterator, e.g. one drawn from a
/// stream; keeps a one-slot pushback.
#[derive(Debug, Clone)]
pub struct IterCharSource<I> {
    iter: I,
    last: Option<char>,
    pushed_back: Option<char>,
}

impl<I: Iterator<Item = char>> IterCharSource<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            last: None,
            pushed_back: None,
        }
    }
}

impl<I: Iterator<Item = char>> CharSource for IterCharSource<I> {
    fn next(&mut self) -> Option<char> {
        if let Some(c) = self.pushed_back.take() {
            self.last = Some(c);
            return Some(c);
        }
        self.last = self.iter.next();
        self.last
    }

    fn unget(&mut self) {
        self.pushed_back = self.last;
    }
}

/// Switches that relax the strict decimal grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Allow space characters in the beginning or in the end: `" 42  "`.
    pub allow_spaces: bool,

    /// Allow any trailing characters: `"42ABC"`.
    pub allow_trailing_junk: bool,

    /// Allow a leading or trailing dot: `"42."`, `".42"`.
    pub allow_boundary_dot: bool,

    /// Allow fractional digits beyond the precision, rounding per the
    /// policy: `"0.123456"` read at two digits as `0.12` or `0.13`.
    pub allow_rounding: bool,
}

impl ParseOptions {
    /// The exact grammar `[+-]?\d+(\.\d+)?` and nothing else.
    pub const STRICT: Self = Self {
        allow_spaces: false,
        allow_trailing_junk: false,
        allow_boundary_dot: false,
        allow_rounding: false,
    };

    /// Surrounding spaces, boundary dots and excess fractional digits are
    /// all tolerated.
    pub const PERMISSIVE: Self = Self {
        allow_spaces: true,
        allow_trailing_junk: false,
        allow_boundary_dot: true,
        allow_rounding: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Before reading any part of the decimal.
    Sign,
    /// After reading a sign.
    BeforeFirstDig,
    /// Only leading zeros (at least one) have been met.
    LeadingZeros,
    /// At least one digit before the dot has been met.
    BeforeDec,
    /// Reading fractional digits.
    AfterDec,
    /// Reading and rounding extra fractional digits.
    IgnoringAfterDec,
    /// A character unrelated to the decimal has been met.
    End,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseUnpackedResult {
    pub before: i64,
    pub after: i64,
    pub decimal_digits: u8,
    pub is_negative: bool,
    pub error: Option<ParseErrorCode>,
    pub error_position: u32,
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0b')
}

fn digit_value(c: char) -> i64 {
    c as i64 - '0' as i64
}

/// Extracts the raw parts of a decimal from a character source.
///
/// The first offending character records the error and its position, but
/// scanning continues so the rest of the input is still validated.
pub(crate) fn parse_unpacked<S: CharSource>(
    input: &mut S,
    options: ParseOptions,
) -> ParseUnpackedResult {
    const DEC_POINT: char = '.';

    let mut before: i64 = 0;
    let mut after: i64 = 0;
    let mut is_negative = false;

    let mut position: i64 = -1;
    let mut state = ParseState::Sign;
    let mut error: Option<ParseErrorCode> = None;
    let mut before_digit_count: u32 = 0;
    let mut after_digit_count: u8 = 0;

    while state != ParseState::End {
        let Some(c) = input.next() else { break };
        if error.is_none() {
            position += 1;
        }

        match state {
            ParseState::Sign => {
                if c == '-' {
                    is_negative = true;
                    state = ParseState::BeforeFirstDig;
                } else if c == '+' {
                    state = ParseState::BeforeFirstDig;
                } else if c == '0' {
                    state = ParseState::LeadingZeros;
                    before_digit_count = 1;
                } else if c.is_ascii_digit() {
                    state = ParseState::BeforeDec;
                    before = digit_value(c);
                    before_digit_count = 1;
                } else if c == DEC_POINT {
                    if !options.allow_boundary_dot && error.is_none() {
                        // keep reading digits to validate the rest
                        error = Some(ParseErrorCode::BoundaryDot);
                    }
                    state = ParseState::AfterDec;
                } else if is_space(c) {
                    if !options.allow_spaces {
                        state = ParseState::End;
                        error = Some(ParseErrorCode::Space);
                    }
                } else {
                    state = ParseState::End;
                    error = Some(ParseErrorCode::WrongChar);
                }
            }
            ParseState::BeforeFirstDig => {
                if c == '0' {
                    state = ParseState::LeadingZeros;
                    before_digit_count = 1;
                } else if c.is_ascii_digit() {
                    state = ParseState::BeforeDec;
                    before = digit_value(c);
                    before_digit_count = 1;
                } else if c == DEC_POINT {
                    if !options.allow_boundary_dot && error.is_none() {
                        error = Some(ParseErrorCode::BoundaryDot);
                    }
                    state = ParseState::AfterDec;
                } else {
                    state = ParseState::End;
                    error = Some(ParseErrorCode::WrongChar);
                }
            }
            ParseState::LeadingZeros => {
                if c == '0' {
                    // skip
                } else if c.is_ascii_digit() {
                    state = ParseState::BeforeDec;
                    before = digit_value(c);
                } else if c == DEC_POINT {
                    state = ParseState::AfterDec;
                } else {
                    state = ParseState::End;
                }
            }
            ParseState::BeforeDec => {
                if c.is_ascii_digit() {
                    if before_digit_count < MAX_DECIMAL_DIGITS {
                        before = 10 * before + digit_value(c);
                        before_digit_count += 1;
                    } else if error.is_none() {
                        // keep scanning digits past the cap
                        error = Some(ParseErrorCode::Overflow);
                    }
                } else if c == DEC_POINT {
                    state = ParseState::AfterDec;
                } else {
                    state = ParseState::End;
                }
            }
            ParseState::AfterDec => {
                if c.is_ascii_digit() {
                    if u32::from(after_digit_count) < MAX_DECIMAL_DIGITS {
                        after = 10 * after + digit_value(c);
                        after_digit_count += 1;
                    } else {
                        if !options.allow_rounding && error.is_none() {
                            error = Some(ParseErrorCode::Rounding);
                        }
                        state = ParseState::IgnoringAfterDec;
                        if c >= '5' {
                            // round half up on the first dropped digit
                            after += 1;
                        }
                    }
                } else {
                    if !options.allow_boundary_dot && after_digit_count == 0 && error.is_none() {
                        error = Some(ParseErrorCode::BoundaryDot);
                    }
                    state = ParseState::End;
                }
            }
            ParseState::IgnoringAfterDec => {
                if !c.is_ascii_digit() {
                    state = ParseState::End;
                }
            }
            ParseState::End => unreachable!(),
        }
    }

    if state == ParseState::End {
        input.unget();

        if error.is_none() && !options.allow_trailing_junk {
            if !options.allow_spaces {
                error = Some(ParseErrorCode::Space);
            }
            position -= 1;

            loop {
                let Some(c) = input.next() else { break };
                position += 1;
                if !is_space(c) {
                    error = Some(ParseErrorCode::TrailingJunk);
                    input.unget();
                    break;
                }
            }
        }
    }

    if error.is_none() && before_digit_count == 0 && after_digit_count == 0 {
        error = Some(ParseErrorCode::NoDigits);
    }

    if error.is_none()
        && state == ParseState::AfterDec
        && !options.allow_boundary_dot
        && after_digit_count == 0
    {
        error = Some(ParseErrorCode::BoundaryDot);
    }

    ParseUnpackedResult {
        before,
        after,
        decimal_digits: after_digit_count,
        is_negative,
        error,
        error_position: position.max(0) as u32,
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RawParseError {
    pub code: ParseErrorCode,
    pub position: u32,
}

/// Packs a decimal out of a character source.
pub(crate) fn parse_decimal<const PREC: u32, R: RoundPolicy, S: CharSource>(
    input: &mut S,
    options: ParseOptions,
) -> Result<Decimal<PREC, R>, RawParseError> {
    let mut parsed = parse_unpacked(input, options);

    if let Some(code) = parsed.error {
        return Err(RawParseError {
            code,
            position: parsed.error_position,
        });
    }

    // A half-up bump past ".999…9" carries into the integer part.
    if u32::from(parsed.decimal_digits) == MAX_DECIMAL_DIGITS
        && parsed.after == pow10(MAX_DECIMAL_DIGITS)
    {
        parsed.after = 0;
        parsed.before += 1;
    }

    if parsed.before >= i64::MAX / pow10(PREC) {
        return Err(RawParseError {
            code: ParseErrorCode::Overflow,
            position: 0,
        });
    }

    if !options.allow_rounding && u32::from(parsed.decimal_digits) > PREC {
        return Err(RawParseError {
            code: ParseErrorCode::Rounding,
            position: 0,
        });
    }

    let (before, after) = if parsed.is_negative {
        (-parsed.before, -parsed.after)
    } else {
        (parsed.before, parsed.after)
    };

    Ok(Decimal::from_unpacked_rescaled(
        before,
        after,
        u32::from(parsed.decimal_digits),
    ))
}

impl<const PREC: u32, R: RoundPolicy> FromStr for Decimal<PREC, R> {
    type Err = ParseError;

    /// Strict parse.
    ///
    /// The string must match `[+-]?\d+(\.\d+)?` exactly: no surrounding
    /// spaces, no trailing characters, no boundary dot, and at most `PREC`
    /// fractional digits.
    fn from_str(input: &str) -> Result<Self, ParseError> {
        let mut source = StrCharSource::new(input);
        parse_decimal(&mut source, ParseOptions::STRICT)
            .map_err(|e| ParseError::new(Some(input), None, e.position, e.code))
    }
}

impl<const PREC: u32, R: RoundPolicy> Decimal<PREC, R> {
    /// Parses, additionally allowing surrounding spaces, a lone leading or
    /// trailing dot, and excess fractional digits rounded per the policy.
    pub fn from_string_permissive(input: &str) -> Result<Self, ParseError> {
        Self::from_str_with_options(input, ParseOptions::PERMISSIVE)
    }

    /// Parses under explicit [`ParseOptions`].
    pub fn from_str_with_options(input: &str, options: ParseOptions) -> Result<Self, ParseError> {
        let mut source = StrCharSource::new(input);
        parse_decimal(&mut source, options)
            .map_err(|e| ParseError::new(Some(input), None, e.position, e.code))
    }

    /// Reads a decimal from a character source, stream style.
    ///
    /// Leading spaces are skipped and reading stops at the first character
    /// that cannot extend the number, which stays unconsumed in the source;
    /// trailing junk is therefore never an error. On error the source is
    /// left wherever scanning stopped and no decimal is produced.
    pub fn from_char_source<S: CharSource>(source: &mut S) -> Result<Self, ParseError> {
        let options = ParseOptions {
            allow_spaces: true,
            allow_trailing_junk: true,
            ..ParseOptions::STRICT
        };
        parse_decimal(source, options).map_err(|e| ParseError::new(None, None, e.position, e.code))
    }

    /// Reads a decimal from a plain character iterator, stream style.
    ///
    /// See [`from_char_source`](Self::from_char_source).
    pub fn from_chars<I: IntoIterator<Item = char>>(input: I) -> Result<Self, ParseError> {
        let mut source = IterCharSource::new(input.into_iter());
        Self::from_char_source(&mut source)
    }
}
