//! Parse error classification and diagnostics.

use alloc::format;
use alloc::string::String;

/// Classification of a malformed decimal string.
///
/// The parser records the first offending byte it meets; its 0-based position
/// travels alongside the code in [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorCode {
    /// An unexpected character has been met.
    #[error("wrong character")]
    WrongChar,

    /// No digits before or after the dot.
    #[error("no digits")]
    NoDigits,

    /// The integral part does not fit in the mantissa.
    #[error("overflow")]
    Overflow,

    /// A space character, while disallowed by options.
    #[error("space character")]
    Space,

    /// Trailing junk, while disallowed by options.
    #[error("trailing junk")]
    TrailingJunk,

    /// A leading or trailing dot (`"42."`, `".42"`), while disallowed by
    /// options.
    #[error("boundary dot")]
    BoundaryDot,

    /// More fractional digits than the precision holds, while rounding is
    /// disallowed by options.
    #[error("rounding required")]
    Rounding,
}

/// A failure to read a [`Decimal`](crate::Decimal) from text.
///
/// The message is formatted eagerly, so the diagnostic stays valid after the
/// borrowed source string is gone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    code: ParseErrorCode,
    position: u32,
    message: String,
}

impl ParseError {
    /// Builds the diagnostic, formatting the message eagerly.
    ///
    /// `path` names the containing value when a (de)serialization
    /// collaborator has one to offer, e.g. `order.total`.
    pub fn new(
        source: Option<&str>,
        path: Option<&str>,
        position: u32,
        code: ParseErrorCode,
    ) -> Self {
        let path = path.unwrap_or("<string>");
        let message = match source {
            Some(source) => format!(
                "error while parsing decimal \"{source}\" at {path}, position {position}: {code}"
            ),
            None => format!("error while parsing decimal at {path}, position {position}: {code}"),
        };
        Self {
            code,
            position,
            message,
        }
    }

    /// The error classification.
    pub fn code(&self) -> ParseErrorCode {
        self.code
    }

    /// 0-based byte position of the first offending character.
    pub fn position(&self) -> u32 {
        self.position
    }
}
