use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,

    #[error("malformed number: {0}")]
    Malformed(ParseErrorKind),

    /// The value does not fit the requested native integer type.
    #[error("value out of range for the target type")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Nothing to parse.
    Empty,

    /// A sign with no digits after it.
    MissingDigits,

    /// `position` is a byte offset into the input.
    InvalidDigit { position: usize, found: char },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseErrorKind::Empty => write!(f, "empty string"),
            ParseErrorKind::MissingDigits => write!(f, "sign without digits"),
            ParseErrorKind::InvalidDigit { position, found } => {
                write!(f, "invalid digit {:?} at {}", found, position)
            }
        }
    }
}

impl From<ParseErrorKind> for Error {
    fn from(kind: ParseErrorKind) -> Self {
        Error::Malformed(kind)
    }
}
