use std::fmt;

use thiserror::Error;

/// Errors that can occur while decoding bencode data.
///
/// Encoding never fails: every [`Value`](super::Value) has a bencode form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    /// The input ended while the grammar still expected more bytes.
    #[error("unexpected end of input at position {position}")]
    UnexpectedEos { position: usize },

    /// A byte that is not valid at this point of the grammar.
    #[error("unexpected token '{}' at position {position}, expected {expected}", escaped(.token))]
    UnexpectedToken {
        token: u8,
        position: usize,
        expected: Expected,
    },

    /// Lists and dictionaries are nested deeper than the configured limit.
    #[error("nesting too deep at position {position}")]
    NestingTooDeep { position: usize },
}

impl BencodeError {
    /// Returns the byte offset at which decoding failed.
    pub fn position(&self) -> usize {
        match self {
            BencodeError::UnexpectedEos { position }
            | BencodeError::UnexpectedToken { position, .. }
            | BencodeError::NestingTooDeep { position } => *position,
        }
    }
}

/// What the decoder was looking for when it hit an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The start of a value: `i`, a digit, `l` or `d`.
    Value,
    /// More integer digits or the closing `e`.
    DigitOrEnd,
    /// The `:` separating a string length from its bytes.
    Colon,
    /// A byte string used as a dictionary key.
    Key,
    /// At least one digit (strict mode).
    Digit,
    /// A digit of a well-formed integer (strict mode).
    CanonicalDigit,
    /// A number that fits the target integer type.
    InRange,
    /// Nothing: the value was complete.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Expected::Value => "'i', a digit, 'l' or 'd'",
            Expected::DigitOrEnd => "a digit or 'e'",
            Expected::Colon => "':'",
            Expected::Key => "a byte string key",
            Expected::Digit => "a digit",
            Expected::CanonicalDigit => "a digit without leading zeros",
            Expected::InRange => "a number within 64-bit range",
            Expected::EndOfInput => "end of input",
        };
        f.write_str(s)
    }
}

fn escaped(byte: &u8) -> std::ascii::EscapeDefault {
    std::ascii::escape_default(*byte)
}
