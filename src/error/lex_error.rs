use std::fmt;

use thiserror::Error;

/// Location of a lexical error.
///
/// Offsets count characters (not bytes) from the start of the first chunk fed
/// to the tokenizer, so an error in the third chunk still points at its
/// absolute place in the whole expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Absolute character offset of the offending character.
    Offset(usize),
    /// The error was detected while finalizing, after the last character.
    EndOfInput,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset(offset) => write!(f, "position {offset}"),
            Self::EndOfInput => write!(f, "EOI"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A character that belongs to no token class.
    #[error("unknown symbol {symbol:?} at {position}")]
    UnknownSymbol {
        /// The character encountered.
        symbol:   char,
        /// Where it was encountered.
        position: Position,
    },
    /// A `.` after the fractional part, inside an exponent or an identifier.
    #[error("unexpected fractional point at {position}")]
    UnexpectedFractionalPoint {
        /// Where the point was encountered.
        position: Position,
    },
    /// A numeric literal consisting of a lone `.`.
    #[error("both integer and fractional parts are empty at {position}")]
    EmptyIntegerAndFractionalParts {
        /// Position of the character that ended the literal.
        position: Position,
    },
    /// A numeric literal ending with the exponent marker `e`/`E`.
    #[error("empty exponent part at {position}")]
    EmptyExponentPart {
        /// Position of the character that ended the literal.
        position: Position,
    },
}
