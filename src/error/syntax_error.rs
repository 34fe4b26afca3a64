use thiserror::Error;

use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while translating tokens to commands.
pub enum SyntaxError {
    /// A `)` or `,` found no open `(` on the operator stack.
    #[error("missed pair for token {token} with number #{index}")]
    MissingOpeningParenthesis {
        /// The closing parenthesis or comma.
        token: Token,
        /// Index of the token among all tokens seen by the translator.
        index: usize,
    },
    /// A parenthesis left open when the input ended.
    #[error("missed pair for token {token}")]
    MissingPair {
        /// The unmatched parenthesis.
        token: Token,
    },
}
