use thiserror::Error;

use crate::error::{EvalError, LexError, SyntaxError};

#[derive(Debug, Clone, PartialEq, Error)]
/// An error raised by one of the calculator stages.
///
/// The variant records both the stage and whether the failure happened while
/// feeding a chunk or while finalizing.
pub enum CalcError {
    /// Tokenizing a chunk failed.
    #[error("unable to tokenize the code: {0}")]
    Tokenize(#[source] LexError),
    /// Translating the tokens of a chunk failed.
    #[error("unable to translate the tokens: {0}")]
    Translate(#[source] SyntaxError),
    /// Evaluating the commands of a chunk failed.
    #[error("unable to evaluate the commands: {0}")]
    Evaluate(#[source] EvalError),
    /// Flushing the tokenizer failed.
    #[error("unable to finalize the tokenizer: {0}")]
    FinalizeTokenizer(#[source] LexError),
    /// Flushing the translator failed.
    #[error("unable to finalize the translator: {0}")]
    FinalizeTranslator(#[source] SyntaxError),
    /// Extracting the result failed.
    #[error("unable to finalize the evaluator: {0}")]
    FinalizeEvaluator(#[source] EvalError),
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors an interpreter line can produce.
pub enum InterpretError {
    /// The line held neither an expression nor an assignment target.
    #[error("no code")]
    NoCode,
    /// The expression failed to calculate.
    #[error("unable to calculate the input: {0}")]
    Calculate(#[from] CalcError),
}
