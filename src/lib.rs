//! # calcflow
//!
//! calcflow evaluates arithmetic expressions written as text.
//! It supports named variables, pluggable functions and operators, operator
//! precedence, parentheses and multi-argument function calls. The input may
//! arrive in one string or in many fragments: every stage of the pipeline is
//! resumable, and the result does not depend on how the text was split.
//!
//! The pipeline is text → tokens → postfix commands → number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{
        calculator::Calculator,
        evaluator::{core::Variables, function::core::Functions},
    },
};

/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while tokenizing,
/// translating or evaluating an expression, and the wrappers the calculator
/// and the interpreter add on top. Each error carries the position, token or
/// command it concerns.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, translator,
///   evaluator).
/// - Records where a failure happened: character offsets, token indices and
///   command indices.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together tokenizing, translation, evaluation, the
/// function table and the line interpreter. It exposes the public API for
/// evaluating expressions in one go or chunk by chunk.
///
/// # Responsibilities
/// - Coordinates all core components: tokenizer, translator and evaluator.
/// - Provides entry points for single expressions and for input lines with
///   assignments.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for preparing input lines.
///
/// # Responsibilities
/// - Strip trailing comments.
/// - Split assignments into target and expression.
pub mod util;

/// Evaluates a complete expression in one pass.
///
/// This is a shorthand for a [`Calculator`] fed a single chunk and finalized
/// right away.
///
/// # Errors
/// Returns the error of the first stage that fails.
///
/// # Examples
/// ```
/// use calcflow::{
///     calculate,
///     interpreter::evaluator::function::{builtin, core::Functions},
/// };
///
/// let variables = builtin::variables();
/// let functions = Functions::builtin();
///
/// assert_eq!(calculate("2 + 3 * 4", &variables, &functions), Ok(14.0));
/// assert_eq!(calculate("2 ^ 3 ^ 2", &variables, &functions), Ok(64.0));
///
/// // Unknown variable.
/// assert!(calculate("y + 1", &variables, &functions).is_err());
/// ```
pub fn calculate(code: &str, variables: &Variables, functions: &Functions) -> Result<f64, CalcError> {
    let mut calculator = Calculator::new(variables, functions);
    calculator.calculate(code)?;
    calculator.finalize()
}
