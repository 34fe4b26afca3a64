/// Lexical errors.
///
/// Raised by the tokenizer when a character cannot start or continue any
/// token, or when a numeric literal is malformed. Every lexical error carries
/// the position where it was detected.
pub mod lex_error;
/// Syntax errors.
///
/// Raised by the translator when parentheses or argument separators do not
/// pair up.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised by the evaluator while executing postfix commands: malformed
/// literals, unknown names, stack underflow and handler failures.
pub mod eval_error;
/// Pipeline-level errors.
///
/// Wraps the stage errors with the stage that raised them, plus the
/// interpreter's own failure modes.
pub mod calc_error;

pub use calc_error::{CalcError, InterpretError};
pub use eval_error::EvalError;
pub use lex_error::{LexError, Position};
pub use syntax_error::SyntaxError;
