/// The lexer module tokenizes source text for further translation.
///
/// The tokenizer reads raw characters, possibly spread over several chunks,
/// and produces numbers, identifiers, operators and punctuation. This is the
/// first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the character stream into typed tokens.
/// - Validates numeric literals (fractions, exponents, exponent signs).
/// - Reports lexical errors with their absolute character position.
pub mod lexer;
/// The translator module reorders tokens into postfix commands.
///
/// The translator runs the shunting-yard algorithm over the token stream,
/// deciding for each identifier whether it names a function or a variable.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Emits function calls after their comma-separated arguments.
/// - Reports unmatched parentheses.
pub mod translator;
/// The evaluator module executes postfix commands.
///
/// The evaluator keeps a number stack, resolves variables and calls
/// functions from the function table.
///
/// # Responsibilities
/// - Pushes literals and variable values.
/// - Pops arguments in source order and invokes handlers.
/// - Reports unknown names, stack underflow and handler failures.
pub mod evaluator;
/// Pipeline orchestration for a single expression.
///
/// Ties the three stages together and threads each chunk of input through
/// them, then flushes them in order.
pub mod calculator;
/// Line interpreter with a persistent variable environment.
///
/// Handles comments and assignments and keeps the results of earlier lines
/// available to later ones.
pub mod core;
