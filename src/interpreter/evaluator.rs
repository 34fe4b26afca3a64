/// Core evaluation logic.
///
/// Contains the stack-based command evaluator and the variable environment
/// type.
pub mod core;

/// Function evaluation.
///
/// Handles function descriptors, the function table and the builtin
/// functions.
pub mod function;
