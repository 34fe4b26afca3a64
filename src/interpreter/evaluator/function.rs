/// Reference function table.
///
/// The arithmetic operators and the common math functions every calculator
/// session starts with, plus the default constants.
pub mod builtin;

/// Function descriptors and the name-keyed function table.
pub mod core;
