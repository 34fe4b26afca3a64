use std::num::ParseFloatError;

use thiserror::Error;

use crate::interpreter::{evaluator::function::core::FunctionError, translator::Command};

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while evaluating commands.
///
/// Command indices are relative to the slice passed to the `evaluate` call
/// that failed.
pub enum EvalError {
    /// The operand of a push-number command is not a valid float literal.
    #[error("incorrect number for command {command} with number #{index}: {source}")]
    InvalidNumber {
        /// The offending command.
        command: Command,
        /// Index of the command within the evaluated slice.
        index:   usize,
        /// Why the literal was rejected.
        source:  ParseFloatError,
    },
    /// A variable missing from the environment.
    #[error("unknown variable in command {command} with number #{index}")]
    UnknownVariable {
        /// The offending command.
        command: Command,
        /// Index of the command within the evaluated slice.
        index:   usize,
    },
    /// A function missing from the function table.
    #[error("unknown function in command {command} with number #{index}")]
    UnknownFunction {
        /// The offending command.
        command: Command,
        /// Index of the command within the evaluated slice.
        index:   usize,
    },
    /// The number stack ran out before all arguments were collected.
    #[error("number stack is empty for argument #{argument} in command {command} with number \
             #{index}")]
    MissingArgument {
        /// Index of the argument being popped, counting from the first pop.
        argument: usize,
        /// The offending command.
        command:  Command,
        /// Index of the command within the evaluated slice.
        index:    usize,
    },
    /// The function handler reported a failure.
    #[error("unable to call the function from command {command} with number #{index}: {source}")]
    FunctionFailed {
        /// The offending command.
        command: Command,
        /// Index of the command within the evaluated slice.
        index:   usize,
        /// The handler's error.
        source:  FunctionError,
    },
    /// Nothing left on the number stack when the result was requested.
    #[error("number stack is empty")]
    EmptyStack,
}
