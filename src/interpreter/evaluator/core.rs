use std::collections::HashMap;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::function::core::Functions,
        translator::{Command, CommandKind},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Variable environment: a mapping from names to values.
pub type Variables = HashMap<String, f64>;

/// Stack-based evaluator of postfix commands.
///
/// The number stack is the only state carried between
/// [`evaluate`](Self::evaluate) calls, so a command sequence can be split
/// across any number of calls. [`finalize`](Self::finalize) pops the result.
///
/// # Example
/// ```
/// use calcflow::interpreter::{
///     evaluator::{core::{Evaluator, Variables}, function::core::Functions},
///     translator::{Command, CommandKind},
/// };
///
/// let variables = Variables::from([("x".to_string(), 40.0)]);
/// let functions = Functions::builtin();
///
/// let mut evaluator = Evaluator::new();
/// evaluator.evaluate(&[Command::new(CommandKind::PushVariable, "x")],
///                    &variables,
///                    &functions)
///          .unwrap();
/// evaluator.evaluate(&[Command::new(CommandKind::PushNumber, "2"),
///                      Command::new(CommandKind::CallFunction, "+")],
///                    &variables,
///                    &functions)
///          .unwrap();
///
/// assert_eq!(evaluator.finalize(), Ok(42.0));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<f64>,
}

impl Evaluator {
    /// Creates an evaluator with an empty number stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a batch of commands against the number stack.
    ///
    /// Error indices are relative to `commands`.
    ///
    /// # Errors
    /// Fails on a malformed number literal, an unknown variable or function,
    /// a stack too short for a function's arity, or a failing handler.
    pub fn evaluate(&mut self,
                    commands: &[Command],
                    variables: &Variables,
                    functions: &Functions)
                    -> EvalResult<()> {
        for (index, command) in commands.iter().enumerate() {
            let number = match command.kind {
                CommandKind::PushNumber => {
                    command.operand
                           .parse::<f64>()
                           .map_err(|source| EvalError::InvalidNumber { command: command.clone(),
                                                                        index,
                                                                        source })?
                },
                CommandKind::PushVariable => {
                    *variables.get(&command.operand)
                              .ok_or_else(|| EvalError::UnknownVariable { command:
                                                                              command.clone(),
                                                                          index })?
                },
                CommandKind::CallFunction => self.call_function(command, index, functions)?,
            };

            self.stack.push(number);
        }

        Ok(())
    }

    /// Pops the overall result.
    ///
    /// # Errors
    /// Returns [`EvalError::EmptyStack`] if nothing was computed, which is
    /// also what an empty expression produces.
    pub fn finalize(mut self) -> EvalResult<f64> {
        self.stack.pop().ok_or(EvalError::EmptyStack)
    }

    /// Collects the arguments of a function call and invokes its handler.
    fn call_function(&mut self,
                     command: &Command,
                     index: usize,
                     functions: &Functions)
                     -> EvalResult<f64> {
        let function = functions.get(&command.operand)
                                .ok_or_else(|| EvalError::UnknownFunction { command:
                                                                                command.clone(),
                                                                            index })?;

        let mut args = Vec::with_capacity(function.arity);
        for argument in 0..function.arity {
            let number =
                self.stack
                    .pop()
                    .ok_or_else(|| EvalError::MissingArgument { argument,
                                                                command: command.clone(),
                                                                index })?;
            args.push(number);
        }
        // Popped right to left; handlers take arguments in source order.
        args.reverse();

        function.call(&args)
                .map_err(|source| EvalError::FunctionFailed { command: command.clone(),
                                                              index,
                                                              source })
    }
}
