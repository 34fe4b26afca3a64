use crate::{
    error::InterpretError,
    interpreter::{
        calculator::Calculator,
        evaluator::{
            core::Variables,
            function::{builtin, core::Functions},
        },
    },
    util::line::{extract_variable, remove_comment},
};

/// Evaluates input lines against a persistent variable environment.
///
/// A line is either an expression (`2 + x`) or an assignment (`y = 2 + x`),
/// optionally followed by a `//` comment. Every line gets a fresh
/// [`Calculator`]; only the environment outlives it. An assignment is stored
/// only after the whole expression succeeded, so a failing line leaves the
/// environment as it was.
///
/// ## Usage
///
/// The environment passed to [`Interpreter::new`] is copied; the caller's map
/// is never modified.
///
/// ```
/// use calcflow::interpreter::{
///     core::Interpreter,
///     evaluator::{core::Variables, function::core::Functions},
/// };
///
/// let variables = Variables::new();
/// let mut interpreter = Interpreter::new(&variables, Functions::builtin());
///
/// interpreter.interpret("x = 5 + 12").unwrap();
/// interpreter.interpret("y = x + 23").unwrap();
/// assert_eq!(interpreter.interpret("z = y + 42"), Ok(82.0));
///
/// assert_eq!(interpreter.variables()["y"], 40.0);
/// assert!(variables.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter {
    variables: Variables,
    functions: Functions,
}

impl Interpreter {
    /// Creates an interpreter over a copy of `variables`.
    #[must_use]
    pub fn new(variables: &Variables, functions: Functions) -> Self {
        Self { variables: variables.clone(),
               functions }
    }

    /// Creates an interpreter with the builtin functions and constants.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self { variables: builtin::variables(),
               functions: Functions::builtin() }
    }

    /// Evaluates one line and returns its value.
    ///
    /// # Errors
    /// Returns [`InterpretError::NoCode`] for a line without expression or
    /// target, or [`InterpretError::Calculate`] if the expression fails.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn interpret(&mut self, input: &str) -> Result<f64, InterpretError> {
        let (variable, code) = extract_variable(remove_comment(input));
        if variable.is_none() && code.trim().is_empty() {
            return Err(InterpretError::NoCode);
        }

        let mut calculator = Calculator::new(&self.variables, &self.functions);
        calculator.calculate(code)?;
        let number = calculator.finalize()?;

        if let Some(name) = variable {
            tracing::debug!(name, number, "assigned variable");
            self.variables.insert(name.to_string(), number);
        }

        Ok(number)
    }

    /// Returns the current variable environment.
    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Returns the function table.
    #[must_use]
    pub const fn functions(&self) -> &Functions {
        &self.functions
    }
}
