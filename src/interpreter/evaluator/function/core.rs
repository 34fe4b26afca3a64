use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

use thiserror::Error;

use crate::interpreter::evaluator::function::builtin;

/// Failure reported by a function handler.
///
/// # Example
/// ```
/// use calcflow::interpreter::evaluator::function::core::FunctionError;
///
/// let error = FunctionError::new("division by zero");
/// assert_eq!(error.to_string(), "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FunctionError {
    message: String,
}

impl FunctionError {
    /// Creates an error with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Result type returned by function handlers.
pub type HandlerResult = Result<f64, FunctionError>;

/// Type alias for function handlers.
///
/// A handler receives exactly `arity` arguments, in the left-to-right order
/// they were written in the expression.
pub type Handler = Arc<dyn Fn(&[f64]) -> HandlerResult + Send + Sync>;

/// A callable with a fixed number of arguments.
#[derive(Clone)]
pub struct Function {
    /// Number of values the function pops off the number stack.
    pub arity:   usize,
    /// The implementation.
    pub handler: Handler,
}

impl Function {
    /// Wraps a fallible closure.
    pub fn new<F>(arity: usize, handler: F) -> Self
        where F: Fn(&[f64]) -> HandlerResult + Send + Sync + 'static
    {
        Self { arity,
               handler: Arc::new(handler) }
    }

    /// Wraps a closure that cannot fail.
    pub fn infallible<F>(arity: usize, handler: F) -> Self
        where F: Fn(&[f64]) -> f64 + Send + Sync + 'static
    {
        Self::new(arity, move |args| Ok(handler(args)))
    }

    /// Invokes the handler.
    ///
    /// # Errors
    /// Propagates the handler's [`FunctionError`].
    pub fn call(&self, args: &[f64]) -> HandlerResult {
        (self.handler)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Name-keyed function table shared by the translator and the evaluator.
///
/// Operators are ordinary entries keyed by their symbol (`"+"`, `"^"`, ...).
/// Cloning is cheap: handlers are reference-counted.
///
/// # Example
/// ```
/// use calcflow::interpreter::evaluator::function::core::{Function, Functions};
///
/// let mut functions = Functions::new();
/// functions.insert("sub", Function::infallible(2, |args| args[0] - args[1]));
///
/// assert!(functions.names().contains("sub"));
/// assert_eq!(functions.get("sub").unwrap().call(&[5.0, 2.0]), Ok(3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Functions {
    table: HashMap<String, Function>,
}

impl Functions {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the reference table: the six arithmetic operators and the
    /// common math functions.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::functions()
    }

    /// Adds or replaces a function, returning the previous entry.
    pub fn insert(&mut self, name: impl Into<String>, function: Function) -> Option<Function> {
        self.table.insert(name.into(), function)
    }

    /// Looks a function up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.table.get(name)
    }

    /// Returns the set of names, as needed by the translator.
    #[must_use]
    pub fn names(&self) -> HashSet<String> {
        self.table.keys().cloned().collect()
    }

    /// Number of functions in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Tests whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Function)> for Functions {
    fn from_iter<I: IntoIterator<Item = (S, Function)>>(iter: I) -> Self {
        Self { table: iter.into_iter()
                          .map(|(name, function)| (name.into(), function))
                          .collect() }
    }
}
