use std::collections::HashSet;

use crate::{
    error::CalcError,
    interpreter::{
        evaluator::{
            core::{Evaluator, Variables},
            function::core::Functions,
        },
        lexer::Tokenizer,
        translator::Translator,
    },
};

/// Drives one expression through the tokenizer, translator and evaluator.
///
/// Each [`calculate`](Self::calculate) call pushes one chunk of source through
/// all three stages; whatever a stage cannot resolve yet stays buffered in
/// that stage. [`finalize`](Self::finalize) flushes the stages in order and
/// returns the result. Splitting the source into chunks never changes the
/// result.
///
/// One calculator evaluates one expression. After an error it is spent.
///
/// # Example
/// ```
/// use calcflow::interpreter::{
///     calculator::Calculator,
///     evaluator::function::{builtin, core::Functions},
/// };
///
/// let variables = builtin::variables();
/// let functions = Functions::builtin();
///
/// let mut calculator = Calculator::new(&variables, &functions);
/// calculator.calculate("2 + 3").unwrap();
/// calculator.calculate(" * 4").unwrap();
///
/// assert_eq!(calculator.finalize(), Ok(14.0));
/// ```
#[derive(Debug)]
pub struct Calculator<'a> {
    variables:      &'a Variables,
    functions:      &'a Functions,
    function_names: HashSet<String>,
    tokenizer:      Tokenizer,
    translator:     Translator,
    evaluator:      Evaluator,
}

impl<'a> Calculator<'a> {
    /// Creates a calculator reading from `variables` and calling into
    /// `functions`.
    #[must_use]
    pub fn new(variables: &'a Variables, functions: &'a Functions) -> Self {
        Self { variables,
               functions,
               function_names: functions.names(),
               tokenizer: Tokenizer::new(),
               translator: Translator::new(),
               evaluator: Evaluator::new() }
    }

    /// Feeds one chunk of source through the pipeline.
    ///
    /// # Errors
    /// Returns the error of the first stage that fails, tagged with that
    /// stage.
    pub fn calculate(&mut self, code: &str) -> Result<(), CalcError> {
        let tokens = self.tokenizer.feed(code).map_err(CalcError::Tokenize)?;
        let commands = self.translator
                           .translate(&tokens, &self.function_names)
                           .map_err(CalcError::Translate)?;
        self.evaluator
            .evaluate(&commands, self.variables, self.functions)
            .map_err(CalcError::Evaluate)
    }

    /// Flushes every stage and returns the value of the expression.
    ///
    /// # Errors
    /// Returns the error of the first stage that fails while flushing, or
    /// [`CalcError::FinalizeEvaluator`] if no value was produced.
    pub fn finalize(mut self) -> Result<f64, CalcError> {
        let tokens = self.tokenizer.finalize().map_err(CalcError::FinalizeTokenizer)?;
        let commands = self.translator
                           .translate(&tokens, &self.function_names)
                           .map_err(CalcError::Translate)?;
        self.evaluator
            .evaluate(&commands, self.variables, self.functions)
            .map_err(CalcError::Evaluate)?;

        let commands = self.translator.finalize().map_err(CalcError::FinalizeTranslator)?;
        self.evaluator
            .evaluate(&commands, self.variables, self.functions)
            .map_err(CalcError::Evaluate)?;

        self.evaluator.finalize().map_err(CalcError::FinalizeEvaluator)
    }
}
