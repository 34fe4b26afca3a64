use std::{collections::HashSet, fmt};

use crate::{
    error::SyntaxError,
    interpreter::lexer::{Token, TokenKind},
};

/// What a postfix command does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Parse the operand as a float literal and push it.
    PushNumber,
    /// Look the operand up in the variable environment and push its value.
    PushVariable,
    /// Pop the function's arguments, call it and push the result.
    CallFunction,
}

/// A single postfix (reverse-Polish) instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
    /// What the command does.
    pub kind:    CommandKind,
    /// Numeric literal text, variable name, or function/operator name.
    pub operand: String,
}

impl Command {
    /// Creates a command from its kind and operand.
    #[must_use]
    pub fn new(kind: CommandKind, operand: impl Into<String>) -> Self {
        Self { kind,
               operand: operand.into() }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            CommandKind::PushNumber => "push number",
            CommandKind::PushVariable => "push variable",
            CommandKind::CallFunction => "call function",
        };
        write!(f, "{kind} {:?}", self.operand)
    }
}

/// Decision taken for the top of the stack while unwinding it.
#[derive(Debug)]
enum Unwind {
    /// Pop the token and emit it as a function call, then look again.
    Continue,
    /// Pop the token and drop it, then stop. On an empty stack just stop.
    StopConsuming,
    /// Leave the token on the stack and stop.
    StopAndRestore,
    /// Abort the translation.
    Fail(SyntaxError),
}

/// Streaming shunting-yard translator from infix tokens to postfix commands.
///
/// The only state kept between calls is the stack of pending operators,
/// function names and left parentheses, plus the count of tokens seen so far
/// (used to index errors). Commands are returned as soon as they are known.
///
/// All operators are left-associative, `^` included: `2^3^2` is `(2^3)^2`.
///
/// # Example
/// ```
/// use std::collections::HashSet;
///
/// use calcflow::interpreter::{
///     lexer::{Token, TokenKind},
///     translator::{Command, CommandKind, Translator},
/// };
///
/// let names = HashSet::from(["max".to_string()]);
/// let tokens = [Token::new(TokenKind::Identifier, "max"),
///               Token::new(TokenKind::LeftParen, "("),
///               Token::new(TokenKind::Identifier, "x"),
///               Token::new(TokenKind::Comma, ","),
///               Token::new(TokenKind::Number, "2"),
///               Token::new(TokenKind::RightParen, ")")];
///
/// let mut translator = Translator::new();
/// let mut commands = translator.translate(&tokens, &names).unwrap();
/// commands.extend(translator.finalize().unwrap());
///
/// assert_eq!(commands,
///            vec![Command::new(CommandKind::PushVariable, "x"),
///                 Command::new(CommandKind::PushNumber, "2"),
///                 Command::new(CommandKind::CallFunction, "max")]);
/// ```
#[derive(Debug, Default)]
pub struct Translator {
    stack: Vec<Token>,
    seen:  usize,
}

impl Translator {
    /// Creates a translator with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates one batch of tokens.
    ///
    /// Identifiers found in `function_names` are treated as function calls,
    /// all others as variable references.
    ///
    /// # Errors
    /// Returns [`SyntaxError::MissingOpeningParenthesis`] when a `)` or `,`
    /// has no open `(` to pair with.
    pub fn translate(&mut self,
                     tokens: &[Token],
                     function_names: &HashSet<String>)
                     -> Result<Vec<Command>, SyntaxError> {
        let mut commands = Vec::new();

        for token in tokens {
            let index = self.seen;
            self.seen += 1;

            match token.kind {
                TokenKind::Number => {
                    commands.push(Command::new(CommandKind::PushNumber, &token.value));
                },
                TokenKind::Identifier => {
                    if function_names.contains(&token.value) {
                        self.stack.push(token.clone());
                    } else {
                        commands.push(Command::new(CommandKind::PushVariable, &token.value));
                    }
                },
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Exponentiation => {
                    let precedence = token.kind.precedence();
                    self.unwind(&mut commands, |top| match top {
                            None => Unwind::StopConsuming,
                            Some(top) if !top.kind.is_operator() => Unwind::StopAndRestore,
                            Some(top) if top.kind.precedence() < precedence => {
                                Unwind::StopAndRestore
                            },
                            Some(_) => Unwind::Continue,
                        })?;
                    self.stack.push(token.clone());
                },
                TokenKind::LeftParen => self.stack.push(token.clone()),
                TokenKind::RightParen => {
                    self.unwind(&mut commands, |top| match top {
                            None => Unwind::Fail(missing_opening(token, index)),
                            Some(top) if top.kind == TokenKind::LeftParen => Unwind::StopConsuming,
                            Some(_) => Unwind::Continue,
                        })?;
                    self.close_function_call(&mut commands);
                },
                TokenKind::Comma => {
                    self.unwind(&mut commands, |top| match top {
                            None => Unwind::Fail(missing_opening(token, index)),
                            Some(top) if !top.kind.is_operator() => Unwind::StopAndRestore,
                            Some(_) => Unwind::Continue,
                        })?;
                },
            }
        }

        Ok(commands)
    }

    /// Emits every pending operator and function call.
    ///
    /// # Errors
    /// Returns [`SyntaxError::MissingPair`] if a parenthesis is still open.
    pub fn finalize(mut self) -> Result<Vec<Command>, SyntaxError> {
        let mut commands = Vec::new();
        self.unwind(&mut commands, |top| match top {
                None => Unwind::StopConsuming,
                Some(top) if top.kind.is_parenthesis() => {
                    Unwind::Fail(SyntaxError::MissingPair { token: top.clone() })
                },
                Some(_) => Unwind::Continue,
            })?;
        Ok(commands)
    }

    /// Pops the stack while `check` allows it, emitting a `CallFunction` for
    /// each popped token.
    fn unwind<F>(&mut self, commands: &mut Vec<Command>, mut check: F) -> Result<(), SyntaxError>
        where F: FnMut(Option<&Token>) -> Unwind
    {
        loop {
            match check(self.stack.last()) {
                Unwind::Continue => {
                    if let Some(top) = self.stack.pop() {
                        commands.push(Command::new(CommandKind::CallFunction, top.value));
                    }
                },
                Unwind::StopConsuming => {
                    self.stack.pop();
                    return Ok(());
                },
                Unwind::StopAndRestore => return Ok(()),
                Unwind::Fail(error) => return Err(error),
            }
        }
    }

    /// Emits the function whose argument list a `)` just closed.
    fn close_function_call(&mut self, commands: &mut Vec<Command>) {
        if self.stack.last().is_some_and(|top| top.kind == TokenKind::Identifier)
           && let Some(name) = self.stack.pop()
        {
            commands.push(Command::new(CommandKind::CallFunction, name.value));
        }
    }
}

fn missing_opening(token: &Token, index: usize) -> SyntaxError {
    SyntaxError::MissingOpeningParenthesis { token: token.clone(),
                                             index }
}
