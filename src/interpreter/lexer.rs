use std::fmt;

use crate::error::{LexError, Position};

/// Classifies a lexical token.
///
/// The operator kinds double as function names: the translator emits them as
/// `CallFunction` commands with the operator symbol as operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Exponentiation,
    /// Numeric literal tokens, such as `42`, `.5`, `2.1e-10`.
    Number,
    /// Identifier tokens; variable or function names such as `x` or `atan2`.
    Identifier,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
}

impl TokenKind {
    /// Returns the kind of a single-character operator or punctuation symbol.
    ///
    /// # Example
    /// ```
    /// use calcflow::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_symbol('^'), Some(TokenKind::Exponentiation));
    /// assert_eq!(TokenKind::from_symbol('!'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Asterisk),
            '/' => Some(Self::Slash),
            '%' => Some(Self::Percent),
            '^' => Some(Self::Exponentiation),
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            ',' => Some(Self::Comma),
            _ => None,
        }
    }

    /// Tests whether the kind is one of the binary operators.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Asterisk
                 | Self::Slash
                 | Self::Percent
                 | Self::Exponentiation)
    }

    /// Tests whether the kind is a parenthesis of either side.
    #[must_use]
    pub const fn is_parenthesis(self) -> bool {
        matches!(self, Self::LeftParen | Self::RightParen)
    }

    /// Binding strength of an operator; higher binds tighter.
    ///
    /// Non-operators have precedence `0`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Asterisk | Self::Slash | Self::Percent => 2,
            Self::Exponentiation => 3,
            _ => 0,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Asterisk => "asterisk",
            Self::Slash => "slash",
            Self::Percent => "percent",
            Self::Exponentiation => "exponentiation",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::LeftParen => "left parenthesis",
            Self::RightParen => "right parenthesis",
            Self::Comma => "comma",
        };
        f.write_str(name)
    }
}

/// A lexical token: its kind and the literal source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What kind of token this is.
    pub kind:  TokenKind,
    /// The literal text: operator symbol, numeric literal or identifier name.
    pub value: String,
}

impl Token {
    /// Creates a token from its kind and text.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self { kind,
               value: value.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)
    }
}

/// Lexical sub-state of a partially read token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Default,
    IntegerPart,
    FractionalPart,
    Exponent,
    Identifier,
}

/// Streaming tokenizer.
///
/// Input can be fed in any number of chunks; the tokenizer keeps only the
/// partial token under construction between calls. Tokens completed inside a
/// [`feed`](Self::feed) call are returned by that call, and
/// [`finalize`](Self::finalize) flushes whatever is still buffered.
///
/// Feeding `"23"` then `"test"` gives the same tokens as feeding `"23test"`
/// at once, and feeding `"test"` then `"23"` gives the single identifier
/// `test23`.
///
/// Any error leaves the tokenizer spent; it must not be fed again.
///
/// # Example
/// ```
/// use calcflow::interpreter::lexer::{Token, TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// let mut tokens = tokenizer.feed("2.5e").unwrap();
/// tokens.extend(tokenizer.feed("-3*x").unwrap());
/// tokens.extend(tokenizer.finalize().unwrap());
///
/// assert_eq!(tokens,
///            vec![Token::new(TokenKind::Number, "2.5e-3"),
///                 Token::new(TokenKind::Asterisk, "*"),
///                 Token::new(TokenKind::Identifier, "x")]);
/// ```
#[derive(Debug, Default)]
pub struct Tokenizer {
    state:  State,
    buffer: String,
    offset: usize,
}

impl Tokenizer {
    /// Creates a tokenizer with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes one chunk of input.
    ///
    /// # Errors
    /// Returns a [`LexError`] for an unknown symbol, a misplaced fractional
    /// point, or a numeric literal that a boundary character ends while it is
    /// still malformed.
    pub fn feed(&mut self, chunk: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        for symbol in chunk.chars() {
            let position = Position::Offset(self.offset);
            self.offset += 1;

            if symbol.is_ascii_digit() {
                if self.state == State::Default {
                    self.state = State::IntegerPart;
                }
                self.buffer.push(symbol);
            } else if symbol.is_alphabetic() || symbol == '_' {
                self.push_letter(symbol, position, &mut tokens)?;
            } else if symbol.is_whitespace() {
                self.flush(position, &mut tokens)?;
                self.state = State::Default;
            } else if symbol == '+' || symbol == '-' {
                if self.state == State::Exponent && self.is_exponent_empty() {
                    self.buffer.push(symbol);
                    continue;
                }
                self.push_symbol(symbol, position, &mut tokens)?;
            } else if "*/%^(),".contains(symbol) {
                self.push_symbol(symbol, position, &mut tokens)?;
            } else if symbol == '.' {
                match self.state {
                    State::Default | State::IntegerPart => {
                        self.state = State::FractionalPart;
                        self.buffer.push(symbol);
                    },
                    _ => return Err(LexError::UnexpectedFractionalPoint { position }),
                }
            } else {
                return Err(LexError::UnknownSymbol { symbol, position });
            }
        }

        Ok(tokens)
    }

    /// Flushes the partial token, as if a boundary character followed the
    /// last chunk.
    ///
    /// # Errors
    /// Returns a [`LexError`] positioned at [`Position::EndOfInput`] if the
    /// buffered numeric literal is malformed.
    pub fn finalize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        self.flush(Position::EndOfInput, &mut tokens)?;
        Ok(tokens)
    }

    fn push_letter(&mut self,
                   symbol: char,
                   position: Position,
                   tokens: &mut Vec<Token>)
                   -> Result<(), LexError> {
        match self.state {
            State::IntegerPart | State::FractionalPart if matches!(symbol, 'e' | 'E') => {
                self.state = State::Exponent;
                self.buffer.push(symbol);
                return Ok(());
            },
            State::Identifier => {},
            _ => self.flush(position, tokens)?,
        }

        self.state = State::Identifier;
        self.buffer.push(symbol);
        Ok(())
    }

    fn push_symbol(&mut self,
                   symbol: char,
                   position: Position,
                   tokens: &mut Vec<Token>)
                   -> Result<(), LexError> {
        self.flush(position, tokens)?;

        if let Some(kind) = TokenKind::from_symbol(symbol) {
            tokens.push(Token::new(kind, symbol));
        }
        self.state = State::Default;
        Ok(())
    }

    /// Emits the buffered number or identifier, validating numeric literals.
    fn flush(&mut self, position: Position, tokens: &mut Vec<Token>) -> Result<(), LexError> {
        let kind = match self.state {
            State::Default => return Ok(()),
            State::IntegerPart | State::FractionalPart => {
                if self.buffer == "." {
                    return Err(LexError::EmptyIntegerAndFractionalParts { position });
                }
                TokenKind::Number
            },
            State::Exponent => {
                if self.is_exponent_empty() {
                    return Err(LexError::EmptyExponentPart { position });
                }
                TokenKind::Number
            },
            State::Identifier => TokenKind::Identifier,
        };

        tokens.push(Token::new(kind, std::mem::take(&mut self.buffer)));
        self.state = State::Default;
        Ok(())
    }

    fn is_exponent_empty(&self) -> bool {
        self.buffer.ends_with(['e', 'E'])
    }
}
