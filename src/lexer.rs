use crate::error::LexerError;
use miette::{NamedSource, SourceSpan};
use std::sync::Arc;

/// Represents the different kinds of tokens that the lexer can produce.
/// Each token is a meaningful unit of the BEC language syntax.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    // == Special Tokens ==
    /// Represents the end of the input text.
    Eof,

    // == Literals ==
    /// A signed 64-bit integer literal, e.g. `42`, `-13`, `+7`.
    Number(i64),
    /// A string literal written `q(...)`. The associated `String` holds the
    /// characters between `q(` and the first `)`; there is no escaping.
    String(String),
    /// A name, used both for constants and for dictionary keys.
    /// Starts with an uppercase letter or `_`, continues with `[A-Z_0-9]`.
    Name(String),

    // == Keywords ==
    /// The `begin` keyword, opening a dictionary block.
    Begin,
    /// The `end` keyword, closing a dictionary block.
    End,
    /// The `is` keyword, declaring a top-level constant.
    Is,
    /// The `ord` built-in, usable inside constant expressions.
    Ord,

    // == Punctuation & Operators ==
    /// Assignment inside a dictionary: `:=`
    Assign,
    /// Semicolon: `;`
    Semicolon,
    /// Pipe: `|` (delimits a constant expression)
    Pipe,
    /// Plus: `+`
    Plus,
    /// Minus: `-`
    Minus,
    /// Asterisk: `*`
    Star,
    /// Left Parenthesis: `(`
    LParen,
    /// Right Parenthesis: `)`
    RParen,
}

impl TokenType {
    /// A short human-readable description, used in diagnostics to name the
    /// construct that was found.
    pub fn describe(&self) -> String {
        match self {
            TokenType::Eof => "end of input".to_string(),
            TokenType::Number(n) => format!("number '{n}'"),
            TokenType::String(_) => "a string literal".to_string(),
            TokenType::Name(name) => format!("name '{name}'"),
            TokenType::Begin => "'begin'".to_string(),
            TokenType::End => "'end'".to_string(),
            TokenType::Is => "'is'".to_string(),
            TokenType::Ord => "'ord'".to_string(),
            TokenType::Assign => "':='".to_string(),
            TokenType::Semicolon => "';'".to_string(),
            TokenType::Pipe => "'|'".to_string(),
            TokenType::Plus => "'+'".to_string(),
            TokenType::Minus => "'-'".to_string(),
            TokenType::Star => "'*'".to_string(),
            TokenType::LParen => "'('".to_string(),
            TokenType::RParen => "')'".to_string(),
        }
    }
}

/// A token with its type and byte position in the source text.
#[derive(Debug, Clone)]
pub struct Token {
    pub ttype: TokenType,
    pub pos_start: usize,
    pub pos_end: usize,
}

impl Token {
    pub fn new(ttype: TokenType, pos_start: usize, pos_end: usize) -> Token {
        Token {
            ttype,
            pos_start,
            pos_end,
        }
    }

    pub fn span(&self) -> SourceSpan {
        (self.pos_start, self.pos_end - self.pos_start).into()
    }
}

pub struct Lexer<'a> {
    source: Arc<NamedSource<String>>,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let source = Arc::new(NamedSource::new("input.bec", input.to_string()));
        Self::with_source(input, source)
    }

    /// Builds a lexer that reports errors against an already-named source.
    pub fn with_source(input: &'a str, source: Arc<NamedSource<String>>) -> Self {
        Self {
            source,
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    pub fn lex(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.ttype == TokenType::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Produces the next token, skipping any whitespace before it.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace();
        let start_pos = self.position;

        let ttype = if let Some(char) = self.advance() {
            match char {
                ';' => TokenType::Semicolon,
                '|' => TokenType::Pipe,
                '*' => TokenType::Star,
                '(' => TokenType::LParen,
                ')' => TokenType::RParen,

                ':' => {
                    if self.peek() == Some(&'=') {
                        self.advance();
                        TokenType::Assign
                    } else {
                        return Err(self.err_unexpected(':', start_pos));
                    }
                }
                // A sign immediately followed by a digit belongs to the
                // number literal; otherwise it is an operator.
                '+' | '-' => {
                    if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                        self.read_number(char, start_pos)?
                    } else if char == '+' {
                        TokenType::Plus
                    } else {
                        TokenType::Minus
                    }
                }
                'q' if self.peek() == Some(&'(') => {
                    self.advance(); // Consume the '('
                    self.read_string(start_pos)?
                }
                c if c.is_ascii_digit() => self.read_number(c, start_pos)?,
                c if c.is_ascii_uppercase() || c == '_' => self.read_name(c),
                c if c.is_ascii_lowercase() => self.read_keyword(c, start_pos)?,

                c => return Err(self.err_unexpected(c, start_pos)),
            }
        } else {
            TokenType::Eof
        };

        Ok(Token::new(ttype, start_pos, self.position))
    }

    fn advance(&mut self) -> Option<char> {
        let char = self.chars.next();
        if let Some(c) = char {
            self.position += c.len_utf8();
        }
        char
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_string(&mut self, start_pos: usize) -> Result<TokenType, LexerError> {
        let mut value = String::new();
        while let Some(c) = self.advance() {
            // The first ')' always closes the literal; there is no escaping.
            if c == ')' {
                return Ok(TokenType::String(value));
            }
            value.push(c);
        }
        Err(LexerError::UnterminatedString {
            src: (*self.source).clone(),
            span: (start_pos, 2).into(),
        })
    }

    fn read_name(&mut self, first_char: char) -> TokenType {
        let mut name = String::new();
        name.push(first_char);

        while let Some(c) = self.peek() {
            if c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_' {
                name.push(self.advance().unwrap());
            } else {
                break;
            }
        }

        TokenType::Name(name)
    }

    fn read_keyword(&mut self, first_char: char, start_pos: usize) -> Result<TokenType, LexerError> {
        let mut word = String::new();
        word.push(first_char);

        while let Some(c) = self.peek() {
            if c.is_ascii_lowercase() {
                word.push(self.advance().unwrap());
            } else {
                break;
            }
        }

        match word.as_str() {
            "begin" => Ok(TokenType::Begin),
            "end" => Ok(TokenType::End),
            "is" => Ok(TokenType::Is),
            "ord" => Ok(TokenType::Ord),
            _ => Err(self.err_unexpected(first_char, start_pos)),
        }
    }

    fn read_number(&mut self, first_char: char, start_pos: usize) -> Result<TokenType, LexerError> {
        let mut number_str = String::new();
        number_str.push(first_char);

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                number_str.push(self.advance().unwrap());
            } else {
                break;
            }
        }

        match number_str.parse::<i64>() {
            Ok(num) => Ok(TokenType::Number(num)),
            Err(_) => Err(LexerError::NumberOutOfRange {
                literal: number_str,
                src: (*self.source).clone(),
                span: (start_pos, self.position - start_pos).into(),
            }),
        }
    }

    fn err_unexpected(&self, found: char, start_pos: usize) -> LexerError {
        LexerError::UnexpectedCharacter {
            found,
            src: (*self.source).clone(),
            span: (start_pos, found.len_utf8()).into(),
        }
    }
}
