use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::utils;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum BecError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Semantic(#[from] SemanticError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Type(#[from] TypeError),
}

impl BecError {
    /// Byte span of the primary label in the source text.
    pub fn span(&self) -> SourceSpan {
        match self {
            BecError::Lexer(e) => e.span(),
            BecError::Parser(e) => e.span(),
            BecError::Semantic(e) => e.span(),
            BecError::Type(e) => e.span(),
        }
    }

    /// One-based line and column of the primary label, for callers that
    /// report positions as plain text rather than through miette.
    pub fn line_column(&self) -> (usize, usize) {
        let offset = self.span().offset();
        let text = match self {
            BecError::Lexer(e) => e.source_text(),
            BecError::Parser(e) => e.source_text(),
            BecError::Semantic(e) => e.source_text(),
            BecError::Type(e) => e.source_text(),
        };
        utils::line_column(text, offset)
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("Lexer Error")]
pub enum LexerError {
    #[error("Unexpected character '{found}'")]
    #[diagnostic(
        code(lexer::unexpected_character),
        help("Names use capital letters, digits and underscores; the keywords are `begin`, `end`, `is` and `ord`.")
    )]
    UnexpectedCharacter {
        #[source_code]
        src: NamedSource<String>,
        #[label("This character is not part of the language")]
        span: SourceSpan,
        found: char,
    },

    #[error("Unterminated string literal")]
    #[diagnostic(
        code(lexer::unterminated_string),
        help("A string literal starts with `q(` and runs to the next closing parenthesis.")
    )]
    UnterminatedString {
        #[source_code]
        src: NamedSource<String>,
        #[label("This string is never closed")]
        span: SourceSpan,
    },

    #[error("Number out of range")]
    #[diagnostic(
        code(lexer::number_out_of_range),
        help("Numbers must fit in a signed 64-bit integer.")
    )]
    NumberOutOfRange {
        #[source_code]
        src: NamedSource<String>,
        #[label("'{literal}' does not fit in 64 bits")]
        span: SourceSpan,
        literal: String,
    },
}

impl LexerError {
    pub fn span(&self) -> SourceSpan {
        match self {
            LexerError::UnexpectedCharacter { span, .. }
            | LexerError::UnterminatedString { span, .. }
            | LexerError::NumberOutOfRange { span, .. } => *span,
        }
    }

    fn source_text(&self) -> &str {
        match self {
            LexerError::UnexpectedCharacter { src, .. }
            | LexerError::UnterminatedString { src, .. }
            | LexerError::NumberOutOfRange { src, .. } => src.inner().as_str(),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("Parser Error")]
pub enum ParserError {
    #[error("Unexpected token")]
    #[diagnostic(
        code(parser::unexpected_token),
        help("The parser found a token it did not expect in this position.")
    )]
    UnexpectedToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("Expected {expected}, but found {found}")]
        span: SourceSpan,
        expected: String,
        found: String,
    },

    #[error("Unexpected end of input")]
    #[diagnostic(
        code(parser::unexpected_eof),
        help("The input ended while the parser still expected more tokens.")
    )]
    UnexpectedEof {
        #[source_code]
        src: NamedSource<String>,
        #[label("Expected {expected}, but the input ended here")]
        span: SourceSpan,
        expected: String,
    },

    #[error("Trailing input after the document")]
    #[diagnostic(
        code(parser::trailing_input),
        help("A document is a list of constant declarations followed by a single `begin ... end` dictionary.")
    )]
    TrailingInput {
        #[source_code]
        src: NamedSource<String>,
        #[label("Expected end of input, but found {found}")]
        span: SourceSpan,
        found: String,
    },
}

impl ParserError {
    pub fn span(&self) -> SourceSpan {
        match self {
            ParserError::UnexpectedToken { span, .. }
            | ParserError::UnexpectedEof { span, .. }
            | ParserError::TrailingInput { span, .. } => *span,
        }
    }

    fn source_text(&self) -> &str {
        match self {
            ParserError::UnexpectedToken { src, .. }
            | ParserError::UnexpectedEof { src, .. }
            | ParserError::TrailingInput { src, .. } => src.inner().as_str(),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("Semantic Error")]
pub enum SemanticError {
    #[error("Undefined constant '{name}'")]
    #[diagnostic(
        code(semantic::undefined_constant),
        help("Constants must be declared ahead of their first use, e.g. `NAME is 10`.")
    )]
    UndefinedConstant {
        #[source_code]
        src: NamedSource<String>,
        #[label("'{name}' has not been declared")]
        span: SourceSpan,
        name: String,
    },

    #[error("Constant '{name}' is already declared")]
    #[diagnostic(
        code(semantic::duplicate_constant),
        help("A constant is bound once; pick a different name for the second declaration.")
    )]
    DuplicateConstant {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("redeclared here")]
        span: SourceSpan,
        name: String,
    },

    #[error("Duplicate key '{key}'")]
    #[diagnostic(
        code(semantic::duplicate_key),
        help("Each key may appear at most once per dictionary.")
    )]
    DuplicateKey {
        #[source_code]
        src: NamedSource<String>,
        #[label("first set here")]
        first_span: SourceSpan,
        #[label("set again here")]
        span: SourceSpan,
        key: String,
    },
}

impl SemanticError {
    /// For the duplicate variants this is the second occurrence, which is
    /// where the error is reported.
    pub fn span(&self) -> SourceSpan {
        match self {
            SemanticError::UndefinedConstant { span, .. }
            | SemanticError::DuplicateConstant { span, .. }
            | SemanticError::DuplicateKey { span, .. } => *span,
        }
    }

    fn source_text(&self) -> &str {
        match self {
            SemanticError::UndefinedConstant { src, .. }
            | SemanticError::DuplicateConstant { src, .. }
            | SemanticError::DuplicateKey { src, .. } => src.inner().as_str(),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("Type Error")]
pub enum TypeError {
    #[error("Type mismatch in constant expression")]
    #[diagnostic(
        code(types::non_numeric_operand),
        help("Arithmetic works on numbers; use `ord(...)` to turn a string into one.")
    )]
    NonNumericOperand {
        #[source_code]
        src: NamedSource<String>,
        #[label("Expected a number, but this is {found}")]
        span: SourceSpan,
        found: String,
    },

    #[error("`ord` expects a string")]
    #[diagnostic(
        code(types::ord_argument),
        help("`ord(...)` takes a string and yields the code point of its first character.")
    )]
    OrdArgument {
        #[source_code]
        src: NamedSource<String>,
        #[label("This is {found}")]
        span: SourceSpan,
        found: String,
    },

    #[error("`ord` of an empty string")]
    #[diagnostic(
        code(types::ord_empty_string),
        help("`ord(...)` needs at least one character to take a code point from.")
    )]
    OrdEmptyString {
        #[source_code]
        src: NamedSource<String>,
        #[label("This string is empty")]
        span: SourceSpan,
    },

    #[error("Arithmetic overflow")]
    #[diagnostic(
        code(types::overflow),
        help("Intermediate results must fit in a signed 64-bit integer.")
    )]
    Overflow {
        #[source_code]
        src: NamedSource<String>,
        #[label("This expression overflows a signed 64-bit integer")]
        span: SourceSpan,
    },
}

impl TypeError {
    pub fn span(&self) -> SourceSpan {
        match self {
            TypeError::NonNumericOperand { span, .. }
            | TypeError::OrdArgument { span, .. }
            | TypeError::OrdEmptyString { span, .. }
            | TypeError::Overflow { span, .. } => *span,
        }
    }

    fn source_text(&self) -> &str {
        match self {
            TypeError::NonNumericOperand { src, .. }
            | TypeError::OrdArgument { src, .. }
            | TypeError::OrdEmptyString { src, .. }
            | TypeError::Overflow { src, .. } => src.inner().as_str(),
        }
    }
}
