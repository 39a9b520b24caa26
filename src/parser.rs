use std::collections::HashMap;
use std::sync::Arc;

use miette::{NamedSource, SourceSpan};

use crate::ast::{BecDocument, BecValue, BinOp, Dictionary, Expr};
use crate::error::{BecError, ParserError, SemanticError};
use crate::eval;
use crate::lexer::{Lexer, Token, TokenType};
use crate::symbols::SymbolTable;

/// A recursive descent parser for the BEC language, built according to the
/// EBNF grammar.
///
/// Constants are resolved while parsing. Every name reference and every
/// constant expression is replaced by its value on the spot, so a
/// successfully parsed document holds plain values only.
#[derive(Debug)]
pub struct Parser<'a> {
    source: Arc<NamedSource<String>>,
    tokens: Vec<Token>,
    position: usize,
    symbols: SymbolTable,
    source_text: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(source_text: &'a str) -> Result<Self, BecError> {
        Self::new_with_name(source_text, "source.bec".to_string())
    }

    pub fn new_with_name(source_text: &'a str, name: String) -> Result<Self, BecError> {
        let source = Arc::new(NamedSource::new(name, source_text.to_string()));
        let tokens = Lexer::with_source(source_text, Arc::clone(&source)).lex()?;

        Ok(Self {
            source,
            tokens,
            position: 0,
            symbols: SymbolTable::new(),
            source_text,
        })
    }

    /// The constants collected during `parse_document`.
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    // === Main Parsing Methods ===

    /// Document ::= { ConstantDecl } [ Dictionary ]
    pub fn parse_document(&mut self) -> Result<BecDocument, BecError> {
        while matches!(self.current_token().ttype, TokenType::Name(_))
            && self.peek_is(TokenType::Is)
        {
            self.parse_constant_decl()?;
        }

        let root = if self.check(TokenType::Begin) {
            self.parse_dictionary()?
        } else if self.check(TokenType::Eof) {
            // A document without a dictionary translates to `{}`.
            Dictionary::new()
        } else {
            return self.err_expected("'begin'");
        };

        if !self.check(TokenType::Eof) {
            let token = self.current_token();
            return Err(ParserError::TrailingInput {
                src: (*self.source).clone(),
                span: token.span(),
                found: token.ttype.describe(),
            }
            .into());
        }

        Ok(BecDocument { root })
    }

    /// ConstantDecl ::= Name "is" Value
    fn parse_constant_decl(&mut self) -> Result<(), BecError> {
        let (name, name_token) = self.expect_name("a constant name")?;

        // A redeclared name is reported at the name itself, before the
        // value is even looked at.
        if let Some(previous) = self.symbols.entry(&name) {
            return Err(SemanticError::DuplicateConstant {
                src: (*self.source).clone(),
                first_span: previous.span,
                span: name_token.span(),
                name,
            }
            .into());
        }

        self.expect(TokenType::Is)?;
        let value = self.parse_value()?;
        self.symbols.declare(name, value, name_token.span());
        Ok(())
    }

    /// Dictionary ::= "begin" { Entry } "end"
    /// Entry      ::= Name ":=" Value ";"
    fn parse_dictionary(&mut self) -> Result<Dictionary, BecError> {
        self.expect(TokenType::Begin)?;

        let mut dict = Dictionary::new();
        let mut key_spans: HashMap<String, SourceSpan> = HashMap::new();

        while !self.check(TokenType::End) {
            let (key, key_token) = self.expect_name("a key or 'end'")?;

            if let Some(first_span) = key_spans.get(&key) {
                return Err(SemanticError::DuplicateKey {
                    src: (*self.source).clone(),
                    first_span: *first_span,
                    span: key_token.span(),
                    key,
                }
                .into());
            }

            self.expect(TokenType::Assign)?;
            let value = self.parse_value()?;
            self.expect(TokenType::Semicolon)?;

            key_spans.insert(key.clone(), key_token.span());
            dict.insert(key, value);
        }

        self.expect(TokenType::End)?;
        Ok(dict)
    }

    /// Value ::= Number | String | Name | Dictionary | ConstExpr
    fn parse_value(&mut self) -> Result<BecValue, BecError> {
        let token = self.current_token().clone();
        match token.ttype {
            TokenType::Number(n) => {
                self.advance();
                Ok(BecValue::Number(n))
            }
            TokenType::String(ref s) => {
                let s = s.clone();
                self.advance();
                Ok(BecValue::String(s))
            }
            // A name used as a value copies in the constant bound to it.
            TokenType::Name(ref name) => match self.symbols.lookup(name) {
                Some(value) => {
                    let value = value.clone();
                    self.advance();
                    Ok(value)
                }
                None => Err(SemanticError::UndefinedConstant {
                    src: (*self.source).clone(),
                    span: token.span(),
                    name: name.clone(),
                }
                .into()),
            },
            TokenType::Begin => self.parse_dictionary().map(BecValue::Dictionary),
            TokenType::Pipe => self.parse_const_expr(),
            _ => self.err_expected("a value"),
        }
    }

    // === Expression Rules ===

    /// ConstExpr ::= "|" Expr "|"
    ///
    /// The expression is evaluated right here, against the constants
    /// declared so far; only the resulting number survives.
    fn parse_const_expr(&mut self) -> Result<BecValue, BecError> {
        self.expect(TokenType::Pipe)?;
        let expr = self.parse_expr()?;
        self.expect(TokenType::Pipe)?;

        let value = eval::evaluate(&expr, &self.symbols, &self.source)?;
        Ok(BecValue::Number(value))
    }

    /// Expr ::= Term { ("+" | "-") Term }
    fn parse_expr(&mut self) -> Result<Expr, BecError> {
        let mut lhs = self.parse_term()?;
        loop {
            let op = match self.current_token().ttype {
                TokenType::Plus => BinOp::Add,
                TokenType::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_term()?;
            let span = join_spans(lhs.span(), rhs.span());
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }
        Ok(lhs)
    }

    /// Term ::= Factor { "*" Factor }
    fn parse_term(&mut self) -> Result<Expr, BecError> {
        let mut lhs = self.parse_factor()?;
        while self.match_token(TokenType::Star) {
            let rhs = self.parse_factor()?;
            let span = join_spans(lhs.span(), rhs.span());
            lhs = Expr::Binary {
                op: BinOp::Mul,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }
        Ok(lhs)
    }

    /// Factor ::= Number | String | Name | OrdCall | "(" Expr ")"
    ///
    /// A `|` is not a factor, so expression delimiters cannot nest.
    fn parse_factor(&mut self) -> Result<Expr, BecError> {
        let token = self.current_token().clone();
        match token.ttype {
            TokenType::Number(value) => {
                self.advance();
                Ok(Expr::Number {
                    value,
                    span: token.span(),
                })
            }
            TokenType::String(ref s) => {
                let value = s.clone();
                self.advance();
                Ok(Expr::StringLit {
                    value,
                    span: token.span(),
                })
            }
            TokenType::Name(ref name) => {
                let name = name.clone();
                self.advance();
                Ok(Expr::Name {
                    name,
                    span: token.span(),
                })
            }
            TokenType::Ord => self.parse_ord_call(),
            TokenType::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenType::RParen)?;
                // Grouping parentheses leave no node of their own.
                Ok(expr)
            }
            _ => self.err_expected("a number, a string, a name, 'ord' or '('"),
        }
    }

    /// OrdCall ::= "ord" "(" Factor ")"
    fn parse_ord_call(&mut self) -> Result<Expr, BecError> {
        let ord_token = self.expect(TokenType::Ord)?;
        self.expect(TokenType::LParen)?;
        let arg = self.parse_factor()?;
        let rparen = self.expect(TokenType::RParen)?;

        Ok(Expr::Ord {
            arg: Box::new(arg),
            span: (ord_token.pos_start, rparen.pos_end - ord_token.pos_start).into(),
        })
    }

    // === Tokenizer Helper Methods ===

    /// The token under the cursor. The stream always ends with an `Eof`
    /// token and the cursor never moves past it, so there is always one.
    fn current_token(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Consumes and returns the current token if it matches, and reports an
    /// unexpected-token error otherwise.
    fn expect(&mut self, expected: TokenType) -> Result<Token, BecError> {
        let token = self.current_token().clone();
        if std::mem::discriminant(&token.ttype) == std::mem::discriminant(&expected) {
            self.advance();
            Ok(token)
        } else {
            self.err_expected(&expected.describe())
        }
    }

    /// Like `expect`, but for names, whose payload the caller wants.
    fn expect_name(&mut self, expected: &str) -> Result<(String, Token), BecError> {
        let token = self.current_token().clone();
        if let TokenType::Name(name) = &token.ttype {
            let name = name.clone();
            self.advance();
            Ok((name, token))
        } else {
            self.err_expected(expected)
        }
    }

    fn match_token(&mut self, ttype: TokenType) -> bool {
        if self.check(ttype) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, ttype: TokenType) -> bool {
        std::mem::discriminant(&self.current_token().ttype) == std::mem::discriminant(&ttype)
    }

    fn peek_is(&self, ttype: TokenType) -> bool {
        if let Some(token) = self.tokens.get(self.position + 1) {
            std::mem::discriminant(&token.ttype) == std::mem::discriminant(&ttype)
        } else {
            false
        }
    }

    /// Builds the error for an unexpected token at the cursor. At the end of
    /// the input the report points just past the last character instead of
    /// at a token.
    fn err_expected<T>(&self, expected: &str) -> Result<T, BecError> {
        let token = self.current_token();
        if token.ttype == TokenType::Eof {
            let pos = self.source_text.len().saturating_sub(1);
            return Err(ParserError::UnexpectedEof {
                src: (*self.source).clone(),
                span: (pos, 0).into(),
                expected: expected.to_string(),
            }
            .into());
        }

        Err(ParserError::UnexpectedToken {
            src: (*self.source).clone(),
            span: token.span(),
            expected: expected.to_string(),
            found: token.ttype.describe(),
        }
        .into())
    }
}

/// The span stretching from the start of `start` to the end of `end`.
fn join_spans(start: SourceSpan, end: SourceSpan) -> SourceSpan {
    let from = start.offset();
    let to = end.offset() + end.len();
    (from, to - from).into()
}
