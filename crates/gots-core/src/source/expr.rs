//! Go type expressions written as text, e.g. `map[string]*time.Time`.
//!
//! Used for custom type mappings where both sides are spelled in Go.
//! Package-qualified names keep the full import path:
//! `github.com/google/uuid.UUID`.

use std::ops::Range;

use logos::Logos;

use super::{BasicKind, NamedType, SourceType};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[token("*")]
    Star,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token("map")]
    KwMap,

    #[token("chan")]
    KwChan,

    #[token("interface")]
    KwInterface,

    #[token("struct")]
    KwStruct,

    #[regex(r"[0-9]+")]
    Int,

    /// Possibly qualified name. Import paths may contain `/`, `.` and `-`.
    /// Defined after keywords so they take precedence.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_./\-]*")]
    Name,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: (usize, usize),
}

impl Token {
    fn range(&self) -> Range<usize> {
        self.span.0..self.span.1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error("unrecognized input at offset {offset}")]
    Garbage { offset: usize },

    #[error("unexpected `{found}` at offset {offset}, expected {expected}")]
    Unexpected {
        found: String,
        offset: usize,
        expected: &'static str,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid array length `{0}`")]
    ArrayLength(String),

    #[error("malformed qualified name `{0}`")]
    QualifiedName(String),
}

/// Tokenizes a type expression, dropping whitespace.
pub fn lex(source: &str) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        match kind {
            Ok(TokenKind::Whitespace) => {}
            Ok(kind) => tokens.push(Token {
                kind,
                span: (span.start, span.end),
            }),
            Err(()) => return Err(ExprError::Garbage { offset: span.start }),
        }
    }
    Ok(tokens)
}

/// Parses a complete Go type expression.
pub fn parse_type_expression(source: &str) -> Result<SourceType, ExprError> {
    let tokens = lex(source)?;
    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
    };
    let ty = parser.parse_type()?;
    if let Some(tok) = parser.peek() {
        return Err(parser.unexpected(tok, "end of input"));
    }
    Ok(ty)
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let tok = self.peek()?;
        self.pos += 1;
        Some(tok)
    }

    fn text(&self, tok: Token) -> &'src str {
        &self.source[tok.range()]
    }

    fn unexpected(&self, tok: Token, expected: &'static str) -> ExprError {
        ExprError::Unexpected {
            found: self.text(tok).to_string(),
            offset: tok.span.0,
            expected,
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ExprError> {
        match self.bump() {
            Some(tok) if tok.kind == kind => Ok(tok),
            Some(tok) => Err(self.unexpected(tok, expected)),
            None => Err(ExprError::UnexpectedEnd { expected }),
        }
    }

    fn parse_type(&mut self) -> Result<SourceType, ExprError> {
        let Some(tok) = self.bump() else {
            return Err(ExprError::UnexpectedEnd { expected: "a type" });
        };

        match tok.kind {
            TokenKind::Star => Ok(SourceType::pointer(self.parse_type()?)),
            TokenKind::BracketOpen => self.parse_slice_or_array(),
            TokenKind::KwMap => {
                self.expect(TokenKind::BracketOpen, "`[`")?;
                let key = self.parse_type()?;
                self.expect(TokenKind::BracketClose, "`]`")?;
                let value = self.parse_type()?;
                Ok(SourceType::map(key, value))
            }
            TokenKind::KwChan => Ok(SourceType::Chan {
                elem: Box::new(self.parse_type()?),
            }),
            TokenKind::KwInterface => {
                self.expect(TokenKind::BraceOpen, "`{`")?;
                self.expect(TokenKind::BraceClose, "`}`")?;
                Ok(SourceType::empty_interface())
            }
            TokenKind::KwStruct => {
                self.expect(TokenKind::BraceOpen, "`{`")?;
                self.expect(TokenKind::BraceClose, "`}`")?;
                Ok(SourceType::Struct { fields: Vec::new() })
            }
            TokenKind::Name => self.parse_named(tok),
            _ => Err(self.unexpected(tok, "a type")),
        }
    }

    fn parse_slice_or_array(&mut self) -> Result<SourceType, ExprError> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::BracketClose => {
                self.bump();
                Ok(SourceType::slice(self.parse_type()?))
            }
            Some(tok) if tok.kind == TokenKind::Int => {
                self.bump();
                let text = self.text(tok);
                let len = text
                    .parse::<u64>()
                    .map_err(|_| ExprError::ArrayLength(text.to_string()))?;
                self.expect(TokenKind::BracketClose, "`]`")?;
                Ok(SourceType::Array {
                    len,
                    elem: Box::new(self.parse_type()?),
                })
            }
            Some(tok) => Err(self.unexpected(tok, "`]` or an array length")),
            None => Err(ExprError::UnexpectedEnd {
                expected: "`]` or an array length",
            }),
        }
    }

    fn parse_named(&mut self, tok: Token) -> Result<SourceType, ExprError> {
        let text = self.text(tok);
        let type_args = self.parse_type_args()?;

        if let Some(kind) = BasicKind::from_name(text)
            && type_args.is_empty()
        {
            return Ok(SourceType::basic(kind));
        }

        let named = match text.rsplit_once('.') {
            Some((package, name)) => {
                if package.is_empty() || name.is_empty() || name.contains('/') {
                    return Err(ExprError::QualifiedName(text.to_string()));
                }
                NamedType::new(Some(package), name)
            }
            None => NamedType::new(None, text),
        };

        Ok(SourceType::Named(NamedType {
            type_args,
            ..named
        }))
    }

    fn parse_type_args(&mut self) -> Result<Vec<SourceType>, ExprError> {
        if !matches!(self.peek(), Some(t) if t.kind == TokenKind::BracketOpen) {
            return Ok(Vec::new());
        }
        self.bump();

        let mut args = vec![self.parse_type()?];
        loop {
            match self.bump() {
                Some(t) if t.kind == TokenKind::Comma => args.push(self.parse_type()?),
                Some(t) if t.kind == TokenKind::BracketClose => return Ok(args),
                Some(t) => return Err(self.unexpected(t, "`,` or `]`")),
                None => {
                    return Err(ExprError::UnexpectedEnd {
                        expected: "`,` or `]`",
                    });
                }
            }
        }
    }
}
