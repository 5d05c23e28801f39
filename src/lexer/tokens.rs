use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, ops::Index, slice::Iter};

use crate::{Position, Span, MK_TOKEN};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Int,
    Bool,
    Atom,

    // Reserved
    Let,

    Equals,    // =
    Semicolon, // ;

    /// Never produced by `tokenize`, failures are returned as errors instead.
    Error,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Decoded value carried by literal tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token; empty for `EOF`.
    pub value: String,
    pub span: Span,
    pub literal: Option<Literal>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn get_position(&self) -> Position {
        self.span.start
    }

    /// One line summary used by the `--tokens` dump, e.g. `Identifier (x)`.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::Int,
            TokenKind::Bool,
            TokenKind::Atom,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}

/// Tokens produced by a successful scan.
///
/// Always terminated by exactly one `EOF` token, which is appended by the
/// constructor. No other way of building a stream exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Builds a stream from `tokens` and appends the end of input at `eof`.
    ///
    /// Any `EOF` tokens already present in `tokens` are dropped.
    pub fn new(mut tokens: Vec<Token>, eof: Position) -> Self {
        tokens.retain(|token| token.kind != TokenKind::EOF);
        tokens.push(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span {
                start: eof,
                end: eof
            },
            None
        ));

        TokenStream { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A stream is never empty, it holds at least the `EOF` token.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn last(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
