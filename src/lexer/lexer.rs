use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, TokenStream, RESERVED_LOOKUP};

/// Called with the text matched at the cursor. The handler is responsible for
/// advancing the lexer past it.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order, every regex is anchored at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^#[^\n]*\n?").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^:[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: atom_handler },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: bad_atom_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
    ];
}

/// Scanner state: the cursor as a byte offset plus the line and column it
/// corresponds to.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves the cursor forward by `n` bytes, updating line and column for
    /// every character passed over.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());

        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        trace!(
            kind = %token.kind,
            value = %token.value,
            line = token.span.start.line,
            column = token.span.start.column,
            "token"
        );
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();

    // `matched` is all digits, so parsing can only fail on overflow.
    let value = matched.parse::<i64>().unwrap_or(i64::MAX);

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        TokenKind::Int,
        matched.to_string(),
        Span {
            start,
            end: lexer.position()
        },
        Some(Literal::Int(value))
    ));
    Ok(())
}

fn atom_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        TokenKind::Atom,
        matched.to_string(),
        Span {
            start,
            end: lexer.position()
        },
        None
    ));
    Ok(())
}

// A lone ':' that the atom pattern rejected.
fn bad_atom_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let next = lexer.remainder()[matched.len()..].chars().next();

    let error = match next {
        None => ErrorImpl::AtomMissingName,
        Some(character) => ErrorImpl::AtomInvalidStart { character },
    };

    Err(Error::new(error, lexer.position()))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();
    lexer.advance_n(matched.len());

    let (kind, literal) = match RESERVED_LOOKUP.get(matched) {
        Some(TokenKind::Bool) => (TokenKind::Bool, Some(Literal::Bool(matched == "true"))),
        Some(kind) => (*kind, None),
        None => (TokenKind::Identifier, None),
    };

    lexer.push(MK_TOKEN!(
        kind,
        matched.to_string(),
        Span {
            start,
            end: lexer.position()
        },
        literal
    ));
    Ok(())
}

/// Scans `source` into a token stream terminated by `EOF`.
///
/// Fails on the first character that cannot start a token. No tokens are
/// returned on failure.
pub fn tokenize(source: &str) -> Result<TokenStream, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let pattern = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern, m.as_str())));

        let result = match pattern {
            Some((pattern, matched)) => (pattern.handler)(&mut lex, matched),
            None => Err(Error::new(
                ErrorImpl::UnexpectedCharacter {
                    character: lex.at().unwrap_or('\0'),
                },
                lex.position(),
            )),
        };

        if let Err(error) = result {
            debug!(%error, "tokenize failed");
            return Err(error);
        }
    }

    let eof = lex.position();
    let stream = TokenStream::new(lex.tokens, eof);
    debug!(tokens = stream.len(), "tokenized source");

    Ok(stream)
}
