//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser walks the token stream once, with one token of lookahead and
//! no backtracking.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for literals

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenStream},
    Position,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for parsing
/// statements and literals. It tracks the current position in the token
/// stream and provides methods for token consumption.
pub struct Parser {
    /// The tokens to parse, always ending in `EOF`
    tokens: TokenStream,
    /// Index of the lookahead token; never moves past `EOF`
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for literal handlers
    nud_lookup: NUDLookup,
}

impl Parser {
    /// Creates a new Parser instance with empty lookup tables.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The token stream to parse
    pub fn new(tokens: TokenStream) -> Self {
        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Consumes the current token and returns it.
    ///
    /// At `EOF` the cursor stays put and `EOF` is returned.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.has_tokens() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Builds the error from the current token's text; only
    ///   called on mismatch
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches.
    pub fn expect_error<F>(&mut self, expected_kind: TokenKind, error: F) -> Result<Token, Error>
    where
        F: FnOnce(String) -> ErrorImpl,
    {
        if self.current_token_kind() != expected_kind {
            Err(self.error(error(self.found())))
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Builds an error positioned at the current token.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    /// Source text of the current token, used in error details.
    pub fn found(&self) -> String {
        self.current_token().value.clone()
    }

    /// Checks if there are more tokens to parse.
    ///
    /// # Returns
    ///
    /// Returns true unless the current token is `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a literal handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this literal
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().get_position()
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until EOF.
///
/// # Arguments
///
/// * `tokens` - The token stream produced by `tokenize`
///
/// # Returns
///
/// The root `Node::Sequence`, or the first error encountered. Statements
/// already parsed are dropped when a later one fails.
pub fn parse(tokens: TokenStream) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        match parse_stmt(&mut parser) {
            Ok(stmt) => {
                trace!(kind = ?stmt.get_node_type(), "parsed statement");
                body.push(stmt);
            }
            Err(error) => {
                debug!(%error, parsed = body.len(), "parse failed");
                return Err(error);
            }
        }
    }

    debug!(statements = body.len(), "parsed program");
    Ok(Node::Sequence(body))
}
