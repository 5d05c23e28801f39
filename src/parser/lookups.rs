use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals
    parser.nud(TokenKind::Int, parse_primary_expr);
    parser.nud(TokenKind::Bool, parse_primary_expr);
    parser.nud(TokenKind::Atom, parse_primary_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
