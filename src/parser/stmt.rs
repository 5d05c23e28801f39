use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// statement := "let" IDENT "=" literal ";" | literal ";"
pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    let expr = parse_expr(parser)?;

    parser.expect_error(TokenKind::Semicolon, |token| {
        ErrorImpl::ExpectedSemicolonAfterExpression { token }
    })?;

    Ok(expr)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let name = parser
        .expect_error(TokenKind::Identifier, |token| {
            ErrorImpl::ExpectedIdentifierAfterLet { token }
        })?
        .value;

    parser.expect_error(TokenKind::Equals, |token| {
        ErrorImpl::ExpectedEqualsAfterIdentifier { token }
    })?;

    let value = parse_expr(parser)?;

    parser.expect_error(TokenKind::Semicolon, |token| {
        ErrorImpl::ExpectedSemicolonAfterLetValue { token }
    })?;

    Ok(Node::Let {
        name,
        value: Box::new(value),
    })
}
