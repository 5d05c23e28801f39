use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
};

use super::parser::Parser;

/// literal := INT | BOOL | ATOM
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    let handler = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.error(ErrorImpl::ExpectedLiteral {
            token: parser.found(),
        })),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.current_token();

    let node = match (token.kind, token.literal) {
        (TokenKind::Int, Some(Literal::Int(value))) => Node::Int(value),
        (TokenKind::Int, _) => match token.value.parse() {
            Ok(value) => Node::Int(value),
            Err(_) if is_digit_run(&token.value) => Node::Int(i64::MAX),
            Err(_) => {
                return Err(parser.error(ErrorImpl::ExpectedLiteral {
                    token: parser.found(),
                }))
            }
        },
        (TokenKind::Bool, Some(Literal::Bool(value))) => Node::Bool(value),
        (TokenKind::Bool, _) => Node::Bool(token.value == "true"),
        (TokenKind::Atom, _) => {
            let name = token.value.strip_prefix(':').unwrap_or(&token.value);
            Node::Atom(name.to_string())
        }
        _ => {
            return Err(parser.error(ErrorImpl::ExpectedLiteral {
                token: parser.found(),
            }))
        }
    };

    parser.advance();
    Ok(node)
}

fn is_digit_run(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
