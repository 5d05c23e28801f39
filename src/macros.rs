//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$span` - The source span
/// * `$literal` - The decoded literal, if any
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), span, Some(Literal::Int(42)));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr, $literal:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            literal: $literal,
        }
    };
}

/// Creates a default lexer handler for single-token patterns.
///
/// Generates a handler function that pushes a token of the given kind
/// spanning the whole match and advances the lexer past it.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Equals),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| -> Result<(), Error> {
            let start = lexer.position();
            lexer.advance_n(matched.len());
            lexer.push(MK_TOKEN!(
                $kind,
                String::from(matched),
                Span {
                    start,
                    end: lexer.position()
                },
                None
            ));
            Ok(())
        }
    };
}
