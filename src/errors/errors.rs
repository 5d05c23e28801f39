use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A located front end error.
///
/// Both the scanner and the parser fail fast, so a run produces at most one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.line
    }

    pub fn get_column(&self) -> u32 {
        self.position.column
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The human readable message, without position information.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_stage(&self) -> Stage {
        self.internal_error.stage()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::AtomMissingName => "AtomMissingName",
            ErrorImpl::AtomInvalidStart { .. } => "AtomInvalidStart",
            ErrorImpl::ExpectedSemicolonAfterExpression { .. } => {
                "ExpectedSemicolonAfterExpression"
            }
            ErrorImpl::ExpectedIdentifierAfterLet { .. } => "ExpectedIdentifierAfterLet",
            ErrorImpl::ExpectedEqualsAfterIdentifier { .. } => "ExpectedEqualsAfterIdentifier",
            ErrorImpl::ExpectedSemicolonAfterLetValue { .. } => "ExpectedSemicolonAfterLetValue",
            ErrorImpl::ExpectedLiteral { .. } => "ExpectedLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::AtomMissingName => ErrorTip::None,
            ErrorImpl::AtomInvalidStart { character } => ErrorTip::Suggestion(format!(
                "found `{}`, atoms look like `:ok` or `:_internal`",
                character
            )),
            ErrorImpl::ExpectedSemicolonAfterExpression { token } => {
                ErrorTip::Suggestion(format!("found `{}`, did you miss a semicolon?", token))
            }
            ErrorImpl::ExpectedIdentifierAfterLet { .. } => ErrorTip::None,
            ErrorImpl::ExpectedEqualsAfterIdentifier { token } => {
                ErrorTip::Suggestion(format!("found `{}`", token))
            }
            ErrorImpl::ExpectedSemicolonAfterLetValue { token } => {
                ErrorTip::Suggestion(format!("found `{}`, did you miss a semicolon?", token))
            }
            ErrorImpl::ExpectedLiteral { token } => {
                ErrorTip::Suggestion(format!("found `{}`", token))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} error at line {}, column {}: {}",
            self.get_stage(),
            self.position.line,
            self.position.column,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

/// The front end stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexer,
    Parser,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Lexer => write!(f, "Lexer"),
            Stage::Parser => write!(f, "Parser"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// `token` fields hold the source text of the offending token; it is empty
/// when the offending token is the end of input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    // Lexer
    #[error("Unexpected character.")]
    UnexpectedCharacter { character: char },
    #[error("Atom literal requires a name.")]
    AtomMissingName,
    #[error("Atom literal must start with a letter or '_'.")]
    AtomInvalidStart { character: char },

    // Parser
    #[error("Expected ';' after expression.")]
    ExpectedSemicolonAfterExpression { token: String },
    #[error("Expected identifier after 'let'.")]
    ExpectedIdentifierAfterLet { token: String },
    #[error("Expected '=' after identifier.")]
    ExpectedEqualsAfterIdentifier { token: String },
    #[error("Expected ';' after let value.")]
    ExpectedSemicolonAfterLetValue { token: String },
    #[error("Expected int, bool, or atom literal.")]
    ExpectedLiteral { token: String },
}

impl ErrorImpl {
    pub fn stage(&self) -> Stage {
        match self {
            ErrorImpl::UnexpectedCharacter { .. }
            | ErrorImpl::AtomMissingName
            | ErrorImpl::AtomInvalidStart { .. } => Stage::Lexer,
            _ => Stage::Parser,
        }
    }
}
