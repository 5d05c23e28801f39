#![allow(clippy::module_inception)]

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text.
///
/// `offset` is a 0-based byte offset, `line` and `column` are 1-based and
/// count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs both front end stages over `source` and returns the program root.
pub fn compile_source(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source)?;
    parse(tokens)
}

/// Returns the line number, the text of the line and the 0-based character
/// index of `position` within that line.
///
/// A position past the last line (the end of input after a trailing newline)
/// yields an empty line.
pub fn get_line_at_position(source: &str, position: &Position) -> (usize, String, usize) {
    let line_number = position.line as usize;
    let line = source
        .split('\n')
        .nth(line_number.saturating_sub(1))
        .unwrap_or("")
        .trim_end_matches('\r');

    (
        line_number,
        line.to_string(),
        (position.column as usize).saturating_sub(1),
    )
}

/// Renders an error the way the `krys` binary reports it:
///
/// ```text
/// Parser error at line 1, column 5: Expected identifier after 'let'.
/// -> config.krys
///   |
/// 1 | let = 1;
///   | ----^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("{}\n", error));
    } else {
        out.push_str(&format!("{} ({})\n", error, error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

/// Prints [`render_error`] output to stderr.
pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
