//! Integration tests for the end-to-end front end.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through tokenization and parsing, and that the `krys`
//! binary reports trees and errors the way users see them.

use krys::{
    ast::ast::Node,
    compile_source,
    errors::errors::Stage,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};
use std::{fs, path::PathBuf, process::Command};

#[test]
fn test_scenario_let_binding() {
    let tokens = tokenize("let x = 42;").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );

    let ast = parse(tokens).unwrap();
    assert_eq!(
        ast,
        Node::Sequence(vec![Node::Let {
            name: "x".to_string(),
            value: Box::new(Node::Int(42)),
        }])
    );
}

#[test]
fn test_scenario_atom() {
    let ast = compile_source(":foo;").unwrap();
    assert_eq!(ast, Node::Sequence(vec![Node::Atom("foo".to_string())]));
}

#[test]
fn test_scenario_booleans() {
    let ast = compile_source("true;false;").unwrap();
    assert_eq!(ast, Node::Sequence(vec![Node::Bool(true), Node::Bool(false)]));
}

#[test]
fn test_scenario_missing_identifier() {
    let error = compile_source("let = 1;").unwrap_err();
    assert_eq!(error.get_stage(), Stage::Parser);
    assert_eq!(
        error.to_string(),
        "Parser error at line 1, column 5: Expected identifier after 'let'."
    );
}

#[test]
fn test_scenario_missing_semicolon() {
    let error = compile_source("1").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Parser error at line 1, column 2: Expected ';' after expression."
    );
}

#[test]
fn test_scenario_unexpected_character() {
    let error = compile_source("@").unwrap_err();
    assert_eq!(error.get_stage(), Stage::Lexer);
    assert_eq!(
        error.to_string(),
        "Lexer error at line 1, column 1: Unexpected character."
    );
}

#[test]
fn test_lexer_error_wins_over_parser_error() {
    // The missing semicolon would be a parse error, but scanning fails first.
    let error = compile_source("let x = 1\n$").unwrap_err();
    assert_eq!(error.get_stage(), Stage::Lexer);
    assert_eq!((error.get_line(), error.get_column()), (2, 1));
}

#[test]
fn test_realistic_config_file() {
    let source = "\
# service configuration
let port = 8080;
let verbose = false;
let mode = :production;

# feature switches
:metrics;
true;
";
    let ast = compile_source(source).unwrap();
    assert_eq!(
        ast.to_string(),
        "\
Program
  Let(port)
    Int(8080)
  Let(verbose)
    Bool(false)
  Let(mode)
    Atom(:production)
  Atom(:metrics)
  Bool(true)
"
    );
}

#[test]
fn test_oversized_integer_clamps_to_max() {
    let ast = compile_source("99999999999999999999;").unwrap();
    assert_eq!(ast, Node::Sequence(vec![Node::Int(i64::MAX)]));
    assert_eq!(ast.to_string(), "Program\n  Int(9223372036854775807)\n");
}

fn write_source(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("krys-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_binary_prints_tree() {
    let path = write_source("ok.krys", "let x = 42;\n:ok;\n");

    let output = Command::new(env!("CARGO_BIN_EXE_krys"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Program\n  Let(x)\n    Int(42)\n  Atom(:ok)\n"
    );
}

#[test]
fn test_binary_prints_tokens() {
    let path = write_source("tokens.krys", "true;");

    let output = Command::new(env!("CARGO_BIN_EXE_krys"))
        .arg("--tokens")
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Bool (true)\nSemicolon ()\nEOF ()\nProgram\n  Bool(true)\n"
    );
}

#[test]
fn test_binary_reports_parse_error() {
    let path = write_source("bad.krys", "let x = 1;\nlet = 2;\n");

    let output = Command::new(env!("CARGO_BIN_EXE_krys"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Parser error at line 2, column 5: Expected identifier after 'let'.\n"));
    assert!(stderr.contains("2 | let = 2;\n"));
    assert!(stderr.contains("  | ----^\n"));
}

#[test]
fn test_binary_reports_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_krys"))
        .arg("/definitely/not/here.krys")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Failed to read /definitely/not/here.krys"));
}

#[test]
fn test_binary_prints_clamped_integer() {
    let path = write_source("big.krys", "99999999999999999999;\n");

    let output = Command::new(env!("CARGO_BIN_EXE_krys"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Program\n  Int(9223372036854775807)\n"
    );
}
