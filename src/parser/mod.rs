//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a recursive descent parser with a
//! single token of lookahead and handles:
//!
//! - Statement parsing (`let` bindings and terminated literals)
//! - Literal parsing (integers, booleans and atoms)
//! - Error reporting at the offending token
//!
//! Statements and literals are dispatched through lookup tables keyed by
//! the kind of the lookahead token.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
