//! Error types and error handling for the front end.
//!
//! This module defines the single located error type shared by the lexer
//! and the parser. It includes:
//!
//! - The error structure with source position information
//! - One variant per lexer and parser message
//! - Error formatting in the `<Stage> error at line L, column C` form
//! - Short tips shown next to the rendered error

pub mod errors;
