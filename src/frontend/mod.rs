//! SOL25 compiler frontend
//!
//! This module contains all frontend components:
//! - `scanner`: class/method/block structure
//! - `splitter`: statements of a block body
//! - `parser`: statements and expressions into the AST
//! - `ast`: abstract syntax tree definitions
//! - `analyzer`: semantic validation
//! - `diagnostics`: error kinds and reporting

// Syntax components are provided by the shared sol25_syntax crate.
pub use sol25_syntax::{ast, diagnostics, lexer, parser, scanner, splitter};

// Semantic analysis stays local to the compiler.
pub mod analyzer;
