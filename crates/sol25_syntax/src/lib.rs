//! Shared syntax frontend for the SOL25 language: scanner, splitter, parser, AST, diagnostics.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve names or check arities.
//! - Reserved words and selector shapes come from `sol25_core::lang` registries.
//! - Every entry point returns the first error it finds; there is no error recovery.
//!
//! ## Pipeline
//!
//! ```text
//! source ─▶ scanner (classes / methods / raw blocks)
//!        ─▶ splitter (statements per block body)
//!        ─▶ parser (assignments and expressions) ─▶ ast::Program
//! ```
//!
//! ## Examples
//! ```rust
//! use sol25_syntax::parser;
//!
//! let program = parser::parse("class Main : Object { run [ x := 1. ] }").unwrap();
//! assert_eq!(program.classes.len(), 1);
//! assert_eq!(program.classes[0].methods[0].selector, "run");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod scanner;
pub mod splitter;
