#![forbid(unsafe_code)]
//! SOL25 Compiler Front End
//!
//! SOL25 is a small class-based, message-passing language. This crate reads a SOL25 program, validates it and
//! emits its XML representation: frontend (scanner, parser, semantic analyzer), XML emitter, and the `sol25` CLI.
//!
//! ## Pipeline
//!
//! ```text
//! source ──scan──▶ classes/methods/blocks ──split/parse──▶ Program ──analyze──▶ MethodTable ──emit──▶ XML
//! ```
//!
//! Every stage returns `Result<_, CompileError>` and stops at the first error; [`CompileError::exit_code`] maps the
//! error kind to the process exit code.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```
//! let xml = sol25::compile("class Main : Object { run [ x := 1. ] }").unwrap();
//! assert!(xml.starts_with("<?xml"));
//!
//! let err = sol25::compile("class A : Object { }").unwrap_err();
//! assert_eq!(err.exit_code(), 31);
//! ```

pub mod cli;
pub mod emit;
pub mod frontend;

pub use frontend::analyzer;
pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::parser;

pub use diagnostics::{CompileError, ErrorKind};
pub use emit::{EmitConfig, to_xml};
pub use frontend::analyzer::AnalyzerConfig;

/// Compile SOL25 source text to its XML representation with the default configuration.
///
/// ## Errors
/// The first lexical, syntactic or semantic error found.
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with(source, &AnalyzerConfig::default(), &EmitConfig::default())
}

/// Compile with explicit analyzer and emitter configuration.
pub fn compile_with(source: &str, analyzer: &AnalyzerConfig, emit: &EmitConfig) -> Result<String, CompileError> {
    let program = parser::parse(source)?;
    analyzer::analyze_with(&program, analyzer)?;
    Ok(to_xml(&program, emit))
}
