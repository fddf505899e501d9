//! Provide the canonical SOL25 language vocabulary shared by the syntax front end and the semantic analyzer.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both:
//! - the syntax crate can use to reject reserved words and malformed selectors, and
//! - the analyzer can use to seed its method tables with the builtin classes.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no AST types.
//! - The builtin class table is a value ([`lang::builtins::BuiltinTable`]), not a global, so callers can extend it.

pub mod lang;
