//! SOL25 language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved words, selector and identifier
//! shapes, and the builtin classes with their methods.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The scanner/parser enforce syntax; registries provide spellings and metadata for shared use.
//!
//! ## Examples
//! ```rust
//! use sol25_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("self"), Some(KeywordId::SelfKw));
//! assert_eq!(keywords::as_str(KeywordId::Nil), "nil");
//! ```

pub mod builtins;
pub mod keywords;
pub mod selectors;
