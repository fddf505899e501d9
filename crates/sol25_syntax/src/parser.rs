//! Parser for the SOL25 language
//!
//! Turns source text into an [`ast::Program`](crate::ast::Program). The structural scanner finds classes, methods
//! and raw blocks; this module splits each block body into statements and parses every statement into an
//! assignment with an expression tree.
//!
//! ## Examples
//!
//! ```rust
//! use sol25_syntax::ast::Expr;
//! use sol25_syntax::parser;
//!
//! let program = parser::parse("class Main : Object { run [ x := Integer from: 5. ] }").unwrap();
//! let run = program.class("Main").unwrap().method("run").unwrap();
//! match &run.block.instructions[0].expr {
//!     Expr::Send(send) => assert_eq!(send.selector, "from:"),
//!     other => panic!("expected a send, got {other:?}"),
//! }
//! ```

use sol25_core::lang::{keywords, selectors};

use crate::ast::*;
use crate::diagnostics::{CompileError, errors};
use crate::lexer::{group_end, scan_string};
use crate::scanner::{self, RawBlock, ScannedProgram, split_block_header};
use crate::splitter::{self, Statement};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// functions in the same Rust module while avoiding a single large source file.

include!("parser/api.rs");
include!("parser/stmts.rs");
include!("parser/tokens.rs");
include!("parser/expr.rs");
include!("parser/tests.rs");
