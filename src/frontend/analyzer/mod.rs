//! Semantic analyzer for SOL25 programs.
//!
//! Validates a parsed [`Program`] without changing it. The analysis is a fixed sequence of passes; each pass stops
//! at the first violation it finds, and later passes rely on what earlier ones established.
//!
//! ## Passes
//!
//! | # | Pass                | Error kind (exit code)                         |
//! |---|---------------------|------------------------------------------------|
//! | 0 | entry point         | `MissingMain` (31)                             |
//! | 1 | duplicates          | `OtherSemantic` (35)                           |
//! | 2 | class hierarchy     | `Undefined` (32) parent, `OtherSemantic` cycle |
//! | 3 | method table        | (builds [`MethodTable`])                       |
//! | 4 | reference resolution| `Undefined` (32)                               |
//! | 5 | send arity          | `ArityMismatch` (33)                           |
//! | 6 | collisions          | `Collision` (34)                               |
//! | 7 | definition arity    | `ArityMismatch` (33)                           |
//!
//! ## Notes
//! - The entry point check runs first so that a program without `Main>>run` always fails with 31, whatever else
//!   is wrong with it.
//! - Builtin classes and their selectors come from [`AnalyzerConfig::builtins`].
//!
//! ## Examples
//!
//! ```rust
//! use sol25::frontend::{analyzer, parser};
//!
//! let program = parser::parse("class Main : Object { run [ x := Integer from: 1. ] }").unwrap();
//! let table = analyzer::analyze(&program).unwrap();
//! assert!(table.responds_to("Main", "run"));
//! assert!(!table.responds_to("Main", "new"));
//! ```

mod arity;
mod collision;
mod duplicates;
mod entry;
mod hierarchy;
mod method_table;
mod resolve;
#[cfg(test)]
mod tests;

pub use method_table::MethodTable;

use sol25_core::lang::builtins::BuiltinTable;

use crate::frontend::ast::*;
use crate::frontend::diagnostics::CompileError;

/// Analyzer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Classes available without a declaration.
    pub builtins: BuiltinTable,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins(mut self, builtins: BuiltinTable) -> Self {
        self.builtins = builtins;
        self
    }
}

/// Analyze `program` against the standard builtins.
pub fn analyze(program: &Program) -> Result<MethodTable, CompileError> {
    analyze_with(program, &AnalyzerConfig::default())
}

/// Analyze `program` with a custom configuration.
///
/// ## Returns
/// - The propagated [`MethodTable`] if every pass succeeds.
///
/// ## Errors
/// - The first violation found, in pass order.
#[tracing::instrument(skip_all, fields(classes = program.classes.len()))]
pub fn analyze_with(program: &Program, config: &AnalyzerConfig) -> Result<MethodTable, CompileError> {
    Analyzer::new(program, config).run()
}

/// The method currently being checked, for error messages.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MethodContext<'p> {
    pub class: &'p ClassDef,
    pub method: &'p MethodDef,
}

impl MethodContext<'_> {
    pub fn qualified_name(&self) -> String {
        format!("{}>>{}", self.class.name, self.method.selector)
    }
}

/// Analyzer state for one program.
pub struct Analyzer<'p> {
    pub(crate) program: &'p Program,
    pub(crate) config: &'p AnalyzerConfig,
}

impl<'p> Analyzer<'p> {
    pub fn new(program: &'p Program, config: &'p AnalyzerConfig) -> Self {
        Self { program, config }
    }

    /// Run every pass in order.
    pub fn run(self) -> Result<MethodTable, CompileError> {
        self.check_entry_point()?;
        tracing::debug!("entry point present");
        self.check_duplicates()?;
        self.check_hierarchy()?;
        tracing::debug!("class hierarchy is well-formed");

        let table = MethodTable::build(self.program, &self.config.builtins);

        self.resolve_references(&table)?;
        self.check_send_arity(&table)?;
        self.check_collisions()?;
        self.check_definition_arity()?;
        tracing::debug!("semantic analysis passed");
        Ok(table)
    }
}

/// Every method of every class together with its context.
pub(crate) fn methods_of(program: &Program) -> impl Iterator<Item = MethodContext<'_>> {
    program
        .classes
        .iter()
        .flat_map(|class| class.methods.iter().map(move |method| MethodContext { class, method }))
}
