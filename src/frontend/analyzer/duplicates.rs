//! Pass 1: names that must be unique.

use std::collections::HashSet;

use crate::frontend::ast::{Block, for_each_block};
use crate::frontend::diagnostics::CompileError;

use super::{Analyzer, methods_of};

impl Analyzer<'_> {
    /// Class names (builtins included), selectors within a class and parameters within a block must be unique.
    pub(crate) fn check_duplicates(&self) -> Result<(), CompileError> {
        let mut classes = HashSet::new();
        for class in &self.program.classes {
            if self.config.builtins.contains(&class.name) {
                return Err(CompileError::other_semantic(format!("builtin class '{}' cannot be redefined", class.name))
                    .at_line(class.line));
            }
            if !classes.insert(class.name.as_str()) {
                return Err(CompileError::other_semantic(format!("class '{}' is defined more than once", class.name))
                    .at_line(class.line));
            }

            let mut selectors = HashSet::new();
            for method in &class.methods {
                if !selectors.insert(method.selector.as_str()) {
                    return Err(CompileError::other_semantic(format!(
                        "method '{}>>{}' is defined more than once",
                        class.name, method.selector
                    ))
                    .at_line(method.line));
                }
            }
        }

        for ctx in methods_of(self.program) {
            let mut duplicate = None;
            for_each_block(&ctx.method.block, &mut |block| {
                if duplicate.is_none() {
                    duplicate = duplicate_parameter(block).map(|name| (name.to_string(), block.line));
                }
            });
            if let Some((name, line)) = duplicate {
                return Err(CompileError::other_semantic(format!(
                    "parameter '{name}' is declared twice in a block of '{}'",
                    ctx.qualified_name()
                ))
                .at_line(line));
            }
        }
        Ok(())
    }
}

fn duplicate_parameter(block: &Block) -> Option<&str> {
    let mut seen = HashSet::new();
    block
        .parameters
        .iter()
        .map(String::as_str)
        .find(|name| !seen.insert(*name))
}
