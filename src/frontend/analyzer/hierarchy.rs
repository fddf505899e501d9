//! Pass 2: every parent exists and the inheritance graph has no cycles.

use std::collections::{HashMap, HashSet};

use crate::frontend::diagnostics::{CompileError, errors};

use super::Analyzer;

impl Analyzer<'_> {
    pub(crate) fn check_hierarchy(&self) -> Result<(), CompileError> {
        let builtins = &self.config.builtins;
        let mut parents: HashMap<&str, Option<&str>> = builtins
            .classes()
            .iter()
            .map(|c| (c.name.as_str(), c.parent.as_deref()))
            .collect();
        for class in &self.program.classes {
            parents.insert(&class.name, class.parent.as_deref());
        }

        for class in &self.program.classes {
            if let Some(parent) = class.parent.as_deref() {
                if !parents.contains_key(parent) {
                    return Err(errors::undefined_class(parent)
                        .with_note(format!("'{parent}' is the parent of class '{}'", class.name))
                        .at_line(class.line));
                }
            }
        }

        for class in &self.program.classes {
            let mut seen = HashSet::from([class.name.as_str()]);
            let mut current = class.parent.as_deref();
            while let Some(name) = current {
                if !seen.insert(name) {
                    return Err(CompileError::other_semantic(format!("inheritance cycle through class '{name}'"))
                        .with_note(format!("reached from the parent chain of class '{}'", class.name))
                        .at_line(class.line));
                }
                current = parents.get(name).copied().flatten();
            }
        }
        Ok(())
    }
}
