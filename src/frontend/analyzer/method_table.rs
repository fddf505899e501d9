//! Per-class selector tables with inherited selectors propagated to a fixed point.

use std::collections::{BTreeMap, HashMap};

use sol25_core::lang::builtins::{self, BuiltinTable};
use sol25_core::lang::selectors;

use crate::frontend::ast::Program;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassEntry {
    parent: Option<String>,
    /// selector → number of arguments
    selectors: BTreeMap<String, usize>,
}

/// Every class known to a program (builtins and user classes) with the selectors it understands, inherited ones
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodTable {
    classes: HashMap<String, ClassEntry>,
}

impl MethodTable {
    /// Build the table for `program` on top of `builtins`.
    ///
    /// User classes without an explicit parent inherit from `Object`. A user selector's arity is the number of `:`
    /// in it.
    ///
    /// ## Notes
    /// - Inheritance is resolved by repeatedly merging each parent's selectors into its children until no table
    ///   grows. This terminates for any parent graph, cyclic or not, since tables only grow and are bounded by the
    ///   finite set of selectors in the program.
    pub fn build(program: &Program, builtins: &BuiltinTable) -> Self {
        let mut classes = HashMap::new();
        for builtin in builtins.classes() {
            classes.insert(
                builtin.name.clone(),
                ClassEntry {
                    parent: builtin.parent.clone(),
                    selectors: builtin.methods.iter().cloned().collect(),
                },
            );
        }
        for class in &program.classes {
            let parent = class.parent.clone().unwrap_or_else(|| builtins::OBJECT.to_string());
            let selectors = class
                .methods
                .iter()
                .map(|m| (m.selector.clone(), selectors::arity(&m.selector)))
                .collect();
            classes.insert(
                class.name.clone(),
                ClassEntry {
                    parent: Some(parent),
                    selectors,
                },
            );
        }

        let mut table = Self { classes };
        let rounds = table.propagate();
        tracing::debug!(classes = table.classes.len(), rounds, "method table built");
        table
    }

    /// Merge inherited selectors until nothing changes; returns the number of rounds run.
    fn propagate(&mut self) -> usize {
        let mut names: Vec<String> = self.classes.keys().cloned().collect();
        names.sort();

        let mut rounds = 0;
        loop {
            rounds += 1;
            let mut changed = false;
            for name in &names {
                let Some(parent) = self.classes.get(name).and_then(|e| e.parent.clone()) else {
                    continue;
                };
                let Some(inherited) = self.classes.get(&parent).map(|e| e.selectors.clone()) else {
                    continue;
                };
                if let Some(entry) = self.classes.get_mut(name) {
                    for (selector, arity) in inherited {
                        if !entry.selectors.contains_key(&selector) {
                            entry.selectors.insert(selector, arity);
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                return rounds;
            }
        }
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Arity of `selector` on `class`, own or inherited.
    pub fn arity(&self, class: &str, selector: &str) -> Option<usize> {
        self.classes.get(class)?.selectors.get(selector).copied()
    }

    pub fn responds_to(&self, class: &str, selector: &str) -> bool {
        self.arity(class, selector).is_some()
    }

    /// Selectors of `class` in sorted order, with their arities.
    pub fn selectors(&self, class: &str) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.classes
            .get(class)
            .into_iter()
            .flat_map(|e| e.selectors.iter().map(|(s, a)| (s.as_str(), *a)))
    }

    /// A selector of `class` that shares its first part with `selector` but is not `selector` itself.
    ///
    /// `plus:plus:` and `plus` both find `plus:`; such a send names a known method with the wrong number of
    /// arguments.
    pub fn similar_selector(&self, class: &str, selector: &str) -> Option<(&str, usize)> {
        let stem = selectors::stem(selector);
        self.selectors(class)
            .find(|(candidate, _)| *candidate != selector && selectors::stem(candidate) == stem)
    }
}
