//! Builtin class vocabulary.
//!
//! This module defines the classes every SOL25 program can use without declaring them, together with the
//! selectors (and arities) those classes understand. The const registry [`BUILTIN_CLASSES`] is the canonical
//! description; [`BuiltinTable`] is the owned, extensible value the analyzer is configured with.
//!
//! ## Notes
//! - `Object` is the implicit parent of every class declared without an explicit parent.
//! - `Object` declares no selectors; only `Integer` has the class-side constructors `new` and `from:`.
//!
//! ## Examples
//! ```rust
//! use sol25_core::lang::builtins::BuiltinTable;
//!
//! let table = BuiltinTable::standard();
//! assert!(table.contains("Integer"));
//! assert_eq!(table.arity_of("Integer", "plus:"), Some(1));
//! assert_eq!(table.arity_of("String", "new"), None);
//! ```

/// Name of the root class.
pub const OBJECT: &str = "Object";

/// Stable identifier for a builtin class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinClassId {
    Object,
    Integer,
    String,
}

/// A selector a builtin class understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinMethod {
    pub selector: &'static str,
    pub arity: usize,
}

/// Metadata for a builtin class.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinClassInfo {
    pub id: BuiltinClassId,
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub methods: &'static [BuiltinMethod],
}

/// Registry of all builtin classes.
pub const BUILTIN_CLASSES: &[BuiltinClassInfo] = &[
    BuiltinClassInfo {
        id: BuiltinClassId::Object,
        name: OBJECT,
        parent: None,
        methods: &[],
    },
    BuiltinClassInfo {
        id: BuiltinClassId::Integer,
        name: "Integer",
        parent: Some(OBJECT),
        methods: &[method("from:", 1), method("new", 0), method("plus:", 1)],
    },
    BuiltinClassInfo {
        id: BuiltinClassId::String,
        name: "String",
        parent: Some(OBJECT),
        methods: &[method("plus:", 1)],
    },
];

/// Full metadata for a builtin class id.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BuiltinClassId) -> &'static BuiltinClassInfo {
    BUILTIN_CLASSES
        .iter()
        .find(|c| c.id == id)
        .expect("builtin class info missing")
}

/// Lookup by class name.
pub fn from_str(name: &str) -> Option<BuiltinClassId> {
    BUILTIN_CLASSES.iter().find(|c| c.name == name).map(|c| c.id)
}

/// An owned builtin class entry inside a [`BuiltinTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinClass {
    pub name: String,
    pub parent: Option<String>,
    /// `(selector, arity)` pairs in declaration order.
    pub methods: Vec<(String, usize)>,
}

/// The set of builtin classes an analysis runs against.
///
/// Built from [`BUILTIN_CLASSES`] by [`BuiltinTable::standard`]; additional classes or selectors can be layered on
/// with [`with_class`](Self::with_class) and [`with_method`](Self::with_method).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinTable {
    classes: Vec<BuiltinClass>,
}

impl BuiltinTable {
    /// The standard SOL25 builtins (`Object`, `Integer`, `String`).
    pub fn standard() -> Self {
        let classes = BUILTIN_CLASSES
            .iter()
            .map(|info| BuiltinClass {
                name: info.name.to_string(),
                parent: info.parent.map(str::to_string),
                methods: info
                    .methods
                    .iter()
                    .map(|m| (m.selector.to_string(), m.arity))
                    .collect(),
            })
            .collect();
        Self { classes }
    }

    /// Add (or replace) a builtin class.
    pub fn with_class(mut self, name: impl Into<String>, parent: Option<&str>) -> Self {
        let name = name.into();
        self.classes.retain(|c| c.name != name);
        self.classes.push(BuiltinClass {
            name,
            parent: parent.map(str::to_string),
            methods: Vec::new(),
        });
        self
    }

    /// Add a selector to an existing builtin class. Unknown classes are ignored.
    pub fn with_method(mut self, class: &str, selector: impl Into<String>, arity: usize) -> Self {
        let selector = selector.into();
        if let Some(entry) = self.classes.iter_mut().find(|c| c.name == class) {
            entry.methods.retain(|(s, _)| *s != selector);
            entry.methods.push((selector, arity));
        }
        self
    }

    pub fn classes(&self) -> &[BuiltinClass] {
        &self.classes
    }

    pub fn get(&self, name: &str) -> Option<&BuiltinClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Arity of a selector declared directly on a builtin class (inheritance is not consulted).
    pub fn arity_of(&self, class: &str, selector: &str) -> Option<usize> {
        self.get(class)?
            .methods
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, arity)| *arity)
    }
}

impl Default for BuiltinTable {
    fn default() -> Self {
        Self::standard()
    }
}

// --- helpers -----------------------------------------------------------------

const fn method(selector: &'static str, arity: usize) -> BuiltinMethod {
    BuiltinMethod { selector, arity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::selectors;

    #[test]
    fn registry_arities_match_selector_shape() {
        for class in BUILTIN_CLASSES {
            for m in class.methods {
                assert_eq!(m.arity, selectors::arity(m.selector), "{}>>{}", class.name, m.selector);
            }
        }
    }

    #[test]
    fn every_parent_is_registered() {
        for class in BUILTIN_CLASSES {
            if let Some(parent) = class.parent {
                assert!(from_str(parent).is_some(), "unknown parent {parent}");
            }
        }
    }

    #[test]
    fn standard_table_mirrors_registry() {
        let table = BuiltinTable::standard();
        assert_eq!(table.classes().len(), BUILTIN_CLASSES.len());
        assert_eq!(table.arity_of("Integer", "from:"), Some(1));
        assert_eq!(table.arity_of("Integer", "new"), Some(0));
        assert_eq!(table.arity_of("String", "plus:"), Some(1));
        assert_eq!(table.get("Integer").and_then(|c| c.parent.as_deref()), Some(OBJECT));
    }

    #[test]
    fn object_declares_no_selectors() {
        let table = BuiltinTable::standard();
        assert!(table.get(OBJECT).is_some_and(|c| c.methods.is_empty()));
        assert_eq!(table.arity_of("String", "new"), None);
        assert_eq!(table.arity_of("String", "from:"), None);
    }

    #[test]
    fn table_is_extensible() {
        let table = BuiltinTable::standard()
            .with_class("Block", Some(OBJECT))
            .with_method("Block", "value:", 1)
            .with_method("Missing", "foo", 0);
        assert!(table.contains("Block"));
        assert_eq!(table.arity_of("Block", "value:"), Some(1));
        assert!(!table.contains("Missing"));
    }

    #[test]
    fn replacing_a_class_drops_its_methods() {
        let table = BuiltinTable::standard().with_class("String", Some(OBJECT));
        assert_eq!(table.arity_of("String", "plus:"), None);
    }
}
