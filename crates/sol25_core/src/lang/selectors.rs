//! Identifier and selector shapes.
//!
//! SOL25 names come in three forms:
//! - identifiers (`[a-z_][A-Za-z0-9_]*`) for variables, parameters and unary selectors,
//! - class names (`[A-Z][A-Za-z0-9]*`),
//! - keyword selectors: one or more `identifier:` parts concatenated (`from:`, `value:with:`).
//!
//! ## Examples
//! ```rust
//! use sol25_core::lang::selectors;
//!
//! assert_eq!(selectors::arity("ifTrue:ifFalse:"), 2);
//! assert_eq!(selectors::keyword_parts("at:put:"), vec!["at:", "put:"]);
//! assert!(selectors::is_valid_selector("new"));
//! assert!(!selectors::is_valid_selector("at:put"));
//! ```

use super::keywords;

/// Whether `s` is a lowercase-initial identifier (`[a-z_][A-Za-z0-9_]*`).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `s` is an uppercase-initial class name (`[A-Z][A-Za-z0-9]*`).
pub fn is_class_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

/// Whether `s` is a single keyword part such as `value:`.
pub fn is_keyword_part(s: &str) -> bool {
    s.strip_suffix(':').is_some_and(is_identifier)
}

/// Whether `s` is a well-formed unary or keyword selector.
///
/// Reserved words are not checked here; see [`reserved_part`].
pub fn is_valid_selector(s: &str) -> bool {
    if !s.contains(':') {
        return is_identifier(s);
    }
    s.ends_with(':') && keyword_parts(s).iter().all(|part| is_keyword_part(part))
}

/// Split a keyword selector into its `name:` parts; a unary selector yields itself.
pub fn keyword_parts(selector: &str) -> Vec<&str> {
    if !selector.contains(':') {
        return vec![selector];
    }
    selector.split_inclusive(':').collect()
}

/// Number of arguments a selector takes (the number of `:` it contains).
pub fn arity(selector: &str) -> usize {
    selector.matches(':').count()
}

/// First part of a selector with any trailing `:` removed (`plus:plus:` → `plus`).
pub fn stem(selector: &str) -> &str {
    selector.split(':').next().unwrap_or(selector)
}

/// The first reserved word used as a selector part, if any (`true:` → `Some("true")`).
pub fn reserved_part(selector: &str) -> Option<&str> {
    selector
        .split(':')
        .filter(|part| !part.is_empty())
        .find(|part| keywords::is_reserved(part))
}
