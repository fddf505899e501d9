//! Define the reserved word vocabulary for the SOL25 language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and how each word may be used.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Nil` is a class name, `nil` is the literal.
//! - A reserved word can never be a method selector, a block parameter or an assignment target.
//!
//! ## Examples
//! ```rust
//! use sol25_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("true"), Some(KeywordId::True));
//! assert!(keywords::is_reserved("class"));
//! assert!(!keywords::is_reserved("value"));
//! ```

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Class,
    SelfKw,
    Super,
    Nil,
    True,
    False,
}

/// High-level grouping for diagnostics and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces a declaration (`class`).
    Definition,
    /// Names the receiver of the current method (`self`, `super`).
    Receiver,
    /// A literal value (`nil`, `true`, `false`).
    Literal,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// Class of the literal this word denotes, for literal keywords.
    pub literal_class: Option<&'static str>,
}

/// Registry of all reserved words.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Class, "class", KeywordCategory::Definition, None),
    info(KeywordId::SelfKw, "self", KeywordCategory::Receiver, None),
    info(KeywordId::Super, "super", KeywordCategory::Receiver, None),
    info(KeywordId::Nil, "nil", KeywordCategory::Literal, Some("Nil")),
    info(KeywordId::True, "true", KeywordCategory::Literal, Some("True")),
    info(KeywordId::False, "false", KeywordCategory::Literal, Some("False")),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Whether `s` is one of the reserved words.
pub fn is_reserved(s: &str) -> bool {
    from_str(s).is_some()
}

/// Literal class for `nil`/`true`/`false`, e.g. `Some("Nil")` for `"nil"`.
///
/// ## Examples
/// ```rust
/// use sol25_core::lang::keywords;
///
/// assert_eq!(keywords::literal_class("false"), Some("False"));
/// assert_eq!(keywords::literal_class("self"), None);
/// ```
pub fn literal_class(s: &str) -> Option<&'static str> {
    from_str(s).and_then(|id| info_for(id).literal_class)
}

/// Whether `s` may be referenced as a variable without being declared (`self`, `super`).
pub fn is_receiver(s: &str) -> bool {
    from_str(s).is_some_and(|id| category(id) == KeywordCategory::Receiver)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    literal_class: Option<&'static str>,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        literal_class,
    }
}
