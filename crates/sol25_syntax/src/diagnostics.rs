//! Diagnostics and error reporting for SOL25
//!
//! Every stage of the front end reports failures as a [`CompileError`]. The [`ErrorKind`] decides the process exit
//! code; the message, line, notes and hints are for humans only.

use std::fmt;

use thiserror::Error;

/// A compile-time error with optional location information
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    /// 1-based source line, when known.
    pub line: Option<usize>,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            kind,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lexical, message)
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, message)
    }

    pub fn missing_main(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingMain, message)
    }

    pub fn undefined(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Undefined, message)
    }

    pub fn arity_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArityMismatch, message)
    }

    pub fn collision(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Collision, message)
    }

    pub fn other_semantic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OtherSemantic, message)
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a line unless one is already recorded.
    pub fn or_line(mut self, line: usize) -> Self {
        self.line.get_or_insert(line);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }
}

impl miette::Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("sol25::{}", self.kind.code_name())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let mut lines: Vec<String> = Vec::new();
        if let Some(line) = self.line {
            lines.push(format!("at line {line}"));
        }
        lines.extend(self.notes.iter().map(|n| format!("note: {n}")));
        lines.extend(self.hints.iter().map(|h| format!("hint: {h}")));
        if lines.is_empty() {
            None
        } else {
            Some(Box::new(lines.join("\n")))
        }
    }
}

/// Error taxonomy; each kind has a fixed process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed comments, strings, escapes or token shapes.
    Lexical,
    /// Malformed class/method/block structure or statements.
    Syntax,
    /// No `Main` class or no `run` method in it.
    MissingMain,
    /// Reference to an unknown class, method or variable.
    Undefined,
    /// Wrong number of arguments or parameters.
    ArityMismatch,
    /// A local variable shadows a block parameter.
    Collision,
    /// Duplicates, inheritance cycles and other semantic errors.
    OtherSemantic,
}

impl ErrorKind {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Lexical => 21,
            ErrorKind::Syntax => 22,
            ErrorKind::MissingMain => 31,
            ErrorKind::Undefined => 32,
            ErrorKind::ArityMismatch => 33,
            ErrorKind::Collision => 34,
            ErrorKind::OtherSemantic => 35,
        }
    }

    fn code_name(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "lexical",
            ErrorKind::Syntax => "syntax",
            ErrorKind::MissingMain => "missing_main",
            ErrorKind::Undefined => "undefined",
            ErrorKind::ArityMismatch => "arity_mismatch",
            ErrorKind::Collision => "collision",
            ErrorKind::OtherSemantic => "semantic",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::MissingMain => write!(f, "missing entry point"),
            ErrorKind::Undefined => write!(f, "undefined symbol"),
            ErrorKind::ArityMismatch => write!(f, "arity mismatch"),
            ErrorKind::Collision => write!(f, "name collision"),
            ErrorKind::OtherSemantic => write!(f, "semantic error"),
        }
    }
}

// ============================================================================
// Error catalog: common errors with consistent wording
// ============================================================================

/// Constructors for errors raised from more than one place.
pub mod errors {
    use super::*;

    pub fn unterminated_comment() -> CompileError {
        CompileError::lexical("unterminated comment").with_note("comments cannot span lines")
    }

    pub fn unterminated_string() -> CompileError {
        CompileError::lexical("unterminated string literal").with_note("string literals cannot span lines")
    }

    pub fn reserved_word(word: &str, role: &str) -> CompileError {
        CompileError::syntax(format!("reserved word '{word}' cannot be used as {role}"))
    }

    pub fn undefined_variable(name: &str, method: &str) -> CompileError {
        CompileError::undefined(format!("undefined variable '{name}' in method '{method}'"))
            .with_hint("variables must be a block parameter, self, super, or assigned earlier in the block")
    }

    pub fn undefined_class(name: &str) -> CompileError {
        CompileError::undefined(format!("undefined class '{name}'"))
    }

    pub fn undefined_selector(class: &str, selector: &str) -> CompileError {
        CompileError::undefined(format!("class '{class}' does not understand '{selector}'"))
    }

    pub fn wrong_argument_count(class: &str, selector: &str, expected: usize, found: usize) -> CompileError {
        CompileError::arity_mismatch(format!(
            "'{class}>>{selector}' expects {expected} argument(s), {found} supplied"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_taxonomy() {
        let expected = [
            (ErrorKind::Lexical, 21),
            (ErrorKind::Syntax, 22),
            (ErrorKind::MissingMain, 31),
            (ErrorKind::Undefined, 32),
            (ErrorKind::ArityMismatch, 33),
            (ErrorKind::Collision, 34),
            (ErrorKind::OtherSemantic, 35),
        ];
        for (kind, code) in expected {
            assert_eq!(kind.exit_code(), code, "{kind:?}");
        }
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = CompileError::syntax("expected '{'").at_line(3);
        assert_eq!(err.to_string(), "syntax error: expected '{'");
        assert_eq!(err.line, Some(3));
    }

    #[test]
    fn or_line_keeps_existing_line() {
        let err = CompileError::lexical("x").at_line(2).or_line(9);
        assert_eq!(err.line, Some(2));
        let err = CompileError::lexical("x").or_line(9);
        assert_eq!(err.line, Some(9));
    }

    #[test]
    fn diagnostic_code_names_kind() {
        use miette::Diagnostic;
        let err = errors::undefined_class("Foo");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("sol25::undefined"));
    }
}
