//! String literal scanning for the SOL25 lexer
//!
//! A string literal is delimited by apostrophes and must close on the line it opens on. Inside it a backslash
//! starts a two-character escape; only `\'`, `\\` and `\n` exist.

use crate::diagnostics::{CompileError, errors};

/// Scan the string literal whose opening `'` is at byte offset `start` of `text`.
///
/// ## Returns
/// - The byte offset just past the closing `'`.
///
/// ## Errors
/// - Lexical error for an unknown escape, a raw newline, or a missing closing `'`.
pub fn scan_string(text: &str, start: usize) -> Result<usize, CompileError> {
    let mut chars = text[start + 1..].char_indices();
    while let Some((offset, c)) = chars.next() {
        match c {
            '\'' => return Ok(start + 1 + offset + 1),
            '\\' => match chars.next() {
                Some((_, '\'' | '\\' | 'n')) => {}
                Some((_, other)) => {
                    return Err(CompileError::lexical(format!("invalid escape sequence '\\{other}'"))
                        .with_hint("only \\', \\\\ and \\n are allowed in string literals"));
                }
                None => return Err(errors::unterminated_string()),
            },
            '\n' | '\r' => return Err(errors::unterminated_string()),
            _ => {}
        }
    }
    Err(errors::unterminated_string())
}
