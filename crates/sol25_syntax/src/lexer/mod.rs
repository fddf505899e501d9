//! Character-level scanning for SOL25 source text.
//!
//! SOL25 has no separate token stream: each later stage works on raw text and relies on the helpers here to stay
//! aware of the two quoting forms:
//! - `"..."` comments, which are discarded and may not span lines,
//! - `'...'` string literals, which only allow the escapes `\'`, `\\` and `\n`.
//!
//! ## Module Structure
//!
//! - `comments` - comment stripping and extraction
//! - `strings` - string literal scanning and escape validation
//! - this module - bracket depth tracking across lines and bracket group matching

mod comments;
mod strings;

pub use comments::{first_comment, skip_leading_comments, strip_comments};
pub use strings::scan_string;

use crate::diagnostics::{CompileError, errors};

// ============================================================================
// BRACKET TRACKING
// ----------------------------------------------------------------------------
// A block literal may span many lines. `BracketDepth` is fed one line at a
// time and reports where the outermost `[` is closed:
//
//   "[ :x |"        → depth 1, still open
//   "  y := [ x ]." → depth 2 → 1, still open
//   "] \"done\""    → depth 0 at byte 0 → closed
// ============================================================================

/// Tracks `[`/`]` nesting across lines, ignoring brackets inside strings and comments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BracketDepth {
    depth: usize,
}

impl BracketDepth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Scan one line.
    ///
    /// ## Returns
    /// - `Ok(Some(i))` if the depth returns to zero at byte offset `i` (the closing `]`); the rest of the line is
    ///   left unscanned.
    /// - `Ok(None)` if the brackets are still open at the end of the line.
    ///
    /// ## Errors
    /// - Lexical error for a string literal or comment left open at the end of the line.
    /// - Syntax error for a `]` with nothing open.
    pub fn feed(&mut self, line: &str) -> Result<Option<usize>, CompileError> {
        let bytes = line.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\'' => {
                    i = scan_string(line, i)?;
                    continue;
                }
                b'"' => {
                    let close = line[i + 1..].find('"').ok_or_else(errors::unterminated_comment)?;
                    i += close + 2;
                    continue;
                }
                b'[' => self.depth += 1,
                b']' => {
                    if self.depth == 0 {
                        return Err(CompileError::syntax("unmatched ']'"));
                    }
                    self.depth -= 1;
                    if self.depth == 0 {
                        return Ok(Some(i));
                    }
                }
                _ => {}
            }
            i += 1;
        }
        Ok(None)
    }
}

/// Find the byte offset just past the bracket group that opens at `open` (`(` or `[`).
///
/// Nested groups must close with the matching bracket kind; string literals inside the group are skipped (and
/// validated).
pub fn group_end(text: &str, open: usize) -> Result<usize, CompileError> {
    let bytes = text.as_bytes();
    let mut stack: Vec<u8> = Vec::new();
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\'' => {
                i = scan_string(text, i)?;
                continue;
            }
            b'(' => stack.push(b')'),
            b'[' => stack.push(b']'),
            close @ (b')' | b']') => {
                if stack.pop() != Some(close) {
                    return Err(CompileError::syntax(format!("unmatched '{}'", close as char)));
                }
                if stack.is_empty() {
                    return Ok(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    let open_char = bytes.get(open).map(|b| *b as char).unwrap_or('(');
    Err(CompileError::syntax(format!("unclosed '{open_char}'")))
}
