//! Statement splitter for block bodies.
//!
//! A block body is a sequence of `var := expr.` statements. Periods inside nested blocks (`[ ... ]`),
//! parentheses and string literals do not end a statement, so splitting needs to track nesting:
//!
//! ```text
//! x := [ :a | b := a. ].  y := 'a.b'.
//! └──────── 1 ─────────┘  └─── 2 ───┘
//! ```

use crate::diagnostics::CompileError;
use crate::lexer::{scan_string, strip_comments};

/// One statement of a block body, without its terminating period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Trimmed statement text; may span lines.
    pub text: String,
    /// Whether a `.` followed the statement.
    pub terminated: bool,
    /// 0-based line offset of the statement's first character within the body.
    pub line: usize,
}

/// Split a block body into statements.
///
/// Comments are removed first (each becomes a space). Whitespace-only text after the last period produces no
/// statement; any other trailing text is returned with `terminated: false` for the parser to reject.
///
/// ## Errors
/// - Lexical error for a comment or string literal left open.
pub fn split(body: &str) -> Result<Vec<Statement>, CompileError> {
    let cleaned = body.lines().map(strip_comments).collect::<Result<Vec<_>, _>>()?.join("\n");

    let bytes = cleaned.as_bytes();
    let mut statements = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut newlines = 0;
    let mut start_newlines = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\'' => {
                i = scan_string(&cleaned, i)?;
                continue;
            }
            b'\n' => newlines += 1,
            b'[' | b'(' => depth += 1,
            b']' | b')' => depth = depth.saturating_sub(1),
            b'.' if depth == 0 => {
                statements.push(statement(&cleaned[start..i], true, start_newlines));
                start = i + 1;
                start_newlines = newlines;
            }
            _ => {}
        }
        i += 1;
    }

    if !cleaned[start..].trim().is_empty() {
        statements.push(statement(&cleaned[start..], false, start_newlines));
    }
    Ok(statements)
}

fn statement(raw: &str, terminated: bool, newlines_before: usize) -> Statement {
    let text = raw.trim_start();
    let leading = &raw[..raw.len() - text.len()];
    Statement {
        text: text.trim_end().to_string(),
        terminated,
        line: newlines_before + leading.matches('\n').count(),
    }
}
