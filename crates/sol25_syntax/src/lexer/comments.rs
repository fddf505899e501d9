//! Comment handling for the SOL25 lexer
//!
//! A comment is any text between two `"` on one line, outside string literals.

use crate::diagnostics::{CompileError, errors};

/// Remove every comment from a single line, keeping string literals intact.
///
/// Each comment is replaced by one space so that `a"c"b` still separates `a` from `b`. A string literal left open
/// is copied through unchanged; reporting it is left to the stage that parses the string.
///
/// ## Errors
/// - Lexical error if a comment opens but does not close on the line.
pub fn strip_comments(line: &str) -> Result<String, CompileError> {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                out.push(c);
                while let Some(s) = chars.next() {
                    out.push(s);
                    if s == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    } else if s == '\'' {
                        break;
                    }
                }
            }
            '"' => {
                if !chars.by_ref().any(|s| s == '"') {
                    return Err(errors::unterminated_comment());
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Skip whitespace and any comments at the start of `text`.
///
/// ## Errors
/// - Lexical error if a leading comment is not closed.
pub fn skip_leading_comments(text: &str) -> Result<&str, CompileError> {
    let mut rest = text.trim_start();
    while let Some(after) = rest.strip_prefix('"') {
        let close = after.find('"').ok_or_else(errors::unterminated_comment)?;
        rest = after[close + 1..].trim_start();
    }
    Ok(rest)
}

/// Content of the first complete comment in `text`, outside string literals.
pub fn first_comment(text: &str) -> Option<&str> {
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\'' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '\'' => in_string = true,
            '"' => {
                let body = &text[i + 1..];
                return body.find('"').map(|close| &body[..close]);
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;

    #[test]
    fn strips_comments() {
        assert_eq!(strip_comments("x := 1. \"set x\"").unwrap(), "x := 1.  ");
        assert_eq!(strip_comments("a\"c\"b").unwrap(), "a b");
    }

    #[test]
    fn keeps_quotes_inside_strings() {
        assert_eq!(strip_comments("s := 'say \"hi\"'.").unwrap(), "s := 'say \"hi\"'.");
    }

    #[test]
    fn escaped_apostrophe_does_not_end_string() {
        assert_eq!(strip_comments(r#"s := 'it\'s "x"'."#).unwrap(), r#"s := 'it\'s "x"'."#);
    }

    #[test]
    fn unterminated_comment_is_lexical() {
        let err = strip_comments("x := 1. \"oops").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
    }

    #[test]
    fn skips_leading_comments() {
        assert_eq!(skip_leading_comments("  \"a\" \"b\" }").unwrap(), "}");
        assert_eq!(skip_leading_comments("run").unwrap(), "run");
        assert!(skip_leading_comments("\"open").is_err());
    }

    #[test]
    fn finds_first_comment() {
        assert_eq!(first_comment("] \"entry point\" }"), Some("entry point"));
        assert_eq!(first_comment("'\"not\"' \"yes\""), Some("yes"));
        assert_eq!(first_comment("no comment"), None);
        assert_eq!(first_comment("\"open"), None);
    }
}
