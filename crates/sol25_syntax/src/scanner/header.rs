//! Recognizers for the three structural headers: class, method and block.

use sol25_core::lang::{keywords, selectors};

use crate::diagnostics::{CompileError, errors};
use crate::lexer::skip_leading_comments;

/// `class Name [: Parent] {` followed by whatever else was on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader<'a> {
    pub name: &'a str,
    pub parent: Option<&'a str>,
    /// Text after `{`, trimmed.
    pub rest: &'a str,
}

/// `selector ["description"]` followed by whatever else was on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodHeader<'a> {
    pub selector: &'a str,
    pub description: Option<&'a str>,
    /// Text after the header with leading comments skipped.
    pub rest: &'a str,
}

/// The inside of a block literal split into parameters and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader<'a> {
    pub parameters: Vec<String>,
    pub body: &'a str,
    /// Line breaks between the opening `[` and the start of `body`.
    pub body_line: usize,
}

pub fn parse_class_header(text: &str) -> Result<ClassHeader<'_>, CompileError> {
    let rest = text
        .strip_prefix(keywords::as_str(keywords::KeywordId::Class))
        .ok_or_else(|| CompileError::syntax("expected class definition"))?;
    if !rest.starts_with(char::is_whitespace) {
        return Err(CompileError::syntax("expected class name after 'class'"));
    }

    let (name, rest) = split_word(rest.trim_start(), |c| c.is_ascii_alphanumeric() || c == '_');
    if !selectors::is_class_name(name) {
        return Err(CompileError::syntax(format!("invalid class name '{name}'"))
            .with_hint("class names start with an uppercase letter and contain only letters and digits"));
    }

    let mut rest = rest.trim_start();
    let mut parent = None;
    if let Some(after) = rest.strip_prefix(':') {
        let (parent_name, after) = split_word(after.trim_start(), |c| c.is_ascii_alphanumeric() || c == '_');
        if !selectors::is_class_name(parent_name) {
            return Err(CompileError::syntax(format!(
                "invalid parent class name '{parent_name}' for class '{name}'"
            )));
        }
        parent = Some(parent_name);
        rest = after.trim_start();
    }

    let rest = rest
        .strip_prefix('{')
        .ok_or_else(|| CompileError::syntax(format!("expected '{{' after header of class '{name}'")))?;
    Ok(ClassHeader {
        name,
        parent,
        rest: rest.trim(),
    })
}

pub fn parse_method_header(text: &str) -> Result<MethodHeader<'_>, CompileError> {
    let (selector, rest) = split_word(text, |c| c.is_ascii_alphanumeric() || c == '_' || c == ':');
    if selector.is_empty() {
        return Err(CompileError::syntax(format!("expected method definition, found '{}'", text.trim())));
    }
    if !selectors::is_valid_selector(selector) {
        return Err(CompileError::syntax(format!("invalid method selector '{selector}'")));
    }
    if let Some(word) = selectors::reserved_part(selector) {
        return Err(errors::reserved_word(word, "a method selector"));
    }

    let rest = rest.trim_start();
    let (description, rest) = match rest.strip_prefix('"') {
        Some(after) => {
            let close = after.find('"').ok_or_else(errors::unterminated_comment)?;
            let description = &after[..close];
            ((!description.is_empty()).then_some(description), &after[close + 1..])
        }
        None => (None, rest),
    };

    Ok(MethodHeader {
        selector,
        description,
        rest: skip_leading_comments(rest)?,
    })
}

/// Split the text between a block's brackets into `:param` names and the body.
///
/// Accepted forms: `:a :b | body`, `| body`, and a bare `body`.
pub fn split_block_header(content: &str) -> Result<BlockHeader<'_>, CompileError> {
    let mut rest = content.trim_start();
    let mut parameters = Vec::new();
    while let Some(after) = rest.strip_prefix(':') {
        let (name, after) = split_word(after, |c| c.is_ascii_alphanumeric() || c == '_');
        if !selectors::is_identifier(name) {
            return Err(CompileError::syntax(format!("malformed block parameter ':{name}'")));
        }
        if keywords::is_reserved(name) {
            return Err(errors::reserved_word(name, "a block parameter"));
        }
        parameters.push(name.to_string());
        rest = after.trim_start();
    }

    let body = match rest.strip_prefix('|') {
        Some(after) => after,
        None if parameters.is_empty() => content,
        None => return Err(CompileError::syntax("expected '|' after block parameters")),
    };
    let body_line = content[..content.len() - body.len()].matches('\n').count();
    Ok(BlockHeader {
        parameters,
        body,
        body_line,
    })
}

fn split_word(text: &str, accept: impl Fn(char) -> bool) -> (&str, &str) {
    let end = text.find(|c: char| !accept(c)).unwrap_or(text.len());
    text.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;

    #[test]
    fn class_header_with_parent_and_rest() {
        let header = parse_class_header("class Main : Object { run [ ] }").unwrap();
        assert_eq!(header.name, "Main");
        assert_eq!(header.parent, Some("Object"));
        assert_eq!(header.rest, "run [ ] }");
    }

    #[test]
    fn class_header_without_spaces_around_colon() {
        let header = parse_class_header("class A:B{").unwrap();
        assert_eq!((header.name, header.parent, header.rest), ("A", Some("B"), ""));
    }

    #[test]
    fn class_header_errors_are_syntactic() {
        for bad in ["class main {", "classMain {", "class Main", "class Main : object {", "klass Main {"] {
            assert_eq!(parse_class_header(bad).unwrap_err().kind, ErrorKind::Syntax, "{bad}");
        }
    }

    #[test]
    fn method_header_with_description_and_block() {
        let header = parse_method_header("run \"entry point\" [ x := 1. ]").unwrap();
        assert_eq!(header.selector, "run");
        assert_eq!(header.description, Some("entry point"));
        assert_eq!(header.rest, "[ x := 1. ]");
    }

    #[test]
    fn keyword_method_header_alone() {
        let header = parse_method_header("at:put:").unwrap();
        assert_eq!(header.selector, "at:put:");
        assert_eq!(header.description, None);
        assert_eq!(header.rest, "");
    }

    #[test]
    fn reserved_selectors_are_rejected() {
        assert_eq!(parse_method_header("self [ ]").unwrap_err().kind, ErrorKind::Syntax);
        assert_eq!(parse_method_header("nil: [ :x | ]").unwrap_err().kind, ErrorKind::Syntax);
    }

    #[test]
    fn malformed_selectors_are_rejected() {
        assert_eq!(parse_method_header("Run [ ]").unwrap_err().kind, ErrorKind::Syntax);
        assert_eq!(parse_method_header("a::b [ ]").unwrap_err().kind, ErrorKind::Syntax);
    }

    #[test]
    fn block_header_forms() {
        let h = split_block_header(" :a :b | x := a. ").unwrap();
        assert_eq!(h.parameters, vec!["a", "b"]);
        assert_eq!(h.body, " x := a. ");

        let h = split_block_header(" | x := 1. ").unwrap();
        assert!(h.parameters.is_empty());
        assert_eq!(h.body, " x := 1. ");

        let h = split_block_header(" x := 1. ").unwrap();
        assert!(h.parameters.is_empty());
        assert_eq!(h.body, " x := 1. ");
    }

    #[test]
    fn block_header_counts_lines_before_body() {
        assert_eq!(split_block_header("\n  x := 1.\n").unwrap().body_line, 0);
        let h = split_block_header(" :a\n :b\n | x := a.").unwrap();
        assert_eq!(h.body, " x := a.");
        assert_eq!(h.body_line, 2);
    }

    #[test]
    fn block_parameter_errors() {
        assert_eq!(split_block_header(":a x := 1.").unwrap_err().kind, ErrorKind::Syntax);
        assert_eq!(split_block_header(": a | ").unwrap_err().kind, ErrorKind::Syntax);
        assert_eq!(split_block_header(":self | ").unwrap_err().kind, ErrorKind::Syntax);
        assert_eq!(split_block_header(":X | ").unwrap_err().kind, ErrorKind::Syntax);
    }
}
