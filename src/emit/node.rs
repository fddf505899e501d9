//! In-memory XML tree handed from the serializer to the writer.
//!
//! Attribute values are kept as segments rather than plain strings: most text must be entity-escaped by the
//! writer, but a few markers (`&apos;`, `&nbsp;`, `&#10;`) are already entities and must be written verbatim.

/// One piece of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text; `&`, `<`, `>` and `"` are escaped on output.
    Text(String),
    /// A complete entity reference written as-is.
    Entity(&'static str),
}

pub const APOS: &str = "&apos;";
pub const NBSP: &str = "&nbsp;";
pub const LINE_BREAK: &str = "&#10;";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttrValue {
    segments: Vec<Segment>,
}

impl AttrValue {
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![Segment::Text(text)],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn push_char(&mut self, c: char) {
        match self.segments.last_mut() {
            Some(Segment::Text(text)) => text.push(c),
            _ => self.segments.push(Segment::Text(c.to_string())),
        }
    }

    fn push_entity(&mut self, entity: &'static str) {
        self.segments.push(Segment::Entity(entity));
    }

    /// Value of a string literal: the source text between the quotes, with each `\'` written as `\&apos;`.
    ///
    /// ## Examples
    /// ```rust
    /// use sol25::emit::{AttrValue, Segment};
    ///
    /// let value = AttrValue::string_literal(r"it\'s");
    /// assert_eq!(
    ///     value.segments(),
    ///     &[Segment::Text("it\\".into()), Segment::Entity("&apos;"), Segment::Text("s".into())]
    /// );
    /// ```
    pub fn string_literal(raw: &str) -> Self {
        let mut value = Self::default();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                value.push_char(c);
                continue;
            }
            value.push_char('\\');
            match chars.next() {
                Some('\'') => value.push_entity(APOS),
                Some(escaped) => value.push_char(escaped),
                None => {}
            }
        }
        value
    }

    /// Value of the program description.
    ///
    /// Line breaks (real ones and the two-character sequence `\n`) are folded into runs: a single break becomes
    /// `&nbsp;`, a run of `k >= 2` breaks becomes `k` copies of `&#10;`.
    pub fn description(raw: &str) -> Self {
        let mut value = Self::default();
        let mut breaks = 0usize;
        let mut chars = raw.chars().peekable();
        while let Some(c) = chars.next() {
            let is_break = match c {
                '\n' => true,
                '\\' if chars.peek() == Some(&'n') => {
                    chars.next();
                    true
                }
                _ => false,
            };
            if is_break {
                breaks += 1;
                continue;
            }
            value.flush_breaks(breaks);
            breaks = 0;
            value.push_char(c);
        }
        value.flush_breaks(breaks);
        value
    }

    fn flush_breaks(&mut self, count: usize) {
        match count {
            0 => {}
            1 => self.push_entity(NBSP),
            _ => (0..count).for_each(|_| self.push_entity(LINE_BREAK)),
        }
    }
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, AttrValue)>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children.extend(children);
        self
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        AttrValue::text(text)
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        AttrValue::text(text)
    }
}

impl From<usize> for AttrValue {
    fn from(n: usize) -> Self {
        AttrValue::text(n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    #[test]
    fn test_plain_string_literal() {
        assert_eq!(AttrValue::string_literal("hello").segments(), &[text("hello")]);
        assert!(AttrValue::string_literal("").segments().is_empty());
    }

    #[test]
    fn test_other_escapes_are_kept() {
        assert_eq!(AttrValue::string_literal(r"a\nb\\c").segments(), &[text(r"a\nb\\c")]);
    }

    #[test]
    fn test_escaped_backslash_before_escaped_apostrophe() {
        assert_eq!(
            AttrValue::string_literal(r"\\\'").segments(),
            &[text(r"\\\"), Segment::Entity(APOS)]
        );
    }

    #[test]
    fn test_description_single_break_is_nbsp() {
        assert_eq!(
            AttrValue::description("a\nb").segments(),
            &[text("a"), Segment::Entity(NBSP), text("b")]
        );
        assert_eq!(
            AttrValue::description(r"a\nb").segments(),
            &[text("a"), Segment::Entity(NBSP), text("b")]
        );
    }

    #[test]
    fn test_description_break_runs() {
        assert_eq!(
            AttrValue::description("a\\n\nb").segments(),
            &[text("a"), Segment::Entity(LINE_BREAK), Segment::Entity(LINE_BREAK), text("b")]
        );
        assert_eq!(
            AttrValue::description(r"x\n\n\n").segments(),
            &[
                text("x"),
                Segment::Entity(LINE_BREAK),
                Segment::Entity(LINE_BREAK),
                Segment::Entity(LINE_BREAK)
            ]
        );
    }

    #[test]
    fn test_description_backslash_without_n() {
        assert_eq!(AttrValue::description(r"a\b").segments(), &[text(r"a\b")]);
    }

    #[test]
    fn test_node_builder_keeps_order() {
        let node = XmlNode::new("send")
            .attr("selector", "plus:")
            .child(XmlNode::new("expr"))
            .children([XmlNode::new("arg").attr("order", 1usize)]);
        assert_eq!(node.attributes[0].0, "selector");
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[1].name, "arg");
    }
}
