//! Output writer with indentation tracking
//!
//! Renders an [`XmlNode`] tree as indented XML text.

use super::config::EmitConfig;
use super::node::{AttrValue, Segment, XmlNode};

/// Writer that tracks indentation and builds the XML document
pub struct XmlWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Configuration
    config: EmitConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl XmlWriter {
    pub fn new(config: EmitConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.config.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write a whole document: optional declaration, then `root`.
    pub fn document(&mut self, root: &XmlNode) {
        if self.config.xml_declaration {
            self.writeln(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        }
        self.element(root);
    }

    /// Write one element, its attributes and (recursively) its children, one element per line.
    pub fn element(&mut self, node: &XmlNode) {
        self.write("<");
        self.write(node.name);
        for (name, value) in &node.attributes {
            self.write(" ");
            self.write(name);
            self.write("=\"");
            self.attr_value(value);
            self.write("\"");
        }

        if node.children.is_empty() {
            self.writeln("/>");
            return;
        }

        self.writeln(">");
        self.indent();
        for child in &node.children {
            self.element(child);
        }
        self.dedent();
        self.write("</");
        self.write(node.name);
        self.writeln(">");
    }

    fn attr_value(&mut self, value: &AttrValue) {
        for segment in value.segments() {
            match segment {
                Segment::Text(text) => {
                    let escaped = escape_attr(text);
                    self.write(&escaped);
                }
                Segment::Entity(entity) => self.write(entity),
            }
        }
    }
}

/// Escape text for a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
