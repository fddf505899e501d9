//! Output configuration for the XML emitter.

/// XML output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Number of spaces per nesting level
    pub indent_width: usize,
    /// Value of the `language` attribute on `<program>`
    pub language: String,
    /// Whether to start the document with `<?xml version="1.0" encoding="UTF-8"?>`
    pub xml_declaration: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            language: "SOL25".to_string(),
            xml_declaration: true,
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }
}
