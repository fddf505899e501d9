//! Structural scanner for SOL25.
//!
//! The scanner walks the source line by line and recognizes the outer shape of a program: class headers, method
//! headers and the raw text of each method's block. It does not look inside block bodies beyond bracket matching;
//! that is the splitter's and parser's job.
//!
//! ## Module Structure
//!
//! - `cursor` - line queue with push-back for text left over after a unit ends mid-line
//! - `header` - class, method and block header recognizers
//! - this module - the state machine and the program description capture
//!
//! ## Notes
//! - The program description is taken from `Main>>run` only, in this order of preference: the header comment
//!   (`run "text" [ ... ]`), a comment at the very start of the block body, then the first comment on the line
//!   right after the block closes. The first one found wins.
//! - Empty descriptions are ignored.

mod cursor;
mod header;

pub use cursor::{LineCursor, SourceLine};
pub use header::{BlockHeader, ClassHeader, MethodHeader, parse_class_header, parse_method_header, split_block_header};

use crate::diagnostics::CompileError;
use crate::lexer::{BracketDepth, first_comment, skip_leading_comments};

const ENTRY_CLASS: &str = "Main";
const ENTRY_SELECTOR: &str = "run";

/// Raw text of a block, parameters already split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub parameters: Vec<String>,
    /// Everything between the parameter list (or `[`) and the matching `]`, lines joined with `\n`.
    pub body: String,
    /// Line of the `[`.
    pub line: usize,
    /// Line breaks between the `[` and the start of `body`.
    pub body_line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedMethod {
    pub selector: String,
    pub description: Option<String>,
    pub block: RawBlock,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedClass {
    pub name: String,
    pub parent: Option<String>,
    pub methods: Vec<ScannedMethod>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannedProgram {
    pub classes: Vec<ScannedClass>,
    pub description: Option<String>,
}

/// Scan `source` into classes, methods and raw blocks.
///
/// ## Errors
/// - Lexical errors for comments or strings left open.
/// - Syntax errors for malformed headers, stray text, and classes or blocks still open at end of input.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan(source: &str) -> Result<ScannedProgram, CompileError> {
    let program = Scanner::new(source).run()?;
    tracing::debug!(classes = program.classes.len(), "scanned program structure");
    Ok(program)
}

struct PendingMethod {
    selector: String,
    description: Option<String>,
    line: usize,
}

struct OpenBlock {
    /// Text after the opening `[`, accumulated across lines.
    text: String,
    depth: BracketDepth,
    line: usize,
}

enum ScanState {
    ExpectClass,
    InClass(ScannedClass),
    ExpectBlock(ScannedClass, PendingMethod),
    InBlock(ScannedClass, PendingMethod, OpenBlock),
}

struct Scanner {
    cursor: LineCursor,
    classes: Vec<ScannedClass>,
    description: Option<String>,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            cursor: LineCursor::new(source),
            classes: Vec::new(),
            description: None,
        }
    }

    fn run(mut self) -> Result<ScannedProgram, CompileError> {
        let mut state = ScanState::ExpectClass;
        while let Some(line) = self.cursor.next_line() {
            state = self.step(state, &line).map_err(|e| e.or_line(line.number))?;
        }

        let last = self.cursor.last_number();
        match state {
            ScanState::ExpectClass => Ok(ScannedProgram {
                classes: self.classes,
                description: self.description,
            }),
            ScanState::InClass(class) => {
                Err(CompileError::syntax(format!("class '{}' is missing its closing '}}'", class.name)).at_line(last))
            }
            ScanState::ExpectBlock(class, method) => Err(CompileError::syntax(format!(
                "method '{}>>{}' has no block",
                class.name, method.selector
            ))
            .at_line(last)),
            ScanState::InBlock(class, method, open) => Err(CompileError::syntax(format!(
                "block of method '{}>>{}' is missing its closing ']'",
                class.name, method.selector
            ))
            .at_line(last)
            .with_note(format!("the block opens at line {}", open.line))),
        }
    }

    fn step(&mut self, state: ScanState, line: &SourceLine) -> Result<ScanState, CompileError> {
        match state {
            ScanState::ExpectClass => self.expect_class(line),
            ScanState::InClass(class) => self.in_class(class, line),
            ScanState::ExpectBlock(class, method) => self.expect_block(class, method, line),
            ScanState::InBlock(class, method, open) => self.continue_block(class, method, open, line),
        }
    }

    fn expect_class(&mut self, line: &SourceLine) -> Result<ScanState, CompileError> {
        let text = skip_leading_comments(line.text.trim())?;
        if text.is_empty() {
            return Ok(ScanState::ExpectClass);
        }

        let header = parse_class_header(text)?;
        tracing::trace!(class = header.name, line = line.number, "class header");
        if !header.rest.is_empty() {
            self.cursor.push_back(line.number, header.rest);
        }
        Ok(ScanState::InClass(ScannedClass {
            name: header.name.to_string(),
            parent: header.parent.map(str::to_string),
            methods: Vec::new(),
            line: line.number,
        }))
    }

    fn in_class(&mut self, class: ScannedClass, line: &SourceLine) -> Result<ScanState, CompileError> {
        let text = skip_leading_comments(line.text.trim())?;
        if text.is_empty() {
            return Ok(ScanState::InClass(class));
        }

        if let Some(after) = text.strip_prefix('}') {
            let after = after.trim();
            if !after.is_empty() {
                self.cursor.push_back(line.number, after);
            }
            self.classes.push(class);
            return Ok(ScanState::ExpectClass);
        }

        let header = parse_method_header(text)?;
        if is_entry_point(&class.name, header.selector) {
            if let Some(description) = header.description {
                self.capture_description(description);
            }
        }
        let method = PendingMethod {
            selector: header.selector.to_string(),
            description: header.description.map(str::to_string),
            line: line.number,
        };

        if header.rest.is_empty() {
            Ok(ScanState::ExpectBlock(class, method))
        } else if header.rest.starts_with('[') {
            self.open_block(class, method, header.rest, line.number)
        } else {
            Err(CompileError::syntax(format!(
                "expected '[' after method header '{}', found '{}'",
                method.selector, header.rest
            )))
        }
    }

    fn expect_block(
        &mut self,
        class: ScannedClass,
        method: PendingMethod,
        line: &SourceLine,
    ) -> Result<ScanState, CompileError> {
        let text = skip_leading_comments(line.text.trim())?;
        if text.is_empty() {
            Ok(ScanState::ExpectBlock(class, method))
        } else if text.starts_with('[') {
            self.open_block(class, method, text, line.number)
        } else {
            Err(CompileError::syntax(format!(
                "expected '[' to open the block of method '{}'",
                method.selector
            )))
        }
    }

    /// `text` starts with the opening `[`.
    fn open_block(
        &mut self,
        class: ScannedClass,
        method: PendingMethod,
        text: &str,
        number: usize,
    ) -> Result<ScanState, CompileError> {
        let mut depth = BracketDepth::new();
        match depth.feed(text)? {
            Some(close) => self.close_block(class, method, &text[1..close], &text[close + 1..], number, number),
            None => Ok(ScanState::InBlock(
                class,
                method,
                OpenBlock {
                    text: text[1..].to_string(),
                    depth,
                    line: number,
                },
            )),
        }
    }

    fn continue_block(
        &mut self,
        class: ScannedClass,
        method: PendingMethod,
        mut open: OpenBlock,
        line: &SourceLine,
    ) -> Result<ScanState, CompileError> {
        open.text.push('\n');
        match open.depth.feed(&line.text)? {
            Some(close) => {
                open.text.push_str(&line.text[..close]);
                self.close_block(class, method, &open.text, &line.text[close + 1..], open.line, line.number)
            }
            None => {
                open.text.push_str(&line.text);
                Ok(ScanState::InBlock(class, method, open))
            }
        }
    }

    fn close_block(
        &mut self,
        mut class: ScannedClass,
        method: PendingMethod,
        content: &str,
        trailing: &str,
        block_line: usize,
        number: usize,
    ) -> Result<ScanState, CompileError> {
        let header = split_block_header(content)?;
        let entry = is_entry_point(&class.name, &method.selector);

        if entry {
            let body = header.body.trim_start();
            if body.starts_with('"') {
                if let Some(description) = first_comment(body) {
                    self.capture_description(description);
                }
            }
        }

        let trailing = trailing.trim();
        if !trailing.is_empty() {
            if entry && block_line == number {
                if let Some(description) = first_comment(trailing) {
                    self.capture_description(description);
                }
            }
            self.cursor.push_back(number, trailing);
        }

        tracing::trace!(
            class = %class.name,
            selector = %method.selector,
            params = header.parameters.len(),
            "method block"
        );
        class.methods.push(ScannedMethod {
            selector: method.selector,
            description: method.description,
            block: RawBlock {
                parameters: header.parameters,
                body: header.body.to_string(),
                line: block_line,
                body_line: header.body_line,
            },
            line: method.line,
        });
        Ok(ScanState::InClass(class))
    }

    fn capture_description(&mut self, description: &str) {
        if self.description.is_none() && !description.is_empty() {
            self.description = Some(description.to_string());
        }
    }
}

fn is_entry_point(class: &str, selector: &str) -> bool {
    class == ENTRY_CLASS && selector == ENTRY_SELECTOR
}
