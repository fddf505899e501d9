//! Pass 0: the program must define `Main` with a `run` method.

use crate::frontend::diagnostics::CompileError;

use super::Analyzer;

pub(crate) const ENTRY_CLASS: &str = "Main";
pub(crate) const ENTRY_SELECTOR: &str = "run";

impl Analyzer<'_> {
    pub(crate) fn check_entry_point(&self) -> Result<(), CompileError> {
        let Some(main) = self.program.class(ENTRY_CLASS) else {
            return Err(CompileError::missing_main(format!("class '{ENTRY_CLASS}' is not defined"))
                .with_hint(format!("define 'class {ENTRY_CLASS} : Object {{ {ENTRY_SELECTOR} [ ] }}'")));
        };
        if main.method(ENTRY_SELECTOR).is_none() {
            return Err(CompileError::missing_main(format!(
                "class '{ENTRY_CLASS}' has no '{ENTRY_SELECTOR}' method"
            ))
            .at_line(main.line));
        }
        Ok(())
    }
}
