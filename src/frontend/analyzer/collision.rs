//! Pass 6: a block may not assign to one of its own parameters.

use crate::frontend::ast::for_each_block;
use crate::frontend::diagnostics::CompileError;

use super::{Analyzer, methods_of};

impl Analyzer<'_> {
    pub(crate) fn check_collisions(&self) -> Result<(), CompileError> {
        for ctx in methods_of(self.program) {
            let mut collision = None;
            for_each_block(&ctx.method.block, &mut |block| {
                if collision.is_some() {
                    return;
                }
                collision = block
                    .instructions
                    .iter()
                    .find(|assign| block.parameters.contains(&assign.var))
                    .map(|assign| (assign.var.clone(), block.line));
            });
            if let Some((name, line)) = collision {
                return Err(CompileError::collision(format!(
                    "assignment to parameter '{name}' in '{}'",
                    ctx.qualified_name()
                ))
                .with_hint("parameters are read-only; assign to a new local variable instead")
                .at_line(line));
            }
        }
        Ok(())
    }
}
