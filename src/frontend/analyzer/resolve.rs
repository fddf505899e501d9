//! Pass 4: every name used in an expression must refer to something.
//!
//! Scope rules:
//! - a block sees its own parameters, `self`, `super`, and the locals assigned by earlier statements;
//! - a nested block literal also sees everything visible where it appears;
//! - locals assigned inside a nested block are not visible outside it;
//! - the right-hand side of an assignment is resolved before its variable is bound.

use std::collections::HashSet;

use sol25_core::lang::keywords;

use crate::frontend::ast::*;
use crate::frontend::diagnostics::{CompileError, errors};

use super::{Analyzer, MethodContext, MethodTable, methods_of};

type Scope<'p> = HashSet<&'p str>;

impl<'p> Analyzer<'p> {
    pub(crate) fn resolve_references(&self, table: &MethodTable) -> Result<(), CompileError> {
        for ctx in methods_of(self.program) {
            let resolver = Resolver { table, ctx };
            resolver
                .block(&ctx.method.block, &Scope::new())
                .map_err(|e| e.or_line(ctx.method.line))?;
        }
        Ok(())
    }
}

struct Resolver<'p, 't> {
    table: &'t MethodTable,
    ctx: MethodContext<'p>,
}

impl<'p> Resolver<'p, '_> {
    fn block(&self, block: &'p Block, outer: &Scope<'p>) -> Result<(), CompileError> {
        let mut scope = outer.clone();
        scope.extend(block.parameters.iter().map(String::as_str));
        for assign in &block.instructions {
            self.expr(&assign.expr, &scope).map_err(|e| e.or_line(block.line))?;
            scope.insert(assign.var.as_str());
        }
        Ok(())
    }

    fn expr(&self, expr: &'p Expr, scope: &Scope<'p>) -> Result<(), CompileError> {
        match expr {
            Expr::Literal(literal) => self.literal(literal),
            Expr::Var(name) => {
                if keywords::is_receiver(name) || scope.contains(name.as_str()) {
                    Ok(())
                } else {
                    Err(errors::undefined_variable(name, &self.ctx.qualified_name()))
                }
            }
            Expr::Send(send) => {
                self.expr(&send.receiver, scope)?;
                for arg in &send.args {
                    self.expr(arg, scope)?;
                }
                self.class_side_selector(send)
            }
            Expr::Block(block) => self.block(block, scope),
        }
    }

    fn literal(&self, literal: &Literal) -> Result<(), CompileError> {
        if literal.class == LiteralClass::Class && !self.table.contains_class(&literal.value) {
            return Err(errors::undefined_class(&literal.value)
                .with_note(format!("referenced in '{}'", self.ctx.qualified_name())));
        }
        Ok(())
    }

    /// A send to a class reference must name a selector of that class, own or inherited.
    fn class_side_selector(&self, send: &Send) -> Result<(), CompileError> {
        let Some(class) = send.receiver.as_class_reference() else {
            return Ok(());
        };
        if self.table.responds_to(class, &send.selector) {
            return Ok(());
        }
        Err(errors::undefined_selector(class, &send.selector))
    }
}
