//! Passes 5 and 7: argument counts of sends and parameter counts of method blocks.

use sol25_core::lang::keywords::{self, KeywordId};
use sol25_core::lang::{builtins, selectors};

use crate::frontend::ast::*;
use crate::frontend::diagnostics::{CompileError, errors};

use super::entry::{ENTRY_CLASS, ENTRY_SELECTOR};
use super::{Analyzer, MethodContext, MethodTable, methods_of};

impl Analyzer<'_> {
    /// Sends whose receiver class is known statically must match the selector's arity in that class.
    ///
    /// The receiver class is known for class references, `self`, and integer and string literals. For a literal
    /// receiver, a selector missing from the class but sharing its first part with one that exists (`plus:plus:`
    /// against `plus:`) is an arity mismatch too.
    pub(crate) fn check_send_arity(&self, table: &MethodTable) -> Result<(), CompileError> {
        for ctx in methods_of(self.program) {
            check_block_sends(&ctx.method.block, ctx, table).map_err(|e| e.or_line(ctx.method.line))?;
        }
        Ok(())
    }

    /// A method's block takes one parameter per `:` in its selector; `Main>>run` takes none.
    pub(crate) fn check_definition_arity(&self) -> Result<(), CompileError> {
        for ctx in methods_of(self.program) {
            let expected = selectors::arity(&ctx.method.selector);
            let found = ctx.method.block.arity();
            if found == expected {
                continue;
            }
            let err = if ctx.class.name == ENTRY_CLASS && ctx.method.selector == ENTRY_SELECTOR {
                CompileError::arity_mismatch(format!(
                    "'{}' must not take parameters, found {found}",
                    ctx.qualified_name()
                ))
            } else {
                CompileError::arity_mismatch(format!(
                    "method '{}' has {expected} selector part(s) but its block declares {found} parameter(s)",
                    ctx.qualified_name()
                ))
            };
            return Err(err.at_line(ctx.method.block.line));
        }
        Ok(())
    }
}

fn check_block_sends(block: &Block, ctx: MethodContext<'_>, table: &MethodTable) -> Result<(), CompileError> {
    for assign in &block.instructions {
        check_expr_sends(&assign.expr, ctx, table).map_err(|e| e.or_line(block.line))?;
    }
    Ok(())
}

fn check_expr_sends(expr: &Expr, ctx: MethodContext<'_>, table: &MethodTable) -> Result<(), CompileError> {
    match expr {
        Expr::Literal(_) | Expr::Var(_) => Ok(()),
        Expr::Block(block) => check_block_sends(block, ctx, table),
        Expr::Send(send) => {
            check_expr_sends(&send.receiver, ctx, table)?;
            for arg in &send.args {
                check_expr_sends(arg, ctx, table)?;
            }
            let Some(class) = receiver_class(&send.receiver, ctx) else {
                return Ok(());
            };
            let found = send.args.len();
            match table.arity(class, &send.selector) {
                Some(expected) if expected != found => {
                    Err(errors::wrong_argument_count(class, &send.selector, expected, found))
                }
                Some(_) => Ok(()),
                None => match table
                    .similar_selector(class, &send.selector)
                    .filter(|_| is_value_literal(&send.receiver))
                {
                    Some((selector, expected)) => Err(errors::wrong_argument_count(class, selector, expected, found)
                        .with_note(format!("'{}' was sent", send.selector))),
                    None => {
                        tracing::warn!(
                            class,
                            selector = %send.selector,
                            method = %ctx.qualified_name(),
                            "selector not found in receiver class; assuming it is resolved at run time"
                        );
                        Ok(())
                    }
                },
            }
        }
    }
}

/// Statically known class of a receiver expression.
fn receiver_class<'a>(receiver: &'a Expr, ctx: MethodContext<'a>) -> Option<&'a str> {
    match receiver {
        Expr::Var(name) if keywords::from_str(name) == Some(KeywordId::SelfKw) => Some(&ctx.class.name),
        Expr::Literal(literal) => match literal.class {
            LiteralClass::Class => Some(&literal.value),
            LiteralClass::Integer => Some(builtin_name(builtins::BuiltinClassId::Integer)),
            LiteralClass::String => Some(builtin_name(builtins::BuiltinClassId::String)),
            LiteralClass::Nil | LiteralClass::True | LiteralClass::False => None,
        },
        _ => None,
    }
}

/// An integer or string literal (not a class reference).
fn is_value_literal(expr: &Expr) -> bool {
    matches!(expr, Expr::Literal(literal) if matches!(literal.class, LiteralClass::Integer | LiteralClass::String))
}

fn builtin_name(id: builtins::BuiltinClassId) -> &'static str {
    builtins::info_for(id).name
}
