// ============================================================================
// Statements
// ============================================================================

/// `line` is where the block's `[` is; the body itself starts `body_line` lines further down.
fn parse_block_body(
    parameters: &[String],
    body: &str,
    line: usize,
    body_line: usize,
) -> Result<Block, CompileError> {
    let statements = splitter::split(body).map_err(|e| e.or_line(line))?;
    let mut instructions = Vec::with_capacity(statements.len());
    for (index, statement) in statements.iter().enumerate() {
        let at = line + body_line + statement.line;
        instructions.push(parse_statement(statement, index + 1, at).map_err(|e| e.or_line(at))?);
    }
    Ok(Block {
        parameters: parameters.to_vec(),
        instructions,
        line,
    })
}

/// Parse `var := expr` (the period is already stripped).
fn parse_statement(statement: &Statement, order: usize, line: usize) -> Result<Assign, CompileError> {
    let text = statement.text.as_str();
    if text.is_empty() {
        return Err(CompileError::syntax("empty statement").with_hint("remove the extra '.'"));
    }
    if !statement.terminated {
        return Err(CompileError::syntax(format!("statement '{text}' must end with '.'")));
    }

    let (target, expr_text) = text
        .split_once(":=")
        .ok_or_else(|| CompileError::syntax(format!("expected assignment 'name := expression', found '{text}'")))?;
    let var = target.trim();
    if keywords::is_reserved(var) {
        return Err(errors::reserved_word(var, "an assignment target"));
    }
    if !selectors::is_identifier(var) {
        return Err(CompileError::syntax(format!("invalid assignment target '{var}'")));
    }

    Ok(Assign {
        order,
        var: var.to_string(),
        expr: parse_expr(expr_text, line)?,
    })
}
