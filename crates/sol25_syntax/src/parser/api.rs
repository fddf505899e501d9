// ============================================================================
// Public API
// ============================================================================

/// Parse a complete SOL25 program.
///
/// ## Errors
/// - Lexical error for empty input, malformed comments, strings, escapes or tokens.
/// - Syntax error for malformed structure or statements.
///
/// Only the first error is reported.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Program, CompileError> {
    if source.trim().is_empty() {
        return Err(CompileError::lexical("empty input").with_note("a program needs at least the class Main"));
    }
    let scanned = scanner::scan(source)?;
    build_program(scanned)
}

/// Parse the block bodies of an already scanned program.
pub fn build_program(scanned: ScannedProgram) -> Result<Program, CompileError> {
    let mut classes = Vec::with_capacity(scanned.classes.len());
    for class in scanned.classes {
        let mut methods = Vec::with_capacity(class.methods.len());
        for method in class.methods {
            let block = parse_block(&method.block)?;
            methods.push(MethodDef {
                selector: method.selector,
                description: method.description,
                block,
                line: method.line,
            });
        }
        classes.push(ClassDef {
            name: class.name,
            parent: class.parent,
            methods,
            line: class.line,
        });
    }

    let instructions: usize = classes
        .iter()
        .flat_map(|c| &c.methods)
        .map(|m| m.block.instructions.len())
        .sum();
    tracing::debug!(classes = classes.len(), instructions, "parsed program");

    Ok(Program {
        classes,
        description: scanned.description,
    })
}

/// Parse the body of a scanned block.
pub fn parse_block(raw: &RawBlock) -> Result<Block, CompileError> {
    parse_block_body(&raw.parameters, &raw.body, raw.line, raw.body_line)
}
