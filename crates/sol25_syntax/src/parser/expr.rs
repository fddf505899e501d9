// ============================================================================
// Expressions
// ============================================================================

/// Parse the right-hand side of an assignment (or the inside of parentheses).
///
/// The shape is decided by the number of pieces:
/// - one piece: a primary (literal, variable, class reference, block or parenthesized expression),
/// - two pieces, the second not a keyword part: a unary send,
/// - an odd number of three or more: a keyword send `receiver k1: a1 k2: a2 ...`.
///
/// Any other shape is a lexical error.
fn parse_expr(text: &str, line: usize) -> Result<Expr, CompileError> {
    let pieces = tokenize(text)?;
    match pieces.as_slice() {
        [] => Err(CompileError::syntax("expected an expression")),
        [single] => parse_primary(*single, line),
        [receiver, Piece::Word(selector)] if !selector.ends_with(':') => parse_unary(*receiver, selector, line),
        [receiver, rest @ ..] if rest.len() % 2 == 0 => parse_keyword_send(*receiver, rest, line),
        _ => Err(CompileError::lexical(format!("malformed expression '{}'", text.trim()))
            .with_hint("a message send is 'receiver selector' or 'receiver key: arg key: arg'")),
    }
}

fn parse_unary(receiver: Piece<'_>, selector: &str, line: usize) -> Result<Expr, CompileError> {
    if keywords::is_reserved(selector) {
        return Err(errors::reserved_word(selector, "a selector"));
    }
    if !selectors::is_identifier(selector) {
        return Err(CompileError::syntax(format!("invalid unary selector '{selector}'")));
    }
    Ok(Expr::Send(Send {
        selector: selector.to_string(),
        receiver: Box::new(parse_primary(receiver, line)?),
        args: Vec::new(),
    }))
}

fn parse_keyword_send(receiver: Piece<'_>, rest: &[Piece<'_>], line: usize) -> Result<Expr, CompileError> {
    let mut selector = String::new();
    let mut args = Vec::with_capacity(rest.len() / 2);
    for pair in rest.chunks(2) {
        let part = match pair[0] {
            Piece::Word(word) if selectors::is_keyword_part(word) => word,
            Piece::Word(word) if word.ends_with(':') => {
                return Err(CompileError::syntax(format!("invalid selector part '{word}'")));
            }
            _ => {
                return Err(CompileError::lexical(format!(
                    "expected a selector part such as 'value:' in '{}'",
                    piece_text(pair[0])
                )));
            }
        };
        if let Some(word) = selectors::reserved_part(part) {
            return Err(errors::reserved_word(word, "a selector"));
        }
        selector.push_str(part);
        args.push(parse_primary(pair[1], line)?);
    }

    Ok(Expr::Send(Send {
        selector,
        receiver: Box::new(parse_primary(receiver, line)?),
        args,
    }))
}

fn parse_primary(piece: Piece<'_>, line: usize) -> Result<Expr, CompileError> {
    match piece {
        Piece::Str(text) => Ok(Expr::literal(LiteralClass::String, &text[1..text.len() - 1])),
        Piece::Group(text) => parse_expr(&text[1..text.len() - 1], line),
        Piece::Block(text) => {
            let header = split_block_header(&text[1..text.len() - 1])?;
            Ok(Expr::Block(parse_block_body(
                &header.parameters,
                header.body,
                line,
                header.body_line,
            )?))
        }
        Piece::Word(word) => parse_word(word),
    }
}

fn parse_word(word: &str) -> Result<Expr, CompileError> {
    if word.ends_with(':') {
        return Err(CompileError::syntax(format!("unexpected selector part '{word}'")));
    }
    if is_integer_literal(word) {
        return Ok(Expr::literal(LiteralClass::Integer, word));
    }
    if word.starts_with(|c: char| c.is_ascii_digit() || c == '+' || c == '-') {
        return Err(CompileError::lexical(format!("malformed integer literal '{word}'")));
    }

    if let Some(class) = keywords::literal_class(word).and_then(LiteralClass::from_keyword_class) {
        return Ok(Expr::literal(class, word));
    }
    if keywords::is_receiver(word) {
        return Ok(Expr::var(word));
    }
    if keywords::is_reserved(word) {
        return Err(errors::reserved_word(word, "a value"));
    }
    if selectors::is_class_name(word) {
        return Ok(Expr::literal(LiteralClass::Class, word));
    }
    if selectors::is_identifier(word) {
        return Ok(Expr::var(word));
    }
    Err(CompileError::lexical(format!("invalid identifier '{word}'")))
}

/// `[+-]?[0-9]+`
fn is_integer_literal(word: &str) -> bool {
    let digits = word.strip_prefix(['+', '-']).unwrap_or(word);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn piece_text(piece: Piece<'_>) -> &str {
    match piece {
        Piece::Word(text) | Piece::Str(text) | Piece::Block(text) | Piece::Group(text) => text,
    }
}
