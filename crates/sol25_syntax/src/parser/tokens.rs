// ============================================================================
// Expression pieces
// ----------------------------------------------------------------------------
// Expressions are cut into pieces at depth zero. Groups and strings are kept
// whole and parsed recursively later:
//
//   "(x foo: 1) bar: [ :a | ]"  → Group("(x foo: 1)"), Word("bar:"), Block("[ :a | ]")
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'s> {
    /// Name, integer or keyword part (`at:`).
    Word(&'s str),
    /// String literal including its quotes.
    Str(&'s str),
    /// Block literal including its brackets.
    Block(&'s str),
    /// Parenthesized expression including the parentheses.
    Group(&'s str),
}

fn is_word_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'_' | b'+' | b'-')
}

fn tokenize(text: &str) -> Result<Vec<Piece<'_>>, CompileError> {
    let bytes = text.as_bytes();
    let mut pieces = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        match c {
            _ if c.is_ascii_whitespace() => i += 1,
            b'\'' => {
                let end = scan_string(text, i)?;
                pieces.push(Piece::Str(&text[i..end]));
                i = end;
            }
            b'[' | b'(' => {
                let end = group_end(text, i)?;
                let group = &text[i..end];
                pieces.push(if c == b'[' { Piece::Block(group) } else { Piece::Group(group) });
                i = end;
            }
            b']' | b')' => return Err(CompileError::syntax(format!("unmatched '{}'", c as char))),
            b':' if bytes.get(i + 1) == Some(&b'=') => {
                return Err(CompileError::syntax("unexpected ':=' inside an expression"));
            }
            _ if is_word_char(c) => {
                let mut end = i;
                while end < bytes.len() && is_word_char(bytes[end]) {
                    end += 1;
                }
                if bytes.get(end) == Some(&b':') && bytes.get(end + 1) != Some(&b'=') {
                    end += 1;
                }
                pieces.push(Piece::Word(&text[i..end]));
                i = end;
            }
            _ => {
                let found = text[i..].chars().next().unwrap_or(c as char);
                return Err(CompileError::lexical(format!("unexpected character '{found}'")));
            }
        }
    }
    Ok(pieces)
}
