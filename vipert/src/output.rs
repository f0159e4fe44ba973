//! Token stream printers.

use std::io::Write;

use viperc_lex::{Token, TokenKind};

use crate::error::Result;

/// Prints the token stream grouped by source line.
///
/// Each source line that produced tokens gets one output line, prefixed
/// with its 1-based line number. The token value is printed alongside the
/// kind when it carries one; string literals always show their value, so
/// an empty string stays visible.
pub fn print_plain(out: &mut impl Write, tokens: &[Token]) -> Result<()> {
    let mut current_line = None;
    for token in tokens {
        if current_line != Some(token.line) {
            if current_line.is_some() {
                writeln!(out)?;
            }
            current_line = Some(token.line);
            write!(out, "{}:\t", token.line + 1)?;
        }
        if token.value.is_empty() && token.kind != TokenKind::StringLiteral {
            write!(out, "({})  ", token.kind)?;
        } else {
            write!(out, "({}, {})  ", token.kind, token.value)?;
        }
    }
    if current_line.is_some() {
        writeln!(out)?;
    }
    Ok(())
}

/// Prints the token stream as a JSON array.
pub fn print_json(out: &mut impl Write, tokens: &[Token]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, tokens)?;
    writeln!(out)?;
    Ok(())
}
