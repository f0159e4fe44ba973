//! viperc-lex - Lexical analyzer for the Viper language.
//!
//! Viper's surface syntax matches Python 3. The lexer turns source text
//! into an ordered list of classified tokens, each annotated with the
//! zero-based line where it started. It is a single-pass deterministic
//! automaton: every state handler consumes exactly one character, with one
//! character of lookahead and a single checkpoint-and-rewind used to
//! disambiguate numeric exponent suffixes.
//!
//! The automaton recognizes keywords (from a caller-supplied set),
//! identifiers, numeric literals in four radices with float, exponent, and
//! imaginary forms, string literals in single, double, and triple quoting
//! with escape translation, the full operator and delimiter set including
//! compound assignments, comments, and backslash line continuation. Line
//! structure follows the off-side rule: a stack of open indentation widths
//! drives synthetic `NEWLINE`, `INDENT`, and `DEDENT` tokens.
//!
//! Lexical errors never abort a run. They are emitted in-band as `ERROR`
//! tokens carrying a message, and lexing resumes after the offending
//! input.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use viperc_lex::{tokenize, TokenKind};
//!
//! let keywords: HashSet<String> = ["if", "else"].iter().map(|s| s.to_string()).collect();
//! let tokens = tokenize("x = 42\n", &keywords);
//!
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens[0].value, "x");
//! assert_eq!(tokens[1].kind, TokenKind::Assign);
//! assert_eq!(tokens[2].kind, TokenKind::IntegerLiteral);
//! assert_eq!(tokens[3].kind, TokenKind::Newline);
//! ```

pub mod chars;
pub mod cursor;
mod edge_cases;
mod lexer;
mod state;
mod token;

pub use lexer::{Lexer, MAX_INDENT_LENGTH};
pub use token::{Token, TokenKind};

use std::collections::HashSet;

/// Tokenizes a whole source in one pass.
///
/// Convenience wrapper over [`Lexer::new`] + [`Lexer::analyze`].
///
/// # Arguments
///
/// * `source` - The source code to tokenize
/// * `keywords` - Words to classify as keywords instead of identifiers
pub fn tokenize(source: &str, keywords: &HashSet<String>) -> Vec<Token> {
    Lexer::new(source, keywords).analyze()
}
