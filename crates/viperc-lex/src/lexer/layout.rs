//! Line structure: NEWLINE, INDENT, DEDENT, and line continuation.
//!
//! This module contains the indentation tracker. At every line feed the
//! automaton moves into an indent-consumption state for the next line;
//! when content appears, the accumulated width is compared against the
//! stack of open indentation levels and the synthetic block tokens are
//! emitted.

use crate::state::State;
use crate::token::TokenKind;
use crate::Lexer;

/// Tab stop width; a tab rounds the indentation accumulator up to the next
/// multiple of this constant.
pub const MAX_INDENT_LENGTH: usize = 8;

impl Lexer<'_> {
    /// Handles a line feed seen from the initial state.
    ///
    /// A line that produced content emits NEWLINE and arms the indent
    /// consumption for the next line. Blank lines emit nothing; before the
    /// first token they do not even arm the indent comparison.
    pub(crate) fn read_line_feed(&mut self) {
        if !self.blank_line {
            self.push_token_at(TokenKind::Newline, String::new(), self.current_line);
            self.current_indent = 0;
            self.blank_line = true;
            self.state = State::Indent;
        } else if self.tokens.is_empty() {
            self.state = State::Initial;
        } else {
            self.state = State::Indent;
        }
        self.current_line += 1;
    }

    /// Handles leading whitespace on the very first line.
    ///
    /// Content after such whitespace has no block to belong to, so it is
    /// reported as an unexpected indent and then lexed normally. Comments
    /// are fine.
    pub(crate) fn read_first_indent(&mut self) {
        let c = self.current_char;
        if !c.is_whitespace() {
            if c != '#' {
                self.error_here("Unexpected indent.");
                self.blank_line = false;
            }
            self.set_state_by_current_char();
        } else if c == '\n' {
            self.set_state_by_current_char();
        }
    }

    /// Accumulates indentation and runs the indent comparison when the
    /// first content character of the line appears.
    pub(crate) fn read_indent(&mut self) {
        let c = self.current_char;
        if c.is_whitespace() {
            match c {
                ' ' => self.current_indent += 1,
                '\t' => {
                    self.current_indent += (MAX_INDENT_LENGTH
                        - self.current_indent % MAX_INDENT_LENGTH)
                        % MAX_INDENT_LENGTH;
                }
                '\n' => {
                    self.current_indent = 0;
                    self.set_state_by_current_char();
                }
                _ => {}
            }
        } else if c == '\\' {
            // A backslash-continued statement opens here.
            self.blank_line = false;
            self.set_state_by_current_char();
        } else if c == '#' {
            self.set_state_by_current_char();
        } else {
            self.compare_indent();
            self.blank_line = false;
            self.set_state_by_current_char();
        }
    }

    /// Compares the accumulated width with the stack of open levels and
    /// emits INDENT, DEDENTs, or a dedent mismatch error.
    fn compare_indent(&mut self) {
        let top = self.indent_stack.last().copied().unwrap_or(0);
        if self.current_indent > top {
            self.indent_stack.push(self.current_indent);
            self.push_token_at(TokenKind::Indent, String::new(), self.current_line);
        } else if self.current_indent < top {
            if self.indent_stack.contains(&self.current_indent) {
                while self
                    .indent_stack
                    .last()
                    .is_some_and(|&width| width > self.current_indent)
                {
                    self.indent_stack.pop();
                    self.push_token_at(TokenKind::Dedent, String::new(), self.current_line);
                }
            } else {
                self.error_here("Dedent does not match to any indentation level.");
            }
        }
    }

    /// Handles the character after a line-continuation backslash.
    ///
    /// A line feed is swallowed together with the backslash; other
    /// whitespace is consumed silently. The first non-whitespace character
    /// cancels the continuation with an error and is re-lexed.
    pub(crate) fn read_backslash(&mut self) {
        if !self.current_char.is_whitespace() {
            self.buffer.clear();
            self.push_token_at(
                TokenKind::Error,
                "Backslash does not continue a line.".to_owned(),
                self.token_start_line,
            );
            self.state = State::Initial;
            self.cursor.reset();
        } else if self.current_char == '\n' {
            self.buffer.clear();
            self.current_line += 1;
            self.state = State::Initial;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::token::TokenKind;
    use crate::Token;

    fn keywords() -> HashSet<String> {
        ["if", "else", "while", "def", "return"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect()
    }

    fn lex(source: &str) -> Vec<Token> {
        crate::tokenize(source, &keywords())
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_newline_after_statement() {
        assert_eq!(
            kinds("x\n"),
            vec![TokenKind::Identifier, TokenKind::Newline]
        );
    }

    #[test]
    fn test_blank_lines_emit_nothing() {
        assert_eq!(
            kinds("x\n\n\ny\n"),
            vec![
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_indent_and_statement() {
        assert_eq!(
            kinds("if x:\n    y = 1\n"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntegerLiteral,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_no_trailing_dedent_at_eof() {
        let tokens = lex("if x:\n    y = 1\n");
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Dedent));
    }

    #[test]
    fn test_dedent_on_return_to_outer_level() {
        assert_eq!(
            kinds("if x:\n    y\nz\n"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::Identifier,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_multi_level_dedent() {
        let source = "a:\n  b:\n    c\nd\n";
        let dedents = lex(source)
            .iter()
            .filter(|t| t.kind == TokenKind::Dedent)
            .count();
        assert_eq!(dedents, 2);
    }

    #[test]
    fn test_dedent_mismatch_leaves_stack_unchanged() {
        let tokens = lex("if x:\n        y\n    z\n");
        let error = tokens.iter().find(|t| t.kind == TokenKind::Error).unwrap();
        assert_eq!(error.value, "Dedent does not match to any indentation level.");
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Dedent));
    }

    #[test]
    fn test_equal_indent_emits_no_block_tokens() {
        let tokens = lex("if x:\n    a\n    b\n");
        let indents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Indent)
            .count();
        assert_eq!(indents, 1);
    }

    #[test]
    fn test_tab_rounds_to_next_stop() {
        // One space plus a tab lands on column 8, deeper than the 4-space
        // block, so a fresh INDENT is emitted.
        let tokens = lex("if x:\n    a\n \tb\n");
        let indents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Indent)
            .count();
        assert_eq!(indents, 2);
    }

    #[test]
    fn test_indent_token_line() {
        let tokens = lex("if x:\n    y\n");
        let indent = tokens.iter().find(|t| t.kind == TokenKind::Indent).unwrap();
        assert_eq!(indent.line, 1);
    }

    #[test]
    fn test_first_line_indent_is_error() {
        let tokens = lex("  x\n");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].value, "Unexpected indent.");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_first_line_indented_comment_is_fine() {
        assert!(lex("   # comment\n").is_empty());
    }

    #[test]
    fn test_backslash_continuation() {
        assert_eq!(
            kinds("x = \\\n  1\n"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntegerLiteral,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_backslash_continuation_counts_line() {
        let tokens = lex("x = \\\n1\n");
        let newline = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Newline)
            .unwrap();
        assert_eq!(newline.line, 1);
    }

    #[test]
    fn test_backslash_before_content_is_error() {
        let tokens = lex("x = \\y\n");
        let error = tokens.iter().find(|t| t.kind == TokenKind::Error).unwrap();
        assert_eq!(error.value, "Backslash does not continue a line.");
        // The cancelled character is re-lexed.
        let ident_values: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(ident_values, vec!["x", "y"]);
    }

    #[test]
    fn test_blank_line_inside_block_keeps_level() {
        assert_eq!(
            kinds("if x:\n    a\n\n    b\n"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Newline,
            ]
        );
    }
}
