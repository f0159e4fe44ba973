//! String literal lexing.
//!
//! This module contains the string sub-automaton: single-, double-, and
//! triple-quoted literals plus the escape states. Triple quoting is
//! resolved by counting consecutive quotes; the two intermediate states
//! keep the quotes in the buffer until the count is decided.

use crate::chars;
use crate::state::{State, StringType};
use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Handles the character after an opening `'`.
    ///
    /// A second quote moves to the empty-string/triple-quote
    /// disambiguation; anything else opens a single-quoted body.
    pub(crate) fn read_single_or_triple_quoted_string(&mut self) {
        if self.current_char == '\'' {
            self.state = State::ClosedSingleOrOpenedTripleQuotedString;
        } else {
            self.state = State::SingleQuotedString;
            self.buffer.clear();
            self.string_type = StringType::Single;
            self.read_single_quoted_string();
        }
    }

    /// Handles the character after `''`.
    ///
    /// A third quote opens a triple-quoted body; anything else closes the
    /// empty single-quoted literal and re-dispatches.
    pub(crate) fn read_closed_single_or_opened_triple(&mut self) {
        self.buffer.clear();
        if self.current_char == '\'' {
            self.state = State::TripleQuotedString;
            self.string_type = StringType::Triple;
        } else {
            self.string_type = StringType::None;
            self.end_token_with_buffer(TokenKind::StringLiteral);
        }
    }

    /// Body of a single-quoted string.
    pub(crate) fn read_single_quoted_string(&mut self) {
        match self.current_char {
            '\'' => self.quit_string(),
            '\\' => self.state = State::Escape,
            '\n' => {
                self.end_error_token("Missing closing single quote.");
                self.string_type = StringType::None;
            }
            c => self.buffer.push(c),
        }
    }

    /// Body of a double-quoted string.
    pub(crate) fn read_double_quoted_string(&mut self) {
        match self.current_char {
            '"' => self.quit_string(),
            '\\' => self.state = State::Escape,
            '\n' => {
                self.end_error_token("Missing closing double quote.");
                self.string_type = StringType::None;
            }
            c => self.buffer.push(c),
        }
    }

    /// Body of a triple-quoted string.
    ///
    /// Newlines are part of the content and advance the line counter.
    pub(crate) fn read_triple_quoted_string(&mut self) {
        match self.current_char {
            '\'' => {
                self.buffer.push('\'');
                self.state = State::TripleQuotedStringWithQuote;
            }
            '\\' => self.state = State::Escape,
            c => {
                if c == '\n' {
                    self.current_line += 1;
                }
                self.buffer.push(c);
            }
        }
    }

    /// One quote seen inside a triple-quoted body.
    pub(crate) fn read_triple_quoted_with_quote(&mut self) {
        if self.current_char == '\'' {
            self.buffer.push('\'');
            self.state = State::TripleQuotedStringWithDoubleQuote;
        } else {
            // Not a closing run; the buffered quote stays as content.
            self.state = State::TripleQuotedString;
            self.read_triple_quoted_string();
        }
    }

    /// Two consecutive quotes seen inside a triple-quoted body.
    ///
    /// A third quote closes the string; the two buffered quotes are
    /// removed from the content.
    pub(crate) fn read_triple_quoted_with_double_quote(&mut self) {
        if self.current_char == '\'' {
            let len = self.buffer.len();
            self.buffer.truncate(len.saturating_sub(2));
            self.quit_string();
        } else {
            self.state = State::TripleQuotedString;
            self.read_triple_quoted_string();
        }
    }

    /// Translates the character after a backslash inside a string.
    ///
    /// Characters without a translation are kept verbatim together with
    /// the backslash. Returns to the body state of the current quote
    /// style.
    pub(crate) fn read_escaped(&mut self) {
        match chars::escape_char(self.current_char) {
            Some(translated) => self.buffer.push(translated),
            None => {
                self.buffer.push('\\');
                self.buffer.push(self.current_char);
            }
        }
        self.state = match self.string_type {
            StringType::Single => State::SingleQuotedString,
            StringType::Double => State::DoubleQuotedString,
            StringType::Triple => State::TripleQuotedString,
            StringType::None => State::Initial,
        };
    }

    /// Emits the finished string literal; the closing quote is consumed.
    pub(crate) fn quit_string(&mut self) {
        let value = std::mem::take(&mut self.buffer);
        self.push_token_at(TokenKind::StringLiteral, value, self.token_start_line);
        self.state = State::Initial;
        self.string_type = StringType::None;
    }
}
