//! Identifier and keyword lexing.
//!
//! This module handles identifiers, the keyword check against the
//! caller-supplied set, and the `u"..."` string prefix lookahead.

use crate::chars;
use crate::state::{State, StringType};
use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Continues an identifier, or finishes it.
    ///
    /// On the first character that cannot continue an identifier, the
    /// lexeme is emitted as a keyword when it is in the keyword set and as
    /// an identifier otherwise, and the character is re-dispatched.
    pub(crate) fn read_keyword_or_identifier(&mut self) {
        if chars::is_identifier_part(self.current_char) {
            self.buffer.push(self.current_char);
        } else {
            let value = std::mem::take(&mut self.buffer);
            let kind = if self.keywords.contains(&value) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            self.push_token_at(kind, value, self.token_start_line);
            self.set_state_by_current_char();
        }
    }

    /// Disambiguates a leading `u` or `U`.
    ///
    /// A quote right after the prefix starts a string literal with the
    /// prefix dropped; anything else continues as a plain identifier.
    pub(crate) fn read_identifier_or_string_literal(&mut self) {
        match self.current_char {
            '\'' => {
                self.buffer.clear();
                self.state = State::SingleOrTripleQuotedString;
            }
            '"' => {
                self.buffer.clear();
                self.state = State::DoubleQuotedString;
                self.string_type = StringType::Double;
            }
            _ => {
                self.state = State::KeywordOrIdentifier;
                self.read_keyword_or_identifier();
            }
        }
    }
}
