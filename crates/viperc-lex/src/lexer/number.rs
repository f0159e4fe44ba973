//! Numeric literal lexing.
//!
//! This module contains the numeric sub-automaton: decimal integers, the
//! leading-zero rule, the three radix-prefixed forms, floats, exponents,
//! and the imaginary suffix.
//!
//! Accepted shapes:
//!
//! - Decimal: `42`, `1_000`
//! - Binary/octal/hex: `0b1010`, `0o777`, `0x1F`
//! - Float: `3.14`, `.5`, `0.25`
//! - Exponent: `1e10`, `3.14e-2`
//! - Imaginary: `1j`, `2.5J`

use crate::chars::is_digit_in_radix;
use crate::state::State;
use crate::token::TokenKind;
use crate::Lexer;

/// Token kind emitted for a well-formed radix-prefixed literal.
fn radix_literal_kind(radix: u32) -> TokenKind {
    match radix {
        2 => TokenKind::BinaryIntegerLiteral,
        8 => TokenKind::OctalIntegerLiteral,
        _ => TokenKind::HexIntegerLiteral,
    }
}

/// Error message naming the digit constraint of a radix.
fn radix_error_message(radix: u32) -> &'static str {
    match radix {
        2 => "The binary number must consist only 0-1 digits.",
        8 => "The octal number must consist only 0-7 digits.",
        _ => "The hex number must consist only digits and a-f letters.",
    }
}

impl Lexer<'_> {
    /// Continues a decimal integer that started with a non-zero digit.
    pub(crate) fn read_decimal_integer(&mut self) {
        let c = self.current_char;
        if c.is_ascii_digit() || c == '_' {
            self.buffer.push(c);
        } else if c == '.' {
            self.buffer.push(c);
            self.state = State::Float;
        } else if c == 'e' || c == 'E' {
            self.cursor.mark();
            self.buffer.push(c);
            self.state = State::ExponentFloatOnInteger;
        } else if c == 'j' || c == 'J' {
            self.buffer.push(c);
            self.state = State::Imaginary;
        } else if c.is_alphabetic() {
            self.read_whole_error_token();
            self.end_error_token("The identifier cannot start with a digit");
        } else {
            self.end_token_with_buffer(TokenKind::IntegerLiteral);
        }
    }

    /// Handles the character after a leading `0`.
    ///
    /// Picks between a radix prefix, a zero run, a zero-prefixed decimal
    /// (rejected on termination), a float, an exponent, the imaginary
    /// suffix, and the bare integer `0`.
    pub(crate) fn read_zero_or_radix_prefix(&mut self) {
        let c = self.current_char;
        match c {
            '.' => {
                self.buffer.push(c);
                self.state = State::Float;
            }
            'b' | 'B' => {
                self.buffer.push(c);
                self.state = State::BinaryIntegerStart;
            }
            'o' | 'O' => {
                self.buffer.push(c);
                self.state = State::OctalIntegerStart;
            }
            'x' | 'X' => {
                self.buffer.push(c);
                self.state = State::HexIntegerStart;
            }
            'e' | 'E' => {
                self.cursor.mark();
                self.buffer.push(c);
                self.state = State::ExponentFloatOnInteger;
            }
            'j' | 'J' => {
                self.buffer.push(c);
                self.state = State::Imaginary;
            }
            '0' => {
                self.buffer.push(c);
                self.state = State::ZeroInteger;
            }
            _ if c.is_ascii_digit() => {
                self.buffer.push(c);
                self.state = State::IntegerWithZeroPrefix;
            }
            _ if c.is_alphabetic() => {
                self.read_whole_error_token();
                self.end_error_token("The identifier cannot start with a digit");
            }
            _ => self.end_token_with_buffer(TokenKind::IntegerLiteral),
        }
    }

    /// Continues a run of zeros (`0`, `00`, `000`, ...).
    pub(crate) fn read_zero_integer(&mut self) {
        let c = self.current_char;
        if c == '0' {
            self.buffer.push(c);
        } else if c.is_ascii_digit() {
            self.buffer.push(c);
            self.state = State::IntegerWithZeroPrefix;
        } else if c == '.' {
            self.buffer.push(c);
            self.state = State::Float;
        } else if c == 'e' || c == 'E' {
            self.cursor.mark();
            self.buffer.push(c);
            self.state = State::ExponentFloatOnInteger;
        } else if c == 'j' || c == 'J' {
            self.buffer.push(c);
            self.state = State::Imaginary;
        } else if c.is_alphabetic() {
            self.read_whole_error_token();
            self.end_error_token("The identifier cannot start with a digit");
        } else {
            self.end_token_with_buffer(TokenKind::IntegerLiteral);
        }
    }

    /// Continues a zero-prefixed decimal such as `0123`.
    ///
    /// The form is only an error when it terminates as an integer; a dot,
    /// exponent, or imaginary suffix still promotes it.
    pub(crate) fn read_integer_with_zero_prefix(&mut self) {
        let c = self.current_char;
        if c.is_ascii_digit() {
            self.buffer.push(c);
        } else if c == '.' {
            self.buffer.push(c);
            self.state = State::Float;
        } else if c == 'e' || c == 'E' {
            self.cursor.mark();
            self.buffer.push(c);
            self.state = State::ExponentFloat;
        } else if c == 'j' || c == 'J' {
            self.buffer.push(c);
            self.state = State::Imaginary;
        } else {
            self.read_whole_error_token();
            self.end_error_token("Integer literal cannot start with 0");
        }
    }

    /// Expects the first digit after a radix prefix.
    pub(crate) fn read_radix_integer_start(&mut self, radix: u32) {
        if is_digit_in_radix(self.current_char, radix) {
            self.buffer.push(self.current_char);
            self.state = match radix {
                2 => State::BinaryInteger,
                8 => State::OctalInteger,
                _ => State::HexInteger,
            };
        } else {
            self.read_whole_error_token();
            self.end_error_token(radix_error_message(radix));
        }
    }

    /// Continues a radix-prefixed integer.
    ///
    /// The literal terminates cleanly only on space, newline, or `#`; any
    /// other non-digit turns the whole word into an error.
    pub(crate) fn read_radix_integer(&mut self, radix: u32) {
        let c = self.current_char;
        if is_digit_in_radix(c, radix) {
            self.buffer.push(c);
        } else if c == ' ' || c == '\n' || c == '#' {
            self.end_token_with_buffer(radix_literal_kind(radix));
        } else {
            self.read_whole_error_token();
            self.end_error_token(radix_error_message(radix));
        }
    }

    /// Continues the fractional part of a float.
    pub(crate) fn read_float(&mut self) {
        let c = self.current_char;
        if c.is_ascii_digit() {
            self.buffer.push(c);
        } else if c == 'e' || c == 'E' {
            self.cursor.mark();
            self.buffer.push(c);
            self.state = State::ExponentFloatOnFloat;
        } else if c == 'j' || c == 'J' {
            self.buffer.push(c);
            self.state = State::Imaginary;
        } else if c.is_alphabetic() {
            self.read_whole_error_token();
            self.end_error_token("The identifier cannot start with a digit");
        } else {
            self.end_token_with_buffer(TokenKind::FloatingPointLiteral);
        }
    }

    /// Expects a digit or sign right after the exponent marker.
    ///
    /// When neither follows, the checkpoint taken at the marker is
    /// restored: the preceding literal is emitted unchanged with the given
    /// kind and the marker itself is re-lexed (so `1e` becomes the integer
    /// `1` followed by the identifier `e`).
    pub(crate) fn read_exponent_start(&mut self, kind: TokenKind) {
        let c = self.current_char;
        if c.is_ascii_digit() || c == '+' || c == '-' {
            self.buffer.push(c);
            self.state = State::ExponentFloat;
        } else if c.is_alphabetic() {
            self.read_whole_error_token();
            self.end_error_token("The identifier cannot start with a digit");
        } else {
            self.unread_exponent_marker();
            self.end_token_with_buffer(kind);
        }
    }

    /// Continues the exponent digits.
    pub(crate) fn read_exponent_float(&mut self) {
        let c = self.current_char;
        if c.is_ascii_digit() {
            self.buffer.push(c);
        } else if c.is_alphabetic() {
            self.read_whole_error_token();
            self.end_error_token("The identifier cannot start with a digit");
        } else {
            self.end_token_with_buffer(TokenKind::FloatingPointLiteral);
        }
    }

    /// Consumes the rest of a malformed word, up to whitespace, newline,
    /// or a comment. End of input terminates the word like a newline.
    pub(crate) fn read_whole_error_token(&mut self) {
        while !matches!(self.current_char, ' ' | '\n' | '#') {
            self.buffer.push(self.current_char);
            self.current_char = self.cursor.read().unwrap_or('\n');
        }
    }

    /// Rewinds to the checkpoint taken at the exponent marker and makes
    /// the marker the current character again.
    fn unread_exponent_marker(&mut self) {
        self.cursor.reset();
        if let Some(marker) = self.buffer.pop() {
            self.current_char = marker;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::token::TokenKind;
    use crate::Token;

    fn lex(source: &str) -> Vec<Token> {
        let keywords = HashSet::new();
        crate::tokenize(source, &keywords)
    }

    fn first(source: &str) -> Token {
        lex(source).remove(0)
    }

    #[test]
    fn test_decimal_integer() {
        let token = first("42\n");
        assert_eq!(token.kind, TokenKind::IntegerLiteral);
        assert_eq!(token.value, "42");
    }

    #[test]
    fn test_decimal_integer_with_underscores() {
        let token = first("1_000_000\n");
        assert_eq!(token.kind, TokenKind::IntegerLiteral);
        assert_eq!(token.value, "1_000_000");
    }

    #[test]
    fn test_zero_runs() {
        for source in ["0\n", "00\n", "000\n"] {
            let token = first(source);
            assert_eq!(token.kind, TokenKind::IntegerLiteral);
            assert_eq!(token.value, source.trim_end());
        }
    }

    #[test]
    fn test_zero_prefixed_integer_is_error() {
        let tokens = lex("0123\n");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].value, "Integer literal cannot start with 0");
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Error).count(),
            1
        );
    }

    #[test]
    fn test_binary_literal() {
        let token = first("0b1010\n");
        assert_eq!(token.kind, TokenKind::BinaryIntegerLiteral);
        assert_eq!(token.value, "0b1010");
    }

    #[test]
    fn test_octal_literal() {
        let token = first("0o777\n");
        assert_eq!(token.kind, TokenKind::OctalIntegerLiteral);
        assert_eq!(token.value, "0o777");
    }

    #[test]
    fn test_hex_literal() {
        let token = first("0x1F\n");
        assert_eq!(token.kind, TokenKind::HexIntegerLiteral);
        assert_eq!(token.value, "0x1F");
    }

    #[test]
    fn test_hex_literal_uppercase_prefix() {
        let token = first("0XaB\n");
        assert_eq!(token.kind, TokenKind::HexIntegerLiteral);
        assert_eq!(token.value, "0XaB");
    }

    #[test]
    fn test_radix_prefix_without_digits_is_error() {
        let token = first("0b\n");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.value, "The binary number must consist only 0-1 digits.");
    }

    #[test]
    fn test_binary_with_invalid_digit_is_error() {
        let token = first("0b102\n");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.value, "The binary number must consist only 0-1 digits.");
    }

    #[test]
    fn test_octal_with_invalid_digit_is_error() {
        let token = first("0o18\n");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.value, "The octal number must consist only 0-7 digits.");
    }

    #[test]
    fn test_hex_terminated_by_delimiter_is_error() {
        // Radix literals terminate cleanly only on space, newline, or '#'.
        let token = first("0x1F)\n");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(
            token.value,
            "The hex number must consist only digits and a-f letters."
        );
    }

    #[test]
    fn test_float() {
        let token = first("3.14\n");
        assert_eq!(token.kind, TokenKind::FloatingPointLiteral);
        assert_eq!(token.value, "3.14");
    }

    #[test]
    fn test_leading_dot_float() {
        let token = first(".5\n");
        assert_eq!(token.kind, TokenKind::FloatingPointLiteral);
        assert_eq!(token.value, ".5");
    }

    #[test]
    fn test_zero_dot_float() {
        let token = first("0.25\n");
        assert_eq!(token.kind, TokenKind::FloatingPointLiteral);
        assert_eq!(token.value, "0.25");
    }

    #[test]
    fn test_exponent() {
        let token = first("1e10\n");
        assert_eq!(token.kind, TokenKind::FloatingPointLiteral);
        assert_eq!(token.value, "1e10");
    }

    #[test]
    fn test_exponent_with_sign() {
        let token = first("3.14e-2\n");
        assert_eq!(token.kind, TokenKind::FloatingPointLiteral);
        assert_eq!(token.value, "3.14e-2");
    }

    #[test]
    fn test_exponent_with_plus_sign() {
        let token = first("2E+5\n");
        assert_eq!(token.kind, TokenKind::FloatingPointLiteral);
        assert_eq!(token.value, "2E+5");
    }

    #[test]
    fn test_failed_exponent_rewinds() {
        let tokens = lex("1e\n");
        assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
        assert_eq!(tokens[0].value, "1");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].value, "e");
    }

    #[test]
    fn test_failed_exponent_on_float_rewinds() {
        let tokens = lex("2.5E =\n");
        assert_eq!(tokens[0].kind, TokenKind::FloatingPointLiteral);
        assert_eq!(tokens[0].value, "2.5");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].value, "E");
        assert_eq!(tokens[2].kind, TokenKind::Assign);
    }

    #[test]
    fn test_imaginary_integer() {
        let token = first("1j\n");
        assert_eq!(token.kind, TokenKind::ImaginaryLiteral);
        assert_eq!(token.value, "1j");
    }

    #[test]
    fn test_imaginary_float() {
        let token = first("2.5J\n");
        assert_eq!(token.kind, TokenKind::ImaginaryLiteral);
        assert_eq!(token.value, "2.5J");
    }

    #[test]
    fn test_imaginary_zero() {
        let token = first("0j\n");
        assert_eq!(token.kind, TokenKind::ImaginaryLiteral);
        assert_eq!(token.value, "0j");
    }

    #[test]
    fn test_digit_then_letters_is_error() {
        let token = first("1abc\n");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.value, "The identifier cannot start with a digit");
    }

    #[test]
    fn test_error_word_consumed_whole() {
        let tokens = lex("1abc rest\n");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].value, "rest");
    }

    #[test]
    fn test_malformed_number_at_eof_terminates() {
        let tokens = lex("1abc");
        assert_eq!(tokens[0].kind, TokenKind::Error);
    }
}
