//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the analyze loop, and the
//! dispatch that starts a new lexeme from the initial state.

use std::collections::HashSet;

use crate::chars;
use crate::cursor::Cursor;
use crate::state::{State, StringType};
use crate::token::{Token, TokenKind};

/// Single-pass lexer for Viper source code.
///
/// The lexer reads the source one character at a time, keeps the lexeme in
/// progress in an internal buffer, and appends finished tokens to its
/// output list. Lexical errors never abort the run; they are reported as
/// in-band [`TokenKind::Error`] tokens.
///
/// A lexer is constructed for exactly one run: [`Lexer::analyze`] consumes
/// it and returns the token list.
pub struct Lexer<'a> {
    /// Source cursor.
    pub(crate) cursor: Cursor<'a>,

    /// Words recognized as keywords when an identifier completes.
    pub(crate) keywords: &'a HashSet<String>,

    /// Current automaton state.
    pub(crate) state: State,

    /// Accumulator for the lexeme in progress.
    pub(crate) buffer: String,

    /// Output list.
    pub(crate) tokens: Vec<Token>,

    /// Character currently being examined.
    pub(crate) current_char: char,

    /// Zero-based line counter; advanced on every newline, including the
    /// ones inside triple-quoted strings.
    pub(crate) current_line: usize,

    /// Line on which the lexeme in progress started.
    pub(crate) token_start_line: usize,

    /// True while no non-whitespace, non-comment character has appeared on
    /// the current physical line.
    pub(crate) blank_line: bool,

    /// Width accumulator for the indentation under construction.
    pub(crate) current_indent: usize,

    /// Strictly increasing stack of open indentation widths; the base
    /// element is always 0.
    pub(crate) indent_stack: Vec<usize>,

    /// Quote style of the string in progress.
    pub(crate) string_type: StringType,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source code to tokenize
    /// * `keywords` - Words to classify as keywords instead of identifiers
    pub fn new(source: &'a str, keywords: &'a HashSet<String>) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            state: State::Initial,
            buffer: String::new(),
            tokens: Vec::new(),
            current_char: '\0',
            current_line: 0,
            token_start_line: 0,
            blank_line: true,
            current_indent: 0,
            indent_stack: vec![0],
            string_type: StringType::None,
        }
    }

    /// Runs the automaton over the whole source and returns the tokens.
    ///
    /// End of input is treated as if a final newline followed, so a lexeme
    /// in progress terminates normally. An unterminated triple-quoted
    /// string is reported before that synthetic newline is processed.
    /// Open indentation levels are left open: no trailing DEDENT tokens
    /// are emitted at end of input.
    pub fn analyze(mut self) -> Vec<Token> {
        loop {
            match self.cursor.read() {
                Some(c) => self.current_char = c,
                None => {
                    if self.current_char == '\n' {
                        return self.tokens;
                    }
                    if self.string_type == StringType::Triple {
                        self.push_token_at(
                            TokenKind::Error,
                            "Missing closing triple quote.".to_owned(),
                            self.token_start_line,
                        );
                        self.buffer.clear();
                        self.string_type = StringType::None;
                        self.state = State::Initial;
                    }
                    self.current_char = '\n';
                }
            }
            self.step();
        }
    }

    /// Runs the handler of the current state on the current character.
    fn step(&mut self) {
        match self.state {
            State::Initial => self.set_state_by_current_char(),
            State::KeywordOrIdentifier => self.read_keyword_or_identifier(),
            State::IdentifierOrStringLiteral => self.read_identifier_or_string_literal(),
            State::Comment => self.read_comment(),
            State::InvalidSymbol => self.read_invalid_symbol(),

            State::Plus
            | State::DoubleSlash
            | State::Power
            | State::Percent
            | State::At
            | State::LeftShift
            | State::RightShift
            | State::BitwiseOr
            | State::BitwiseAnd
            | State::BitwiseXor
            | State::Assign
            | State::Colon => self.read_assignment(),
            State::Minus => self.read_two_way_operator(
                TokenKind::Minus,
                '>',
                State::AssignmentOperator,
                State::Arrow,
            ),
            State::Asterisk => self.read_two_way_operator(
                TokenKind::Asterisk,
                '*',
                State::AssignmentOperator,
                State::Power,
            ),
            State::Slash => self.read_two_way_operator(
                TokenKind::Slash,
                '/',
                State::AssignmentOperator,
                State::DoubleSlash,
            ),
            State::Less => {
                self.read_two_way_operator(TokenKind::Less, '<', State::LessEqual, State::LeftShift)
            }
            State::Greater => self.read_two_way_operator(
                TokenKind::Greater,
                '>',
                State::GreaterEqual,
                State::RightShift,
            ),
            State::AssignmentOperator => {
                self.end_token_with_buffer(TokenKind::AssignmentOperator)
            }
            State::Dot => self.read_dot(),
            State::ExclamationMark => self.read_exclamation_mark(),

            State::DecimalInteger => self.read_decimal_integer(),
            State::StartingWithZero => self.read_zero_or_radix_prefix(),
            State::ZeroInteger => self.read_zero_integer(),
            State::IntegerWithZeroPrefix => self.read_integer_with_zero_prefix(),
            State::BinaryIntegerStart => self.read_radix_integer_start(2),
            State::OctalIntegerStart => self.read_radix_integer_start(8),
            State::HexIntegerStart => self.read_radix_integer_start(16),
            State::BinaryInteger => self.read_radix_integer(2),
            State::OctalInteger => self.read_radix_integer(8),
            State::HexInteger => self.read_radix_integer(16),
            State::Float => self.read_float(),
            State::ExponentFloatOnInteger => self.read_exponent_start(TokenKind::IntegerLiteral),
            State::ExponentFloatOnFloat => {
                self.read_exponent_start(TokenKind::FloatingPointLiteral)
            }
            State::ExponentFloat => self.read_exponent_float(),
            State::Imaginary => self.end_token_with_buffer(TokenKind::ImaginaryLiteral),

            State::SingleOrTripleQuotedString => self.read_single_or_triple_quoted_string(),
            State::ClosedSingleOrOpenedTripleQuotedString => {
                self.read_closed_single_or_opened_triple()
            }
            State::SingleQuotedString => self.read_single_quoted_string(),
            State::DoubleQuotedString => self.read_double_quoted_string(),
            State::TripleQuotedString => self.read_triple_quoted_string(),
            State::TripleQuotedStringWithQuote => self.read_triple_quoted_with_quote(),
            State::TripleQuotedStringWithDoubleQuote => self.read_triple_quoted_with_double_quote(),
            State::Escape => self.read_escaped(),

            State::FirstIndent => self.read_first_indent(),
            State::Indent => self.read_indent(),
            State::Backslash => self.read_backslash(),

            // Every remaining state is a terminal operator or delimiter
            // with a fixed spelling.
            State::Arrow
            | State::LessEqual
            | State::GreaterEqual
            | State::NotEqual
            | State::BitwiseNot
            | State::Semicolon
            | State::Comma
            | State::LeftParenthesis
            | State::RightParenthesis
            | State::LeftSquareBracket
            | State::RightSquareBracket
            | State::LeftCurlyBracket
            | State::RightCurlyBracket => self.end_terminal_operator(),
        }
    }

    /// Dispatches the current character from the initial state.
    ///
    /// Called both when the automaton sits between tokens and when a
    /// completed token re-dispatches its terminating character.
    pub(crate) fn set_state_by_current_char(&mut self) {
        let c = self.current_char;
        if chars::is_identifier_start(c) {
            if c == 'u' || c == 'U' {
                self.start_token(State::IdentifierOrStringLiteral);
            } else {
                self.start_token(State::KeywordOrIdentifier);
            }
        } else if c == '0' {
            self.start_token(State::StartingWithZero);
        } else if c.is_ascii_digit() {
            self.start_token(State::DecimalInteger);
        } else if c == '\'' {
            self.start_token(State::SingleOrTripleQuotedString);
            self.buffer.clear();
        } else if c == '"' {
            self.start_token(State::DoubleQuotedString);
            self.buffer.clear();
            self.string_type = StringType::Double;
        } else if c == '\n' {
            self.read_line_feed();
        } else if c == '\\' {
            self.cursor.mark();
            self.start_token(State::Backslash);
        } else if c.is_whitespace() {
            self.state = if self.blank_line && (c == ' ' || c == '\t') {
                State::FirstIndent
            } else {
                State::Initial
            };
        } else if c == '#' {
            self.state = State::Comment;
        } else if let Some(state) = State::from_symbol(c) {
            self.start_token(state);
        } else {
            self.error_here("Invalid symbol.");
            self.state = State::InvalidSymbol;
        }
    }

    /// Begins a new lexeme in the given state with the current character.
    pub(crate) fn start_token(&mut self, state: State) {
        self.state = state;
        self.buffer.push(self.current_char);
        self.token_start_line = self.current_line;
        self.blank_line = false;
    }

    /// Appends a token to the output.
    pub(crate) fn push_token_at(&mut self, kind: TokenKind, value: String, line: usize) {
        self.tokens.push(Token::new(kind, value, line));
    }

    /// Emits a token at the line the lexeme started, discards the buffer,
    /// and re-dispatches the current character.
    pub(crate) fn end_token(&mut self, kind: TokenKind, value: String) {
        self.push_token_at(kind, value, self.token_start_line);
        self.buffer.clear();
        self.set_state_by_current_char();
    }

    /// Emits a token whose value is the accumulated lexeme, then
    /// re-dispatches the current character.
    pub(crate) fn end_token_with_buffer(&mut self, kind: TokenKind) {
        let value = std::mem::take(&mut self.buffer);
        self.push_token_at(kind, value, self.token_start_line);
        self.set_state_by_current_char();
    }

    /// Emits an in-band error at the line the lexeme started, then
    /// re-dispatches the current character.
    pub(crate) fn end_error_token(&mut self, message: &str) {
        self.end_token(TokenKind::Error, message.to_owned());
    }

    /// Emits an in-band error at the current line without touching the
    /// automaton state.
    pub(crate) fn error_here(&mut self, message: &str) {
        self.push_token_at(TokenKind::Error, message.to_owned(), self.current_line);
    }
}
