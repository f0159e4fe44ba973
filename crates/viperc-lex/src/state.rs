//! Automaton states of the lexer.
//!
//! States and token kinds are two disjoint enumerations; terminal operator
//! states resolve to their token kind through the explicit lookup in
//! [`State::operator_kind`], and the single-character dispatch from the
//! initial state goes through [`State::from_symbol`].

use crate::token::TokenKind;

/// A state of the lexing automaton.
///
/// Every per-state handler consumes exactly one character and either keeps
/// accumulating, emits a token and re-dispatches the character, or emits a
/// token after consuming it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Between tokens, waiting for the next lexeme to start.
    Initial,

    // Words
    KeywordOrIdentifier,
    /// Saw `u` or `U`; could be a string prefix or a plain identifier.
    IdentifierOrStringLiteral,

    // Recovery
    Comment,
    InvalidSymbol,

    // Operators and delimiters; terminal states are named after their kind.
    Plus,
    Minus,
    Asterisk,
    Power,
    Slash,
    DoubleSlash,
    Percent,
    At,
    LeftShift,
    RightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNot,
    Assign,
    Colon,
    AssignmentOperator,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    NotEqual,
    Arrow,
    Dot,
    ExclamationMark,
    Semicolon,
    Comma,
    LeftParenthesis,
    RightParenthesis,
    LeftSquareBracket,
    RightSquareBracket,
    LeftCurlyBracket,
    RightCurlyBracket,

    // Numeric literals
    DecimalInteger,
    /// Saw a leading `0`; the next character picks the radix or the
    /// zero-run/zero-prefix branch.
    StartingWithZero,
    ZeroInteger,
    IntegerWithZeroPrefix,
    BinaryIntegerStart,
    OctalIntegerStart,
    HexIntegerStart,
    BinaryInteger,
    OctalInteger,
    HexInteger,
    Float,
    ExponentFloatOnInteger,
    ExponentFloatOnFloat,
    ExponentFloat,
    Imaginary,

    // String literals
    SingleOrTripleQuotedString,
    ClosedSingleOrOpenedTripleQuotedString,
    SingleQuotedString,
    DoubleQuotedString,
    TripleQuotedString,
    TripleQuotedStringWithQuote,
    TripleQuotedStringWithDoubleQuote,
    Escape,

    // Line structure
    FirstIndent,
    Indent,
    Backslash,
}

impl State {
    /// Looks up the start state for a single-character operator or
    /// delimiter.
    pub(crate) fn from_symbol(c: char) -> Option<State> {
        let state = match c {
            '+' => State::Plus,
            '-' => State::Minus,
            '*' => State::Asterisk,
            '/' => State::Slash,
            '%' => State::Percent,
            '@' => State::At,
            '&' => State::BitwiseAnd,
            '|' => State::BitwiseOr,
            '^' => State::BitwiseXor,
            '~' => State::BitwiseNot,
            '<' => State::Less,
            '>' => State::Greater,
            '=' => State::Assign,
            ':' => State::Colon,
            '.' => State::Dot,
            '!' => State::ExclamationMark,
            ';' => State::Semicolon,
            ',' => State::Comma,
            '(' => State::LeftParenthesis,
            ')' => State::RightParenthesis,
            '[' => State::LeftSquareBracket,
            ']' => State::RightSquareBracket,
            '{' => State::LeftCurlyBracket,
            '}' => State::RightCurlyBracket,
            _ => return None,
        };
        Some(state)
    }

    /// Resolves a terminal operator or delimiter state to its token kind.
    ///
    /// Returns `None` for every state that does not stand for a fixed
    /// spelling.
    pub(crate) fn operator_kind(self) -> Option<TokenKind> {
        let kind = match self {
            State::Plus => TokenKind::Plus,
            State::Minus => TokenKind::Minus,
            State::Asterisk => TokenKind::Asterisk,
            State::Power => TokenKind::Power,
            State::Slash => TokenKind::Slash,
            State::DoubleSlash => TokenKind::DoubleSlash,
            State::Percent => TokenKind::Percent,
            State::At => TokenKind::At,
            State::LeftShift => TokenKind::LeftShift,
            State::RightShift => TokenKind::RightShift,
            State::BitwiseAnd => TokenKind::BitwiseAnd,
            State::BitwiseOr => TokenKind::BitwiseOr,
            State::BitwiseXor => TokenKind::BitwiseXor,
            State::BitwiseNot => TokenKind::BitwiseNot,
            State::Assign => TokenKind::Assign,
            State::Colon => TokenKind::Colon,
            State::Less => TokenKind::Less,
            State::Greater => TokenKind::Greater,
            State::LessEqual => TokenKind::LessEqual,
            State::GreaterEqual => TokenKind::GreaterEqual,
            State::NotEqual => TokenKind::NotEqual,
            State::Arrow => TokenKind::Arrow,
            State::Dot => TokenKind::Dot,
            State::ExclamationMark => TokenKind::ExclamationMark,
            State::Semicolon => TokenKind::Semicolon,
            State::Comma => TokenKind::Comma,
            State::LeftParenthesis => TokenKind::LeftParenthesis,
            State::RightParenthesis => TokenKind::RightParenthesis,
            State::LeftSquareBracket => TokenKind::LeftSquareBracket,
            State::RightSquareBracket => TokenKind::RightSquareBracket,
            State::LeftCurlyBracket => TokenKind::LeftCurlyBracket,
            State::RightCurlyBracket => TokenKind::RightCurlyBracket,
            _ => return None,
        };
        Some(kind)
    }
}

/// Quote style of the string literal in progress; selects the state the
/// escape sub-automaton returns to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StringType {
    None,
    Single,
    Double,
    Triple,
}
