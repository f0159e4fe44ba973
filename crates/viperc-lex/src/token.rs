//! Token types produced by the Viper lexer.

use std::fmt;

use serde::Serialize;

/// A single lexical unit.
///
/// Each token records its classification, the text captured from the source
/// (or the canonical spelling for fixed-form tokens), and the zero-based
/// line on which the token started. Tokens are immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Classification of the token.
    pub kind: TokenKind,

    /// The lexeme for identifiers, keywords, literals, and errors; the
    /// canonical spelling for operators and delimiters; empty for tokens
    /// whose kind is self-describing.
    pub value: String,

    /// Zero-based line where the token started.
    pub line: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
        }
    }
}

/// The closed set of token classifications.
///
/// Operators and delimiters carry a canonical spelling, available through
/// [`TokenKind::value`]. Compound assignments such as `+=` or `:=` are all
/// emitted as [`TokenKind::AssignmentOperator`] with the full lexeme as the
/// token value; [`TokenKind::Equal`] and [`TokenKind::ColonAssign`] are part
/// of the closed set for consumers even though the automaton reaches `==`
/// and `:=` through the assignment-operator path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // =========================================================================
    // ARITHMETIC OPERATORS
    // =========================================================================
    /// "+"
    Plus,
    /// "-"
    Minus,
    /// "*"
    Asterisk,
    /// "**"
    Power,
    /// "/"
    Slash,
    /// "//"
    DoubleSlash,
    /// "%"
    Percent,
    /// "@"
    At,

    // =========================================================================
    // BITWISE OPERATORS
    // =========================================================================
    /// "<<"
    LeftShift,
    /// ">>"
    RightShift,
    /// "&"
    BitwiseAnd,
    /// "|"
    BitwiseOr,
    /// "^"
    BitwiseXor,
    /// "~"
    BitwiseNot,

    // =========================================================================
    // COMPARISON OPERATORS
    // =========================================================================
    /// "<"
    Less,
    /// ">"
    Greater,
    /// "<="
    LessEqual,
    /// ">="
    GreaterEqual,
    /// "=="
    Equal,
    /// "!="
    NotEqual,

    // =========================================================================
    // ASSIGNMENT
    // =========================================================================
    /// ":=" - walrus operator
    ColonAssign,

    /// A compound assignment; the token value holds the full lexeme
    /// (`+=`, `//=`, `**=`, `>>=`, `&=`, `==`, `:=`, ...).
    AssignmentOperator,

    // =========================================================================
    // DELIMITERS
    // =========================================================================
    /// "("
    LeftParenthesis,
    /// ")"
    RightParenthesis,
    /// "["
    LeftSquareBracket,
    /// "]"
    RightSquareBracket,
    /// "{"
    LeftCurlyBracket,
    /// "}"
    RightCurlyBracket,
    /// ","
    Comma,
    /// ":"
    Colon,
    /// "."
    Dot,
    /// ";"
    Semicolon,
    /// "="
    Assign,
    /// "->"
    Arrow,
    /// "!" - only valid before "(" or as the head of "!="
    ExclamationMark,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Decimal integer literal, e.g. `42`
    IntegerLiteral,
    /// Binary integer literal, e.g. `0b1010`
    BinaryIntegerLiteral,
    /// Octal integer literal, e.g. `0o777`
    OctalIntegerLiteral,
    /// Hexadecimal integer literal, e.g. `0x1F`
    HexIntegerLiteral,
    /// Floating-point literal, e.g. `3.14e-2`
    FloatingPointLiteral,
    /// Imaginary literal, e.g. `1j`
    ImaginaryLiteral,
    /// String literal; the token value holds the content with escapes
    /// translated
    StringLiteral,

    // =========================================================================
    // LINE STRUCTURE
    // =========================================================================
    /// End of a logical line
    Newline,
    /// Opening of an indented block
    Indent,
    /// Closing of an indented block
    Dedent,

    // =========================================================================
    // META
    // =========================================================================
    /// Identifier; the token value holds the name
    Identifier,
    /// Word found in the caller-supplied keyword set
    Keyword,
    /// Lexical error; the token value holds the message
    Error,
}

impl TokenKind {
    /// Returns the canonical spelling of this kind.
    ///
    /// Empty for kinds whose value is captured from the source (literals,
    /// identifiers, keywords, errors) and for the structural kinds.
    pub const fn value(self) -> &'static str {
        match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Power => "**",
            TokenKind::Slash => "/",
            TokenKind::DoubleSlash => "//",
            TokenKind::Percent => "%",
            TokenKind::At => "@",
            TokenKind::LeftShift => "<<",
            TokenKind::RightShift => ">>",
            TokenKind::BitwiseAnd => "&",
            TokenKind::BitwiseOr => "|",
            TokenKind::BitwiseXor => "^",
            TokenKind::BitwiseNot => "~",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::ColonAssign => ":=",
            TokenKind::LeftParenthesis => "(",
            TokenKind::RightParenthesis => ")",
            TokenKind::LeftSquareBracket => "[",
            TokenKind::RightSquareBracket => "]",
            TokenKind::LeftCurlyBracket => "{",
            TokenKind::RightCurlyBracket => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Assign => "=",
            TokenKind::Arrow => "->",
            TokenKind::ExclamationMark => "!",
            TokenKind::AssignmentOperator
            | TokenKind::IntegerLiteral
            | TokenKind::BinaryIntegerLiteral
            | TokenKind::OctalIntegerLiteral
            | TokenKind::HexIntegerLiteral
            | TokenKind::FloatingPointLiteral
            | TokenKind::ImaginaryLiteral
            | TokenKind::StringLiteral
            | TokenKind::Newline
            | TokenKind::Indent
            | TokenKind::Dedent
            | TokenKind::Identifier
            | TokenKind::Keyword
            | TokenKind::Error => "",
        }
    }

    /// Returns the display name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Power => "POWER",
            TokenKind::Slash => "SLASH",
            TokenKind::DoubleSlash => "DOUBLE_SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::At => "AT",
            TokenKind::LeftShift => "LEFT_SHIFT",
            TokenKind::RightShift => "RIGHT_SHIFT",
            TokenKind::BitwiseAnd => "BITWISE_AND",
            TokenKind::BitwiseOr => "BITWISE_OR",
            TokenKind::BitwiseXor => "BITWISE_XOR",
            TokenKind::BitwiseNot => "BITWISE_NOT",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::ColonAssign => "COLON_ASSIGN",
            TokenKind::AssignmentOperator => "ASSIGNMENT_OPERATOR",
            TokenKind::LeftParenthesis => "LEFT_PARENTHESIS",
            TokenKind::RightParenthesis => "RIGHT_PARENTHESIS",
            TokenKind::LeftSquareBracket => "LEFT_SQUARE_BRACKET",
            TokenKind::RightSquareBracket => "RIGHT_SQUARE_BRACKET",
            TokenKind::LeftCurlyBracket => "LEFT_CURLY_BRACKET",
            TokenKind::RightCurlyBracket => "RIGHT_CURLY_BRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Arrow => "ARROW",
            TokenKind::ExclamationMark => "EXCLAMATION_MARK",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::BinaryIntegerLiteral => "BINARY_INTEGER_LITERAL",
            TokenKind::OctalIntegerLiteral => "OCTAL_INTEGER_LITERAL",
            TokenKind::HexIntegerLiteral => "HEX_INTEGER_LITERAL",
            TokenKind::FloatingPointLiteral => "FLOATING_POINT_LITERAL",
            TokenKind::ImaginaryLiteral => "IMAGINARY_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
