//! Operator and delimiter lexing.
//!
//! This module contains the operator continuation states. A trailing `=`
//! folds the lexeme into a generic assignment-operator token; the two-way
//! operators additionally accept their doubling or arrow continuation
//! before the `=` test applies again.

use crate::state::State;
use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Tests the current operator for a trailing `=`.
    ///
    /// Handles: `+=`, `//=`, `**=`, `%=`, `@=`, `<<=`, `>>=`, `|=`, `&=`,
    /// `^=`, `==`, `:=` - and the bare operators when no `=` follows.
    pub(crate) fn read_assignment(&mut self) {
        if self.current_char == '=' {
            self.buffer.push('=');
            self.state = State::AssignmentOperator;
        } else {
            self.end_terminal_operator();
        }
    }

    /// Disambiguates an operator with two possible continuations.
    ///
    /// Handles: `-` (`-=`, `->`), `*` (`*=`, `**`), `/` (`/=`, `//`),
    /// `<` (`<=`, `<<`), `>` (`>=`, `>>`).
    pub(crate) fn read_two_way_operator(
        &mut self,
        kind: TokenKind,
        follow: char,
        on_assign: State,
        on_follow: State,
    ) {
        if self.current_char == '=' {
            self.buffer.push('=');
            self.state = on_assign;
        } else if self.current_char == follow {
            self.buffer.push(follow);
            self.state = on_follow;
        } else {
            self.end_token(kind, kind.value().to_owned());
        }
    }

    /// Emits the token of a terminal operator state.
    pub(crate) fn end_terminal_operator(&mut self) {
        if let Some(kind) = self.state.operator_kind() {
            self.end_token(kind, kind.value().to_owned());
        }
    }

    /// Handles the character after a `.`.
    ///
    /// A digit turns the dot into a leading-dot float; anything else emits
    /// the dot delimiter.
    pub(crate) fn read_dot(&mut self) {
        if self.current_char.is_ascii_digit() {
            self.buffer.push(self.current_char);
            self.state = State::Float;
        } else {
            self.end_token(TokenKind::Dot, TokenKind::Dot.value().to_owned());
        }
    }

    /// Handles the character after a `!`.
    ///
    /// Only `!=` and `!` directly before `(` are legal.
    pub(crate) fn read_exclamation_mark(&mut self) {
        if self.current_char == '=' {
            self.buffer.push('=');
            self.state = State::NotEqual;
        } else if self.current_char == '(' {
            self.end_token(
                TokenKind::ExclamationMark,
                TokenKind::ExclamationMark.value().to_owned(),
            );
        } else {
            self.end_error_token("Error. '!=' operator expected.");
        }
    }
}
