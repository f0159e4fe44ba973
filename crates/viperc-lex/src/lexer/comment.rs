//! Comment consumption and invalid-symbol recovery.

use crate::Lexer;

impl Lexer<'_> {
    /// Consumes comment bytes until the line feed, which then re-enters
    /// the line-structure machinery.
    pub(crate) fn read_comment(&mut self) {
        if self.current_char == '\n' {
            self.set_state_by_current_char();
        }
    }

    /// Resumes lexing after an invalid symbol was reported.
    ///
    /// The bad byte is already gone; the character in hand starts the next
    /// lexeme.
    pub(crate) fn read_invalid_symbol(&mut self) {
        self.set_state_by_current_char();
    }
}
