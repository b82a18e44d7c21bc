//! Position-tracked cursor over the input text.
//!
//! The scanner is the decoder's only view of the input: a peek/bump interface
//! over code points plus whitespace skipping between tokens. It carries the
//! current byte offset so every parse error can report where it happened.

/// Cursor over the code points of a JSON document.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Current byte offset into the input.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Look at the next code point without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Look one code point past the next one. Used to tell a signed number
    /// from a signed `Infinity` literal.
    pub(crate) fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consume and return the next code point.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume `literal` if the input starts with it at the cursor.
    pub(crate) fn eat_literal(&mut self, literal: &str) -> bool {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// The input consumed since `start`, which must be a previously observed
    /// cursor position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Skip JSON insignificant whitespace (space, tab, newline, carriage
    /// return) between tokens.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\n' | '\r' => self.pos += 1,
                _ => break,
            }
        }
    }
}
