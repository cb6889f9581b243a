//! Significant-token stream over one piece of text, reporting file-absolute
//! positions.
//!
//! The top-level scan runs a [`Scanner`] over the whole file. Captured bodies
//! are re-scanned with a nested scanner whose `origin` is the absolute
//! position of the body's first character, so every position it reports is
//! already rebased onto the file.

use skim_ir::Span;
use skim_lexer_core::{Cursor, Position, RawScanner, RawTag};

/// A significant token with its text and absolute start.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Token<'a> {
    pub(crate) tag: RawTag,
    pub(crate) text: &'a str,
    pub(crate) start: Position,
}

impl Token<'_> {
    /// Returns `true` if this is the identifier `word`.
    pub(crate) fn is_word(&self, word: &str) -> bool {
        self.tag == RawTag::Ident && self.text == word
    }
}

pub(crate) struct Scanner<'a> {
    raw: RawScanner<'a>,
    origin: Position,
}

impl<'a> Scanner<'a> {
    /// Scanner over a whole file.
    pub(crate) fn new(text: &'a str) -> Self {
        Self::nested(text, Position::START)
    }

    /// Scanner over `text`, which starts at `origin` in the enclosing file.
    pub(crate) fn nested(text: &'a str, origin: Position) -> Self {
        Scanner {
            raw: RawScanner::new(Cursor::new(text)),
            origin,
        }
    }

    /// Next significant token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Option<Token<'a>> {
        let token = self.raw.next_significant();
        if token.tag == RawTag::Eof {
            return None;
        }
        Some(Token {
            tag: token.tag,
            text: self.raw.text(&token),
            start: token.start.rebase(self.origin),
        })
    }

    /// The shared cursor, for capture routines that work character by
    /// character.
    pub(crate) fn cursor(&mut self) -> &mut Cursor<'a> {
        self.raw.cursor_mut()
    }

    /// A copy of the cursor for bounded lookahead.
    pub(crate) fn snapshot(&self) -> Cursor<'a> {
        *self.raw.cursor()
    }

    /// Absolute position of the next unconsumed character.
    pub(crate) fn position(&self) -> Position {
        self.raw.cursor().position().rebase(self.origin)
    }

    /// Span from `start` to the current position.
    pub(crate) fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.position())
    }
}

#[cfg(test)]
mod tests;
