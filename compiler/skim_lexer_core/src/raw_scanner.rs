//! Hand-written raw scanner producing [`RawToken`]s.
//!
//! The scanner splits text into words and punctuation, classifying trivia
//! (whitespace, newlines, comments) and literals (strings, chars) so callers
//! never see their contents as structure. It does not resolve keywords; the
//! structural scan compares token text.
//!
//! # Design
//!
//! Main dispatch matches on the current character. Each arm calls a focused
//! method that advances the cursor and returns a token. The scanner owns its
//! [`Cursor`] and lends it out through [`RawScanner::cursor_mut()`] so
//! callers can switch between token-level and character-level reading over
//! the same position.

use crate::cursor::{is_ident_continue, is_ident_start, Cursor, Quote};
use crate::tag::{RawTag, RawToken};

/// Tokenizer over a [`Cursor`].
///
/// Produces one token at a time. Malformed input never fails: unterminated
/// literals run to EOF and stray characters become [`RawTag::Unknown`].
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// The underlying cursor.
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Mutable access to the underlying cursor for character-level reads.
    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    /// The text of a token produced by this scanner.
    pub fn text(&self, token: &RawToken) -> &'a str {
        self.cursor.slice(token.start.offset, token.end_offset())
    }

    /// Produce the next raw token, trivia included.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the text is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.position();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                start,
                len: 0,
            };
        }
        let tag = match self.cursor.current() {
            '\n' => self.single(RawTag::Newline),
            '/' => self.slash_or_comment(),
            '"' => self.string(),
            '\'' => self.quote(),
            'r' if self.cursor.at_raw_string() => self.string(),
            c if is_ident_start(c) => self.identifier(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_whitespace() || c == '\u{FEFF}' => self.whitespace(),
            '{' => self.single(RawTag::LeftBrace),
            '}' => self.single(RawTag::RightBrace),
            '(' => self.single(RawTag::LeftParen),
            ')' => self.single(RawTag::RightParen),
            '[' => self.single(RawTag::LeftBracket),
            ']' => self.single(RawTag::RightBracket),
            '<' => self.single(RawTag::Less),
            '>' => self.single(RawTag::Greater),
            '!' => self.single(RawTag::Bang),
            '#' => self.single(RawTag::Hash),
            ';' => self.single(RawTag::Semicolon),
            ',' => self.single(RawTag::Comma),
            ':' => self.single(RawTag::Colon),
            '=' => self.single(RawTag::Equal),
            '-' => self.single(RawTag::Minus),
            c if c.is_ascii_punctuation() => self.single(RawTag::Punct),
            _ => self.single(RawTag::Unknown),
        };
        RawToken {
            tag,
            start,
            len: self.cursor.pos() - start.offset,
        }
    }

    /// Produce the next token that is not trivia.
    pub fn next_significant(&mut self) -> RawToken {
        loop {
            let token = self.next_token();
            if !token.tag.is_trivia() {
                return token;
            }
        }
    }

    // ─── Single Characters ─────────────────────────────────────────

    #[inline]
    fn single(&mut self, tag: RawTag) -> RawTag {
        self.cursor.advance();
        tag
    }

    // ─── Trivia ────────────────────────────────────────────────────

    fn whitespace(&mut self) -> RawTag {
        self.cursor
            .eat_while(|c| c != '\n' && (c.is_whitespace() || c == '\u{FEFF}'));
        RawTag::Whitespace
    }

    fn slash_or_comment(&mut self) -> RawTag {
        let is_line = self.cursor.peek() == '/';
        if self.cursor.eat_comment() {
            if is_line {
                RawTag::LineComment
            } else {
                RawTag::BlockComment
            }
        } else {
            self.single(RawTag::Slash)
        }
    }

    // ─── Words ─────────────────────────────────────────────────────

    fn identifier(&mut self) -> RawTag {
        let start = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_ident_continue();
        let word = self.cursor.slice_from(start);

        // Literal prefixes: b"..", br"..", c"..", cr#".."#, b'x'.
        if matches!(word, "b" | "c" | "br" | "cr") {
            match self.cursor.current() {
                '"' => return self.string(),
                '#' if word.ends_with('r') => {
                    // `br#"..."#`: the cursor only recognizes raw strings from
                    // the `r`, so step the remaining hashes and body here.
                    let hashes = self.cursor.rest().bytes().take_while(|&b| b == b'#').count();
                    if self.cursor.rest().as_bytes().get(hashes) == Some(&b'"') {
                        return self.raw_body(hashes);
                    }
                }
                '\'' if word == "b" => return self.quote(),
                _ => {}
            }
        }
        if word == "r" && self.cursor.current() == '#' && is_ident_start(self.cursor.peek()) {
            // Raw identifier: r#type
            self.cursor.advance();
            self.cursor.eat_ident_continue();
        }
        RawTag::Ident
    }

    fn number(&mut self) -> RawTag {
        self.cursor.advance();
        loop {
            let c = self.cursor.current();
            if is_ident_continue(c) {
                self.cursor.advance();
            } else if c == '.' && self.cursor.peek().is_ascii_digit() {
                self.cursor.advance();
            } else {
                break;
            }
        }
        RawTag::Number
    }

    // ─── Literals ──────────────────────────────────────────────────

    fn string(&mut self) -> RawTag {
        self.cursor.eat_string();
        RawTag::Str
    }

    /// Body of a raw string whose `r` was already consumed as part of a
    /// prefix word; the cursor sits on the first `#`.
    fn raw_body(&mut self, hashes: usize) -> RawTag {
        for _ in 0..=hashes {
            self.cursor.advance();
        }
        while !self.cursor.is_eof() {
            if self.cursor.bump() == '"' {
                let rest = self.cursor.rest().as_bytes();
                if rest.len() >= hashes && rest[..hashes].iter().all(|&b| b == b'#') {
                    for _ in 0..hashes {
                        self.cursor.advance();
                    }
                    break;
                }
            }
        }
        RawTag::Str
    }

    fn quote(&mut self) -> RawTag {
        match self.cursor.eat_quote() {
            Some(Quote::Lifetime) => RawTag::Lifetime,
            Some(Quote::Char) | None => RawTag::Char,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}
