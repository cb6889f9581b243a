//! Forward-only character cursor with line/column bookkeeping.
//!
//! The cursor walks a `&str` one character at a time. Reading past the end
//! yields [`EOF_CHAR`] (`'\0'`) without moving. Interior null characters also
//! read as `'\0'`; use [`Cursor::is_eof()`] to tell them apart.
//!
//! Besides single-character stepping, the cursor knows how to step over the
//! lexical units whose content must never be interpreted structurally:
//! comments, string literals (plain, byte, raw) and char literals. Every
//! higher layer that counts delimiters relies on these to stay in sync.

use crate::Position;

/// Sentinel returned by [`Cursor::current()`] and [`Cursor::bump()`] at EOF.
pub const EOF_CHAR: char = '\0';

/// What a leading `'` turned out to introduce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quote {
    /// A char or byte literal such as `'x'` or `'\n'`.
    Char,
    /// A lifetime or label such as `'a` or `'static`.
    Lifetime,
}

/// Forward-only cursor over source text.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for bounded
/// lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Current byte offset into `text`.
    pos: u32,
    /// 1-based line of the current character.
    line: u32,
    /// 1-based column (in characters) of the current character.
    column: u32,
}

/// Size assertion: Cursor should be <= 32 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), 3 x u32 = 12 => 28 (+4 padding).
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

#[allow(
    clippy::cast_possible_truncation,
    reason = "len_utf8() is at most 4"
)]
#[inline]
fn char_width(c: char) -> u32 {
    c.len_utf8() as u32
}

/// Returns `true` for characters that may start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Returns `true` for characters that may continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Cursor {
            text,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the unconsumed remainder of the text.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.text.get(self.pos as usize..).unwrap_or("")
    }

    /// Returns the character at the current position without consuming it.
    ///
    /// Returns [`EOF_CHAR`] at EOF.
    #[inline]
    pub fn current(&self) -> char {
        self.rest().chars().next().unwrap_or(EOF_CHAR)
    }

    /// Returns the character one position ahead of current.
    #[inline]
    pub fn peek(&self) -> char {
        self.rest().chars().nth(1).unwrap_or(EOF_CHAR)
    }

    /// Returns the character two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> char {
        self.rest().chars().nth(2).unwrap_or(EOF_CHAR)
    }

    /// Consume and return the current character.
    ///
    /// At EOF this returns [`EOF_CHAR`] and does not move.
    #[inline]
    pub fn bump(&mut self) -> char {
        let Some(c) = self.rest().chars().next() else {
            return EOF_CHAR;
        };
        self.pos += char_width(c);
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Advance the cursor by one character.
    #[inline]
    pub fn advance(&mut self) {
        self.bump();
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.text.len()
    }

    /// Current byte offset in the text.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Line, column and byte offset of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.pos)
    }

    /// Extract a substring by byte offsets.
    ///
    /// Offsets come from this cursor's own positions and therefore fall on
    /// character boundaries; an out-of-range request yields `""`.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.text.get(start as usize..end as usize).unwrap_or("")
    }

    /// Extract the text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.bump();
        }
    }

    /// Advance past all whitespace, newlines included.
    ///
    /// A byte order mark counts as whitespace.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|c| c.is_whitespace() || c == '\u{FEFF}');
    }

    /// Advance past an identifier's continuation characters.
    #[inline]
    pub fn eat_ident_continue(&mut self) {
        self.eat_while(is_ident_continue);
    }

    /// Advance to the next `\n` or EOF, leaving the newline unconsumed.
    ///
    /// Uses `memchr` to find the newline; no newline is crossed, so only the
    /// column moves.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are u32 throughout, so the remainder fits"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = self.rest();
        let n = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        let skipped = &rest[..n];
        self.column += skipped.chars().count() as u32;
        self.pos += n as u32;
    }

    /// Step over a comment starting at the current position.
    ///
    /// Handles `//` line comments (the newline is left unconsumed) and nested
    /// `/* */` block comments. Returns `false` without moving if no comment
    /// starts here. An unterminated block comment runs to EOF.
    pub fn eat_comment(&mut self) -> bool {
        if self.current() != '/' {
            return false;
        }
        match self.peek() {
            '/' => {
                self.eat_until_newline_or_eof();
                true
            }
            '*' => {
                self.bump();
                self.bump();
                let mut depth = 1u32;
                while !self.is_eof() {
                    match (self.current(), self.peek()) {
                        ('/', '*') => {
                            self.bump();
                            self.bump();
                            depth += 1;
                        }
                        ('*', '/') => {
                            self.bump();
                            self.bump();
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {
                            self.bump();
                        }
                    }
                }
                true
            }
            _ => false,
        }
    }

    /// Number of `#` in a raw string opener at the current position.
    ///
    /// The current character must be `r` followed by zero or more `#` and a
    /// `"`. Returns `None` when no raw string starts here (for example the
    /// raw identifier `r#type`).
    fn raw_string_hashes(&self) -> Option<usize> {
        let rest = self.rest().as_bytes();
        if rest.first() != Some(&b'r') {
            return None;
        }
        let hashes = rest[1..].iter().take_while(|&&b| b == b'#').count();
        (rest.get(1 + hashes) == Some(&b'"')).then_some(hashes)
    }

    /// Returns `true` if a raw string literal (`r"..."`, `r#"..."#`) starts
    /// at the current position.
    pub fn at_raw_string(&self) -> bool {
        self.raw_string_hashes().is_some()
    }

    /// Step over a string literal starting at the current position.
    ///
    /// Accepts a plain `"..."` literal (escapes honored) or a raw literal
    /// `r#*"..."#*`. Prefixes such as `b` or `c` are ordinary characters to
    /// the cursor; step them first. Returns `false` without moving if no
    /// string starts here. An unterminated string runs to EOF.
    pub fn eat_string(&mut self) -> bool {
        if let Some(hashes) = self.raw_string_hashes() {
            for _ in 0..hashes + 2 {
                self.bump();
            }
            while !self.is_eof() {
                if self.bump() == '"' {
                    let closing = self.rest().as_bytes();
                    if closing.len() >= hashes && closing[..hashes].iter().all(|&b| b == b'#') {
                        for _ in 0..hashes {
                            self.bump();
                        }
                        break;
                    }
                }
            }
            return true;
        }
        if self.current() != '"' {
            return false;
        }
        self.bump();
        while !self.is_eof() {
            match self.bump() {
                '\\' => {
                    self.bump();
                }
                '"' => break,
                _ => {}
            }
        }
        true
    }

    /// Step over whatever a `'` at the current position introduces.
    ///
    /// `'x'`, `'\n'` and `'\u{1F600}'` are char literals and are consumed
    /// whole. Anything else is a lifetime or loop label: the quote and the
    /// following identifier are consumed. Returns `None` without moving if the
    /// current character is not `'`.
    pub fn eat_quote(&mut self) -> Option<Quote> {
        if self.current() != '\'' {
            return None;
        }
        if self.peek() == '\\' {
            self.bump(); // '
            self.bump(); // \
            self.bump(); // escaped char
            while !self.is_eof() && !matches!(self.current(), '\'' | '\n') {
                self.bump();
            }
            if self.current() == '\'' {
                self.bump();
            }
            return Some(Quote::Char);
        }
        if self.peek2() == '\'' && self.peek() != '\n' && self.peek() != EOF_CHAR {
            self.bump();
            self.bump();
            self.bump();
            return Some(Quote::Char);
        }
        self.bump();
        self.eat_ident_continue();
        Some(Quote::Lifetime)
    }
}
