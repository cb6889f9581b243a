//! Raw token tags produced by [`RawScanner`](crate::RawScanner).

use crate::Position;

/// Classification of a raw token.
///
/// Keywords are not distinguished from identifiers; callers compare the
/// token text. Punctuation the structural scan cares about gets its own tag,
/// the rest is [`RawTag::Punct`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // Words
    Ident,
    Lifetime,
    Number,

    // Literals
    Str,
    Char,

    // Trivia
    Whitespace,
    Newline,
    LineComment,
    BlockComment,

    // Delimiters
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Less,
    Greater,

    // Punctuation
    Bang,
    Hash,
    Semicolon,
    Comma,
    Colon,
    Equal,
    Minus,
    Slash,
    /// Any other ASCII punctuation character.
    Punct,

    /// A character that fits no other class.
    Unknown,
    Eof,
}

impl RawTag {
    /// Returns `true` for whitespace, newlines and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment | RawTag::BlockComment
        )
    }
}

/// A raw token: tag, start position and byte length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub start: Position,
    pub len: u32,
}

impl RawToken {
    /// Byte offset one past the token's last byte.
    #[inline]
    pub fn end_offset(&self) -> u32 {
        self.start.offset + self.len
    }
}
