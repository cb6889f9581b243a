//! Delimiter collapse and the skips built on it.
//!
//! Every routine here works directly on the shared [`Cursor`] and steps over
//! comments, string literals and char literals as opaque units, so a
//! delimiter inside them never changes depth.

use skim_lexer_core::{is_ident_start, Cursor};

/// One unit of input as seen by the accumulation loops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step<'a> {
    /// End of input; nothing was consumed.
    Eof,
    /// A comment was stepped over.
    Comment,
    /// A string literal, char literal or lifetime, with its text.
    Opaque(&'a str),
    /// Any other single character.
    Char(char),
}

/// Consume the next unit of input.
pub(crate) fn step<'a>(cursor: &mut Cursor<'a>) -> Step<'a> {
    if cursor.is_eof() {
        return Step::Eof;
    }
    let start = cursor.pos();
    if cursor.eat_comment() {
        return Step::Comment;
    }
    if cursor.eat_string() || cursor.eat_quote().is_some() {
        return Step::Opaque(cursor.slice_from(start));
    }
    Step::Char(cursor.bump())
}

/// The closer matching `open`; anything unrecognized closes with `}`.
pub(crate) fn closing(open: char) -> char {
    match open {
        '(' => ')',
        '<' => '>',
        '[' => ']',
        _ => '}',
    }
}

/// Consume up to and including the closer matching `open`.
///
/// `open` has already been consumed. Returns the consumed text, closer
/// included. Runs to end of input when the closer never comes. For `<`, the
/// `>` of `->` and `=>` does not close.
pub(crate) fn collapse<'a>(open: char, cursor: &mut Cursor<'a>) -> &'a str {
    let close = closing(open);
    let start = cursor.pos();
    let mut depth = 1u32;
    let mut prev = ' ';
    loop {
        match step(cursor) {
            Step::Eof => break,
            Step::Comment | Step::Opaque(_) => prev = ' ',
            Step::Char(c) => {
                if c == close && !(open == '<' && matches!(prev, '-' | '=')) {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                } else if c == open {
                    depth += 1;
                }
                prev = c;
            }
        }
    }
    cursor.slice_from(start)
}

/// Skip a macro invocation body after its `!`.
///
/// Whitespace is skipped first; after `macro_rules!` the macro's name is
/// skipped too. A following `{`, `(` or `[` is consumed and collapsed.
/// Anything else (`!=`, a negation) is left alone.
pub(crate) fn collapse_macro(cursor: &mut Cursor<'_>, after_macro_rules: bool) {
    cursor.eat_whitespace();
    if after_macro_rules && is_ident_start(cursor.current()) {
        cursor.eat_ident_continue();
        cursor.eat_whitespace();
    }
    if matches!(cursor.current(), '{' | '(' | '[') {
        let open = cursor.bump();
        collapse(open, cursor);
    }
}

/// Read an attribute after its `#`.
///
/// Returns the attribute text (`#[...]` or `#![...]`) with all whitespace
/// removed, or `None` if no `[` follows (a stray `#`, a shebang).
pub(crate) fn read_attribute(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut ahead = *cursor;
    let mut text = String::from("#");
    ahead.eat_whitespace();
    if ahead.current() == '!' {
        ahead.bump();
        text.push('!');
        ahead.eat_whitespace();
    }
    if ahead.current() != '[' {
        return None;
    }
    ahead.bump();
    text.push('[');
    let body = collapse('[', &mut ahead);
    text.extend(body.chars().filter(|c| !c.is_whitespace()));
    *cursor = ahead;
    Some(text)
}

/// Advance to the `{` opening an item body, collapsing `(`, `[` and `<`
/// groups on the way.
///
/// The `{` is consumed. Returns `false` at a `;` (no body) or end of input.
pub(crate) fn advance_to_body(cursor: &mut Cursor<'_>) -> bool {
    loop {
        match step(cursor) {
            Step::Eof | Step::Char(';') => return false,
            Step::Char('{') => return true,
            Step::Char(c @ ('(' | '[' | '<')) => {
                collapse(c, cursor);
            }
            _ => {}
        }
    }
}

/// Advance past whitespace and comments.
pub(crate) fn skip_trivia(cursor: &mut Cursor<'_>) {
    loop {
        cursor.eat_whitespace();
        if !cursor.eat_comment() {
            break;
        }
    }
}
