use skim_ir::UnsafeBlock;
use skim_lexer_core::{Position, RawTag};
use tracing::{debug, trace};

use crate::collapse::{collapse, read_attribute, skip_trivia};
use crate::scanner::Scanner;

/// Capture the block after an `unsafe` keyword.
///
/// Returns `None` when `unsafe` qualifies an item (`unsafe fn`,
/// `unsafe impl`, `unsafe extern`) or anything but `{` comes next, as in the
/// attribute form `#[unsafe(no_mangle)]`. The span runs from the `{` through
/// its matching `}`.
pub(crate) fn capture_unsafe(sc: &mut Scanner<'_>) -> Option<UnsafeBlock> {
    let mut ahead = sc.snapshot();
    skip_trivia(&mut ahead);
    if ahead.current() != '{' {
        if ahead.is_eof() {
            debug!("`unsafe` without a block before end of input");
        }
        return None;
    }
    *sc.cursor() = ahead;
    let start = sc.position();
    sc.cursor().bump();
    collapse('{', sc.cursor());
    let span = sc.span_from(start);
    trace!(line = start.line, "unsafe block");
    Some(UnsafeBlock { span })
}

/// Every unsafe block in a captured body.
///
/// `origin` is the absolute position of the body's first character.
pub(crate) fn unsafe_blocks_in(body: &str, origin: Position) -> Vec<UnsafeBlock> {
    let mut sc = Scanner::nested(body, origin);
    let mut blocks = Vec::new();
    while let Some(token) = sc.next_token() {
        if token.tag == RawTag::Hash {
            read_attribute(sc.cursor());
        } else if token.is_word("unsafe") {
            blocks.extend(capture_unsafe(&mut sc));
        }
    }
    blocks
}
