use skim_ir::{TestMarker, UnsafeBlock};
use skim_lexer_core::{Position, RawTag};
use tracing::trace;

use super::unsafe_block::unsafe_blocks_in;
use crate::collapse::{advance_to_body, collapse, read_attribute};
use crate::scanner::Scanner;

/// Capture the function under a test attribute whose `#` is at `start`.
///
/// Further attributes and qualifiers (`async`, `pub(crate)`, `extern "C"`)
/// before `fn` are skipped. Returns `None` if the attribute is not followed by a
/// function. The test body is re-scanned for unsafe blocks.
pub(crate) fn capture_test(
    sc: &mut Scanner<'_>,
    start: Position,
) -> Option<(TestMarker, Vec<UnsafeBlock>)> {
    let name = loop {
        let token = sc.next_token()?;
        match token.tag {
            RawTag::Hash => {
                read_attribute(sc.cursor());
            }
            RawTag::Ident if token.text == "fn" => {
                let name = sc.next_token()?;
                if name.tag != RawTag::Ident {
                    return None;
                }
                break name.text;
            }
            RawTag::LeftParen => {
                collapse('(', sc.cursor());
            }
            RawTag::Ident | RawTag::Str => {}
            _ => return None,
        }
    };

    let blocks = if advance_to_body(sc.cursor()) {
        let origin = sc.position();
        let body = collapse('{', sc.cursor());
        unsafe_blocks_in(body, origin)
    } else {
        Vec::new()
    };
    trace!(item = name, line = start.line, "test");
    let test = TestMarker {
        name: name.to_owned(),
        span: sc.span_from(start),
    };
    Some((test, blocks))
}
