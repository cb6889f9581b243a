use skim_ir::{Function, SourceBuilder};
use skim_lexer_core::RawTag;

use super::function::capture_function;
use super::Owner;
use crate::collapse::{collapse, collapse_macro, read_attribute};
use crate::scanner::Scanner;

/// Bounded scan over the items of an `impl` or trait body.
///
/// Recognizes only `fn`; nested `{...}` groups, attributes and macro
/// invocations are skipped. Stops at the body's closing `}`. Unsafe blocks
/// found in method bodies go straight to `out`.
pub(super) fn scan_block_items(
    sc: &mut Scanner<'_>,
    owner: Owner<'_>,
    out: &mut SourceBuilder,
) -> Vec<Function> {
    let mut functions = Vec::new();
    while let Some(token) = sc.next_token() {
        match token.tag {
            RawTag::RightBrace => break,
            RawTag::LeftBrace => {
                collapse('{', sc.cursor());
            }
            RawTag::Bang => collapse_macro(sc.cursor(), false),
            RawTag::Hash => {
                read_attribute(sc.cursor());
            }
            RawTag::Ident if token.text == "fn" => {
                if let Some((function, blocks)) = capture_function(sc, token.start, owner) {
                    out.extend_unsafe_blocks(blocks);
                    functions.push(function);
                }
            }
            _ => {}
        }
    }
    functions
}
