//! Top-level dispatch: routes keyword tokens to their capture routines.

use skim_ir::SourceBuilder;
use skim_lexer_core::{Position, RawTag};

use crate::capture::{
    capture_enum, capture_function, capture_impl, capture_struct, capture_test, capture_trait,
    capture_unsafe, Owner,
};
use crate::collapse::{collapse_macro, read_attribute};
use crate::config::ScanConfig;
use crate::scanner::{Scanner, Token};

/// Scan to end of input, recording every recognized construct in `out`.
pub(crate) fn scan_source(sc: &mut Scanner<'_>, config: &ScanConfig, out: &mut SourceBuilder) {
    let mut after_macro_rules = false;
    while let Some(token) = sc.next_token() {
        match token.tag {
            RawTag::Bang => collapse_macro(sc.cursor(), after_macro_rules),
            RawTag::Hash => attribute(sc, token.start, config, out),
            RawTag::Ident => keyword(sc, token, out),
            _ => {}
        }
        after_macro_rules = token.is_word("macro_rules");
    }
}

fn keyword(sc: &mut Scanner<'_>, token: Token<'_>, out: &mut SourceBuilder) {
    let start = token.start;
    match token.text {
        "fn" => {
            if let Some((function, blocks)) = capture_function(sc, start, Owner::default()) {
                out.push_function(function);
                out.extend_unsafe_blocks(blocks);
            }
        }
        "struct" => capture_struct(sc, start, out),
        "enum" => {
            if let Some(decl) = capture_enum(sc, start) {
                out.push_enum(decl);
            }
        }
        "trait" => capture_trait(sc, start, out),
        "impl" => capture_impl(sc, start, out),
        "unsafe" => {
            if let Some(block) = capture_unsafe(sc) {
                out.push_unsafe_block(block);
            }
        }
        _ => {}
    }
}

fn attribute(sc: &mut Scanner<'_>, start: Position, config: &ScanConfig, out: &mut SourceBuilder) {
    let Some(text) = read_attribute(sc.cursor()) else {
        return;
    };
    if config.is_test_module_marker(&text) {
        out.mark_test_module(start.line);
    } else if config.is_test_marker(&text) {
        if let Some((test, blocks)) = capture_test(sc, start) {
            out.push_test(test);
            out.extend_unsafe_blocks(blocks);
        }
    }
}

#[cfg(test)]
mod tests;
