use skim_ir::SourceBuilder;
use skim_lexer_core::Position;
use tracing::trace;

use super::block_items::scan_block_items;
use super::Owner;
use crate::collapse::{collapse, step, Step};
use crate::scanner::Scanner;
use crate::signature::leading_name;

/// Capture a trait after its `trait` keyword and declare it.
///
/// The body is collapsed, then re-scanned on its own so the signatures and
/// default methods it declares are recorded as functions owned by the trait.
pub(crate) fn capture_trait(sc: &mut Scanner<'_>, start: Position, out: &mut SourceBuilder) {
    let mut head = String::new();
    let mut body = None;
    loop {
        match step(sc.cursor()) {
            Step::Eof | Step::Char(';') => break,
            Step::Comment => {}
            Step::Opaque(text) => head.push_str(text),
            Step::Char('{') => {
                let origin = sc.position();
                body = Some((collapse('{', sc.cursor()), origin));
                break;
            }
            Step::Char(open @ ('<' | '(')) => {
                collapse(open, sc.cursor());
            }
            Step::Char(c) => head.push(c),
        }
    }
    let name = leading_name(&head);
    if name.is_empty() {
        return;
    }
    out.declare_trait(name, sc.span_from(start));

    let Some((text, origin)) = body else {
        return;
    };
    let owner = Owner {
        type_name: None,
        trait_name: Some(name),
    };
    let functions = scan_block_items(&mut Scanner::nested(text, origin), owner, out);
    trace!(item = name, line = start.line, functions = functions.len(), "trait");
    for function in functions {
        out.push_function(function);
    }
}
