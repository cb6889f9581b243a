use skim_ir::SourceBuilder;
use skim_lexer_core::Position;
use tracing::{debug, trace};

use super::block_items::scan_block_items;
use super::Owner;
use crate::collapse::{collapse, step, Step};
use crate::scanner::Scanner;
use crate::signature::resolve_impl_target;

/// Capture an `impl` block after its keyword.
///
/// The target type (and trait, if any) is looked up by name, created on
/// first sight, and receives the block's methods. An `impl` without a body
/// (`type T = impl Trait;`) records nothing.
pub(crate) fn capture_impl(sc: &mut Scanner<'_>, start: Position, out: &mut SourceBuilder) {
    let sig_start = sc.cursor().pos();
    let sig_end = loop {
        match step(sc.cursor()) {
            Step::Eof => {
                debug!(line = start.line, "impl signature runs to end of input");
                return;
            }
            Step::Char(';') => return,
            Step::Char('{') => break sc.cursor().pos() - 1,
            Step::Char(open @ ('<' | '(' | '[')) => {
                collapse(open, sc.cursor());
            }
            _ => {}
        }
    };
    let sig = sc.cursor().slice(sig_start, sig_end);
    let Some(target) = resolve_impl_target(sig) else {
        debug!(line = start.line, "impl target not resolved");
        collapse('{', sc.cursor());
        return;
    };

    let index = out.type_index(target.type_name);
    if let Some(trait_name) = target.trait_name {
        out.trait_index(trait_name);
        out.add_type_trait(index, trait_name);
    }
    let owner = Owner {
        type_name: Some(target.type_name),
        trait_name: target.trait_name,
    };
    let methods = scan_block_items(sc, owner, out);
    trace!(
        item = target.type_name,
        line = start.line,
        methods = methods.len(),
        "impl"
    );
    out.type_decl_mut(index).methods.extend(methods);
}
