use skim_ir::{Function, UnsafeBlock};
use skim_lexer_core::Position;
use tracing::{debug, trace};

use super::unsafe_block::unsafe_blocks_in;
use super::Owner;
use crate::collapse::{collapse, step, Step};
use crate::scanner::Scanner;
use crate::signature::parse_fn_signature;

/// Capture a function after its `fn` keyword, which starts at `start`.
///
/// Returns the function and the unsafe blocks found by re-scanning its body.
/// Returns `None` for a function-pointer type (`fn(u8) -> u8`) and for a
/// signature without a name.
pub(crate) fn capture_function(
    sc: &mut Scanner<'_>,
    start: Position,
    owner: Owner<'_>,
) -> Option<(Function, Vec<UnsafeBlock>)> {
    let mut ahead = sc.snapshot();
    ahead.eat_whitespace();
    if ahead.current() == '(' {
        return None;
    }

    let sig_start = sc.cursor().pos();
    let mut sig_end = None;
    let mut body = None;
    loop {
        match step(sc.cursor()) {
            Step::Eof => {
                debug!(line = start.line, "function signature runs to end of input");
                break;
            }
            Step::Char('{') => {
                sig_end = Some(sc.cursor().pos() - 1);
                let origin = sc.position();
                body = Some((collapse('{', sc.cursor()), origin));
                break;
            }
            Step::Char(';') => {
                sig_end = Some(sc.cursor().pos() - 1);
                break;
            }
            Step::Char(open @ ('<' | '(' | '[')) => {
                collapse(open, sc.cursor());
            }
            _ => {}
        }
    }
    let sig_end = sig_end.unwrap_or_else(|| sc.cursor().pos());
    let sig = parse_fn_signature(sc.cursor().slice(sig_start, sig_end));
    if sig.name.is_empty() {
        return None;
    }

    let function = Function {
        name: sig.name.to_owned(),
        params: sig.params.into_iter().map(str::to_owned).collect(),
        ret: sig.ret.to_owned(),
        span: sc.span_from(start),
        owner_type: owner.type_name.map(str::to_owned),
        owner_trait: owner.trait_name.map(str::to_owned),
    };
    let blocks = body.map_or_else(Vec::new, |(text, origin)| unsafe_blocks_in(text, origin));
    trace!(
        item = %function.name,
        line = start.line,
        unsafe_blocks = blocks.len(),
        "function"
    );
    Some((function, blocks))
}
