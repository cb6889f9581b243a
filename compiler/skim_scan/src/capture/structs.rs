use skim_ir::SourceBuilder;
use skim_lexer_core::Position;
use tracing::trace;

use crate::collapse::{collapse, step, Step};
use crate::scanner::Scanner;
use crate::signature::leading_name;

/// Capture a struct after its `struct` keyword and declare it.
///
/// Fields are collapsed and discarded. A type already created by an earlier
/// `impl` receives this declaration's span.
pub(crate) fn capture_struct(sc: &mut Scanner<'_>, start: Position, out: &mut SourceBuilder) {
    let mut head = String::new();
    loop {
        match step(sc.cursor()) {
            Step::Eof | Step::Char(';') => break,
            Step::Comment => {}
            Step::Opaque(text) => head.push_str(text),
            Step::Char('{') => {
                collapse('{', sc.cursor());
                break;
            }
            Step::Char(open @ ('(' | '<')) => {
                collapse(open, sc.cursor());
            }
            Step::Char(c) => head.push(c),
        }
    }
    let name = leading_name(&head);
    if name.is_empty() {
        return;
    }
    trace!(item = name, line = start.line, "struct");
    out.declare_type(name, sc.span_from(start));
}
