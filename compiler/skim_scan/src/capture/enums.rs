use skim_ir::Enum;
use skim_lexer_core::Position;
use tracing::{debug, trace};

use crate::collapse::{collapse, read_attribute, step, Step};
use crate::scanner::Scanner;
use crate::signature::leading_name;

/// Capture an enum after its `enum` keyword.
///
/// Variants are split on top-level commas. A `{...}` or `(...)` payload is
/// collapsed into its variant's text, so `Warning{ category: i32, message:
/// String }` stays one variant. Comments and variant attributes are dropped.
pub(crate) fn capture_enum(sc: &mut Scanner<'_>, start: Position) -> Option<Enum> {
    let mut head = String::new();
    let has_body = loop {
        match step(sc.cursor()) {
            Step::Eof | Step::Char(';') => break false,
            Step::Comment => {}
            Step::Opaque(text) => head.push_str(text),
            Step::Char('{') => break true,
            Step::Char('<') => {
                collapse('<', sc.cursor());
            }
            Step::Char(c) => head.push(c),
        }
    };
    let name = leading_name(&head).to_owned();
    if name.is_empty() {
        return None;
    }

    let mut variants = Vec::new();
    let mut closed = !has_body;
    while !closed {
        let mut variant = String::new();
        loop {
            match step(sc.cursor()) {
                Step::Eof => {
                    debug!(item = %name, "enum body runs to end of input");
                    closed = true;
                    break;
                }
                Step::Char('}') => {
                    closed = true;
                    break;
                }
                Step::Char(',') => break,
                Step::Comment => {}
                Step::Char('#') => {
                    read_attribute(sc.cursor());
                }
                Step::Opaque(text) => variant.push_str(text),
                Step::Char(open @ ('{' | '(')) => {
                    variant.push(open);
                    variant.push_str(collapse(open, sc.cursor()));
                }
                Step::Char(c) => variant.push(c),
            }
        }
        let variant = variant.trim();
        if !variant.is_empty() {
            variants.push(variant.to_owned());
        }
    }

    trace!(item = %name, line = start.line, variants = variants.len(), "enum");
    Some(Enum {
        name,
        span: sc.span_from(start),
        variants,
    })
}
