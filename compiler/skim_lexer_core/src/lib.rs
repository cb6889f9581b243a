//! Low-level scanning primitives for skimming Rust source files.
//!
//! This crate is standalone: it knows nothing about declarations, spans of
//! items, or the inventory built on top of it. It provides:
//!
//! - [`SourceBuffer`]: the decoded input text plus any encoding issues found
//!   while acquiring it.
//! - [`Cursor`]: a forward-only character cursor reporting accurate
//!   [`Position`]s (line, column, byte offset).
//! - [`RawScanner`]: a general tokenizer that splits words and punctuation
//!   and steps over comments, string literals and char literals.

mod cursor;
mod position;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::{is_ident_continue, is_ident_start, Cursor, Quote, EOF_CHAR};
pub use position::Position;
pub use raw_scanner::RawScanner;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
