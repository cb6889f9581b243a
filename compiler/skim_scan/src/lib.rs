//! Best-effort structural lexer for Rust source files.
//!
//! `skim_scan` makes one forward pass over a file and records a shallow
//! inventory of what it declares: functions, types with the methods of their
//! `impl` blocks, enums with their variants, traits, existing tests and
//! `unsafe` blocks. Each record carries the exact span it occupies.
//!
//! It does not build a syntax tree, resolve names, or validate anything.
//! Unusual or truncated input degrades to a partial inventory; the scan
//! itself has no failure mode.
//!
//! ```
//! let source = skim_scan::parse_str("impl Point { fn norm(&self) -> f64 { 0.0 } }");
//! let point = source.type_decl("Point").map(|t| t.methods.len());
//! assert_eq!(point, Some(1));
//! ```
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=skim_scan=debug` (per-file summaries) or
//! `RUST_LOG=skim_scan=trace` (every captured construct) after calling
//! [`init_tracing`].

mod capture;
mod collapse;
mod config;
mod dispatch;
mod error;
mod scanner;
mod signature;

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Once;

use skim_lexer_core::SourceBuffer;
use tracing::{debug, warn};

pub use config::ScanConfig;
pub use error::ScanError;
pub use skim_ir::{
    Enum, Function, Position, Source, Span, TestMarker, Trait, TypeDecl, UnsafeAudit, UnsafeBlock,
};
pub use skim_lexer_core::{EncodingIssue, EncodingIssueKind};

use dispatch::scan_source;
use scanner::Scanner;
use skim_ir::SourceBuilder;

/// Scan `text` with the default configuration.
pub fn parse_str(text: &str) -> Source {
    parse_str_with(text, &ScanConfig::default())
}

/// Scan `text` with an explicit configuration.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse_str_with(text: &str, config: &ScanConfig) -> Source {
    let mut out = SourceBuilder::new();
    scan_source(&mut Scanner::new(text), config, &mut out);
    let source = out.finish(u32::try_from(text.len()).unwrap_or(u32::MAX));
    debug!(
        functions = source.functions().len(),
        types = source.type_decls().len(),
        enums = source.enums().len(),
        traits = source.traits().len(),
        tests = source.tests().len(),
        unsafe_blocks = source.unsafe_blocks().len(),
        "scan complete"
    );
    source
}

/// Read all of `reader` and scan it with the default configuration.
///
/// Invalid UTF-8 is replaced rather than rejected; only a failing read is an
/// error.
pub fn parse<R: Read>(reader: R) -> Result<Source, ScanError> {
    parse_with(reader, &ScanConfig::default())
}

/// Read all of `reader` and scan it with an explicit configuration.
pub fn parse_with<R: Read>(reader: R, config: &ScanConfig) -> Result<Source, ScanError> {
    let buffer = SourceBuffer::from_reader(reader)?;
    Ok(scan_buffer(&buffer, config))
}

/// Open and scan the file at `path` with the default configuration.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Source, ScanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(ScanError::read_file(path))?;
    let buffer = SourceBuffer::from_reader(file).map_err(ScanError::read_file(path))?;
    Ok(scan_buffer(&buffer, &ScanConfig::default()))
}

fn scan_buffer(buffer: &SourceBuffer, config: &ScanConfig) -> Source {
    for issue in buffer.encoding_issues() {
        warn!(kind = ?issue.kind, offset = issue.pos, len = issue.len, "encoding issue in source");
    }
    parse_str_with(buffer.as_str(), config)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Installs a subscriber only when `RUST_LOG` is set. Safe to call multiple
/// times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
