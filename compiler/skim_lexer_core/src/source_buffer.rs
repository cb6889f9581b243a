//! Decoded source text for the scanner.
//!
//! The buffer owns the text a [`Cursor`](crate::Cursor) walks over.
//! Acquisition never fails on content: invalid UTF-8 is decoded lossily and
//! every problem found on the way in is recorded as an [`EncodingIssue`], so
//! callers can report it while still receiving a best-effort inventory.
//!
//! # Encoding Detection
//!
//! During construction, the buffer scans the raw bytes for:
//! - a UTF-8 BOM (kept in the text; the tokenizer treats it as whitespace)
//! - UTF-16 BOMs (wrong encoding)
//! - interior null bytes
//! - invalid UTF-8 sequences (replaced with U+FFFD)

use std::io::{self, Read};

/// Decoded source text plus the encoding issues found while decoding it.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: String,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
///
/// `pos` and `len` are measured in bytes of the raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the raw input where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start. Wrong encoding.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start. Wrong encoding.
    Utf16BeBom,
    /// Null byte (U+0000) in source content.
    InteriorNull,
    /// Byte sequence that is not valid UTF-8; replaced with U+FFFD.
    InvalidUtf8,
}

impl SourceBuffer {
    /// Create a buffer from raw bytes, decoding them lossily.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut encoding_issues = Vec::new();
        detect_bom(bytes, &mut encoding_issues);
        detect_interior_nulls(bytes, &mut encoding_issues);
        detect_invalid_utf8(bytes, &mut encoding_issues);
        SourceBuffer {
            text: String::from_utf8_lossy(bytes).into_owned(),
            encoding_issues,
        }
    }

    /// Read a whole stream into a buffer.
    ///
    /// The only failure is the read itself; content problems become
    /// [`EncodingIssue`]s.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// The decoded text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect byte order marks at the start of the input.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    } else if source.starts_with(&[0xFF, 0xFE]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf16LeBom,
            pos: 0,
            len: 2,
        });
    } else if source.starts_with(&[0xFE, 0xFF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf16BeBom,
            pos: 0,
            len: 2,
        });
    }
}

/// Detect null bytes (U+0000) within the input.
///
/// Uses `memchr` for SIMD-accelerated null byte search instead of
/// byte-at-a-time iteration.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}

/// Record every invalid UTF-8 sequence in the input.
fn detect_invalid_utf8(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while offset < source.len() {
        let Err(err) = std::str::from_utf8(&source[offset..]) else {
            break;
        };
        let at = offset + err.valid_up_to();
        let len = err.error_len().unwrap_or(source.len() - at);
        if let (Ok(pos), Ok(len32)) = (u32::try_from(at), u32::try_from(len)) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InvalidUtf8,
                pos,
                len: len32,
            });
        }
        offset = at + len;
    }
}
