//! How much of a file sits under an `unsafe` marker.

use crate::{Source, Span};

/// Summary of the unsafe blocks in one [`Source`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnsafeAudit {
    /// Number of unsafe blocks recorded.
    pub blocks: usize,
    /// Bytes covered by at least one block.
    pub unsafe_bytes: u32,
    /// Lines touched by at least one block.
    pub unsafe_lines: u32,
    /// Length of the scanned text in bytes.
    pub total_bytes: u32,
}

impl UnsafeAudit {
    /// Fraction of the file's bytes under an unsafe marker, in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.total_bytes == 0 {
            0.0
        } else {
            f64::from(self.unsafe_bytes) / f64::from(self.total_bytes)
        }
    }
}

impl Source {
    /// Summarize the unsafe blocks; overlapping blocks are counted once.
    pub fn unsafe_audit(&self) -> UnsafeAudit {
        let mut spans: Vec<Span> = self.unsafe_blocks().iter().map(|b| b.span).collect();
        spans.sort_by_key(|s| s.start.offset);

        let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start.offset <= last.end.offset => {
                    if span.end.offset > last.end.offset {
                        last.end = span.end;
                    }
                }
                _ => merged.push(span),
            }
        }

        let mut unsafe_bytes = 0;
        let mut unsafe_lines = 0;
        let mut last_line = 0;
        for span in &merged {
            unsafe_bytes += span.len();
            let first = span.start.line.max(last_line + 1);
            if span.end.line >= first {
                unsafe_lines += span.end.line - first + 1;
            }
            last_line = last_line.max(span.end.line);
        }

        UnsafeAudit {
            blocks: self.unsafe_blocks().len(),
            unsafe_bytes,
            unsafe_lines,
            total_bytes: self.len(),
        }
    }
}
