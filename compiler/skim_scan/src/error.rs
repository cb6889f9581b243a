//! Failures at the input boundary.
//!
//! The scan itself never fails; only acquiring the text can.

use std::io;
use std::path::PathBuf;

/// Error returned when the source text cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Reading from a caller-supplied stream failed.
    #[error("failed to read source: {0}")]
    Read(#[from] io::Error),

    /// Opening or reading a file failed.
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn read_file(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| ScanError::ReadFile { path, source }
    }
}
