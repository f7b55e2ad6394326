pub mod output;

// Re-export the writer machinery for convenient access
pub use output::{create_writer, OutputFormat, ReportWriter};

use crate::core::errors::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a file fully and split it into right-trimmed lines.
///
/// The whole file is consumed before any counting happens. A missing file
/// and non-UTF-8 content map to distinct error kinds so callers can tell
/// the failures apart.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    let text = String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("read {} bytes from {}", text.len(), path.display());

    Ok(text
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect())
}
