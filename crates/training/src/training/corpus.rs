//! Corpus loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use varnika_core::{Result, TokenizerError};

/// Read a UTF-8 corpus file, one record per line.
///
/// Lines are trimmed and empty lines are dropped. A missing file or invalid
/// UTF-8 is reported as [`TokenizerError::Io`].
pub fn read_corpus(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TokenizerError::io(path, e))?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| TokenizerError::io(path, e))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    log::info!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
