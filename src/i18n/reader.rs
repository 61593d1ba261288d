//! Terms and keys file reading
//!
//! Files are read whole as UTF-8 and split into lines the same way regardless
//! of platform: `\n`, `\r\n` and a lone `\r` all terminate a line.

use std::path::Path;
use tokio::fs;
use tracing::debug;
use crate::utils::errors::{PropgenError, Result};
use super::normalizer::LineMode;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Read a keys file, normalizing every line into a property key
pub async fn read_keys(path: &Path) -> Result<Vec<String>> {
    read_lines(path, LineMode::Key).await
}

/// Read a terms file, encoding every line into an ASCII property value
pub async fn read_terms(path: &Path) -> Result<Vec<String>> {
    read_lines(path, LineMode::Term).await
}

/// Read a file and normalize each of its lines with `mode`
pub async fn read_lines(path: &Path, mode: LineMode) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| PropgenError::io(path, e))?;

    let lines: Vec<String> = split_lines(&content).map(|line| mode.apply(line)).collect();
    debug!(path = %path.display(), mode = ?mode, lines = lines.len(), "File read");

    Ok(lines)
}

/// Split text into lines without their terminators
///
/// A trailing terminator does not open an empty last line, and a leading
/// byte-order mark is not part of the first line.
pub fn split_lines(content: &str) -> Lines<'_> {
    Lines {
        rest: content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content),
    }
}

/// Iterator over the lines of a file's content
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &self.rest[..end];
                let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[end + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}
