//! Plain text line extraction.

use super::*;

/// Reads the non-empty, trimmed lines of the text file at `path`.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
  let bytes = std::fs::read(path)?;
  Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

/// Splits `text` into trimmed, non-empty lines.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
  text.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect()
}
