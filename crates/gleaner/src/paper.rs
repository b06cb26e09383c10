//! Paper records and directory scanning.
//!
//! A [`PaperRecord`] describes one file found in the papers directory. It is
//! created by [`scan_directory`], never modified afterward, and consumed by the
//! [`loader`](crate::loader) and [`segment`](crate::segment) modules.
//!
//! # Examples
//!
//! ```no_run
//! use gleaner::paper::scan_directory;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! for paper in scan_directory("DOCS")?.iter().filter(|p| p.is_valid()) {
//!   println!("{:>3}  {} ({})", paper.index.unwrap_or_default(), paper.name, paper.format.map(|f| f.to_string()).unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

use super::*;

/// Supported document formats.
///
/// Each format is decoded at a fixed [`Granularity`](crate::loader::Granularity):
/// PDFs by page, Word documents by paragraph and text files by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
  /// Portable Document Format (`.pdf`)
  Pdf,
  /// Office Open XML word processing document (`.docx`)
  Docx,
  /// Legacy Word document (`.doc`), read with the `.docx` reader
  Doc,
  /// Plain text (`.txt`)
  Txt,
}

impl Format {
  /// The extension for this format, including the leading dot.
  pub fn extension(&self) -> &'static str {
    match self {
      Self::Pdf => ".pdf",
      Self::Docx => ".docx",
      Self::Doc => ".doc",
      Self::Txt => ".txt",
    }
  }

  /// Determines the format of a path from its extension, ignoring case.
  pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
    let extension = path.as_ref().extension()?.to_str()?;
    extension.parse().ok()
  }
}

impl Display for Format {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Pdf => write!(f, "PDF"),
      Self::Docx => write!(f, "DOCX"),
      Self::Doc => write!(f, "DOC"),
      Self::Txt => write!(f, "TXT"),
    }
  }
}

impl FromStr for Format {
  type Err = GleanerError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
      "pdf" => Ok(Self::Pdf),
      "docx" => Ok(Self::Docx),
      "doc" => Ok(Self::Doc),
      "txt" => Ok(Self::Txt),
      _ => Err(GleanerError::UnsupportedFormat(s.to_string())),
    }
  }
}

/// Whether a scanned file can be analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
  /// The file has a supported extension
  Valid,
  /// The file was found but its extension is not supported
  Unsupported,
}

/// A file found in the papers directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
  /// File name including the extension
  pub name:      String,
  /// Absolute path to the file
  pub path:      PathBuf,
  /// Detected format, `None` for unsupported files
  pub format:    Option<Format>,
  /// Validity status
  pub status:    Validity,
  /// 1-based position among the valid records, `None` for unsupported files
  pub index:     Option<usize>,
}

impl PaperRecord {
  /// Builds a record for a single file, independent of any directory scan.
  ///
  /// The record has no index.
  pub fn from_path(path: impl AsRef<Path>) -> Self {
    let path = path.as_ref();
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let format = Format::from_path(&path);
    let status = if format.is_some() { Validity::Valid } else { Validity::Unsupported };
    Self { name, path, format, status, index: None }
  }

  /// Whether this record can be analyzed.
  pub fn is_valid(&self) -> bool { self.status == Validity::Valid }

  /// The file name without its extension.
  pub fn stem(&self) -> String {
    Path::new(&self.name)
      .file_stem()
      .map(|s| s.to_string_lossy().into_owned())
      .unwrap_or_else(|| self.name.clone())
  }
}

/// Lists the files of `dir` as paper records, sorted by file name.
///
/// Directories and hidden files are skipped. Valid records are numbered from 1
/// in name order. A missing directory is created, and an empty list is returned
/// for it.
///
/// # Errors
///
/// Returns [`GleanerError::Path`] if the directory cannot be created or read.
pub fn scan_directory(dir: impl AsRef<Path>) -> Result<Vec<PaperRecord>> {
  let dir = dir.as_ref();
  if !dir.exists() {
    info!("Papers directory {} does not exist, creating it", dir.display());
    std::fs::create_dir_all(dir)?;
    return Ok(Vec::new());
  }

  let mut paths = Vec::new();
  for entry in std::fs::read_dir(dir)? {
    let entry = entry?;
    if !entry.file_type()?.is_file() || entry.file_name().to_string_lossy().starts_with('.') {
      continue;
    }
    paths.push(entry.path());
  }
  paths.sort();

  let mut next_index = 1;
  let records = paths
    .into_iter()
    .map(|path| {
      let mut record = PaperRecord::from_path(path);
      if record.is_valid() {
        record.index = Some(next_index);
        next_index += 1;
      } else {
        trace!("Skipping unsupported file {}", record.name);
      }
      record
    })
    .collect::<Vec<_>>();

  debug!(
    "Scanned {}: {} files, {} supported",
    dir.display(),
    records.len(),
    records.iter().filter(|r| r.is_valid()).count()
  );
  Ok(records)
}
