//! Decoding paper files into ordered text units.
//!
//! Every supported format is read at a fixed [`Granularity`]: PDFs yield one
//! unit per page, Word documents one unit per non-empty paragraph and text
//! files one unit per non-empty line. The [`segment`](crate::segment) module
//! then works on these units without knowing anything about the file format.
//!
//! # Examples
//!
//! ```no_run
//! use gleaner::{loader, paper::PaperRecord};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let units = loader::load(&PaperRecord::from_path("DOCS/yolov8.pdf"))?;
//! println!("{} {:?} units", units.units.len(), units.granularity);
//! # Ok(())
//! # }
//! ```

use super::*;
use crate::paper::Format;

pub mod docx;
pub mod pdf;
pub mod text;

/// The kind of unit a document was split into.
///
/// Granularity decides how many units form the home page and the full text,
/// how far abstract and experiment blocks extend, and how large the
/// experiments region may grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
  /// One unit per PDF page
  Page,
  /// One unit per Word paragraph
  Paragraph,
  /// One unit per text line
  Line,
}

impl Granularity {
  /// Number of leading units forming the title-candidate region.
  pub fn home_units(&self) -> usize {
    match self {
      Self::Page => 1,
      Self::Paragraph => 5,
      Self::Line => 10,
    }
  }

  /// Number of leading units forming the full-text region.
  pub fn full_text_units(&self) -> usize {
    match self {
      Self::Page => 10,
      Self::Paragraph => 50,
      Self::Line => 100,
    }
  }

  /// Units following an abstract marker that belong to the abstract block.
  ///
  /// Pages cut the abstract out of the marker page itself instead.
  pub fn abstract_follow_units(&self) -> usize {
    match self {
      Self::Page => 0,
      Self::Paragraph => 3,
      Self::Line => 10,
    }
  }

  /// Units following an experiment marker that belong to the same contribution.
  pub fn experiment_follow_units(&self) -> usize {
    match self {
      Self::Page => 0,
      Self::Paragraph => 5,
      Self::Line => 20,
    }
  }

  /// Nominal character cap of the experiments region.
  pub fn experiments_cap(&self) -> usize {
    match self {
      Self::Page => 5000,
      Self::Paragraph | Self::Line => 3000,
    }
  }

  /// Keywords marking a unit as experimental content.
  pub fn experiment_keywords(&self) -> &'static [&'static str] {
    match self {
      Self::Page => keywords::PAGE_EXPERIMENT,
      Self::Paragraph | Self::Line => keywords::BLOCK_EXPERIMENT,
    }
  }
}

impl From<Format> for Granularity {
  fn from(format: Format) -> Self {
    match format {
      Format::Pdf => Self::Page,
      Format::Docx | Format::Doc => Self::Paragraph,
      Format::Txt => Self::Line,
    }
  }
}

/// Raw text of a document, split into ordered units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnits {
  /// What each unit represents
  pub granularity: Granularity,
  /// The units in document order
  pub units:       Vec<String>,
}

impl TextUnits {
  /// Creates a new set of units.
  pub fn new(granularity: Granularity, units: Vec<String>) -> Self { Self { granularity, units } }
}

/// Decodes the file behind `paper` into text units.
///
/// # Errors
///
/// - [`GleanerError::UnsupportedFormat`] for records without a supported format
/// - [`GleanerError::Decode`] if the file is missing or its reader fails
pub fn load(paper: &PaperRecord) -> Result<TextUnits> {
  let format =
    paper.format.ok_or_else(|| GleanerError::UnsupportedFormat(paper.name.clone()))?;

  if !paper.path.exists() {
    return Err(GleanerError::decode(
      &paper.path,
      GleanerError::Path(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "paper file does not exist (wrong path or deleted)",
      )),
    ));
  }

  let units = match format {
    Format::Pdf => pdf::read_pages(&paper.path),
    Format::Docx | Format::Doc => docx::read_paragraphs(&paper.path),
    Format::Txt => text::read_lines(&paper.path),
  }
  .map_err(|e| GleanerError::decode(&paper.path, e))?;

  debug!("Loaded {} {:?} units from {}", units.len(), Granularity::from(format), paper.name);
  Ok(TextUnits::new(format.into(), units))
}
