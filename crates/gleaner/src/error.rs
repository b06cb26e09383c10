//! Error types for the gleaner library.
//!
//! This module provides a single error type covering every failure mode of the
//! analysis pipeline:
//! - Decoding source documents
//! - Rejecting documents with too little text
//! - Talking to the language model and validating what it returned
//! - Configuration and file system access
//!
//! Only some of these ever reach a caller. Model failures are recovered inside
//! the pipeline by falling back to heuristic extraction, and per-document
//! failures are collected into a batch error log instead of aborting the batch.
//!
//! # Examples
//!
//! ```no_run
//! use gleaner::{error::GleanerError, paper::PaperRecord, Gleaner};
//!
//! # async fn example(gleaner: &Gleaner, paper: &PaperRecord) -> Result<(), GleanerError> {
//! match gleaner.analyze(paper).await {
//!   Err(GleanerError::ContentTooShort { length }) => println!("Only {length} characters"),
//!   Err(GleanerError::Decode { path, .. }) => println!("Unreadable: {}", path.display()),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(analysis) => println!("{}", analysis.analysis_result.paper_title),
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Error type alias used for the [`gleaner`](crate) crate.
pub type Result<T> = core::result::Result<T, GleanerError>;

/// Errors that can occur when analyzing papers.
#[derive(Error, Debug)]
pub enum GleanerError {
  /// The source document could not be decoded into text.
  ///
  /// Wraps the underlying reader failure ([`GleanerError::Lopdf`],
  /// [`GleanerError::Zip`], [`GleanerError::Xml`] or [`GleanerError::Path`])
  /// together with the offending file.
  #[error("failed to read {}: {source}", path.display())]
  Decode {
    /// File that failed to decode
    path:   PathBuf,
    /// The reader error
    source: Box<GleanerError>,
  },

  /// The decoded document holds less usable text than the analysis needs.
  ///
  /// The contained value is the character count of the bounded full-text
  /// region.
  #[error("content too short ({length} < 200 characters), no information can be extracted")]
  ContentTooShort {
    /// Number of characters actually available
    length: usize,
  },

  /// The file extension is not one of the supported formats.
  #[error("unsupported format: {0} (supported: .pdf, .docx, .doc, .txt)")]
  UnsupportedFormat(String),

  /// PDF parsing and processing errors from the lopdf library.
  ///
  /// Common causes are malformed or encrypted files and broken object
  /// references.
  #[error(transparent)]
  Lopdf(#[from] lopdf::Error),

  /// A Word document is not a valid ZIP container.
  #[error(transparent)]
  Zip(#[from] zip::result::ZipError),

  /// A Word document's XML body could not be parsed.
  #[error("XML parsing error: {0}")]
  Xml(String),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// A network request to the language model failed.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The language model service answered with an error.
  #[error("model call failed: {0}")]
  ModelCall(String),

  /// A model was not specified for the LLM request.
  #[error("No model was chosen for the LLM.")]
  LLMMissingModel,

  /// No messages were provided in the LLM request.
  #[error("No messages were supplied to send to the LLM.")]
  LLMMissingMessage,

  /// The model answered, but not with a usable analysis record.
  ///
  /// Raised for unparseable JSON, missing keys, or blank mandatory fields.
  #[error("invalid model output: {0}")]
  ModelOutputInvalid(String),

  /// The papers directory holds no document in a supported format.
  #[error(
    "no supported papers found in {} (supported: .pdf, .docx, .doc, .txt)",
    .0.display()
  )]
  NoValidPapers(PathBuf),

  /// JSON serialization of results failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// The configuration file is not valid TOML or has wrong types.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be written as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// An invalid configuration value, such as an unusable model host.
  #[error("{0}")]
  Config(String),
}

impl GleanerError {
  /// Wraps a reader error as a decoding failure for `path`.
  pub fn decode(path: impl Into<PathBuf>, source: GleanerError) -> Self {
    Self::Decode { path: path.into(), source: Box::new(source) }
  }

  /// Whether this error came from the model collaborator and is therefore
  /// recoverable by heuristic fallback.
  pub fn is_model_error(&self) -> bool {
    matches!(
      self,
      Self::Network(_)
        | Self::ModelCall(_)
        | Self::LLMMissingModel
        | Self::LLMMissingMessage
        | Self::ModelOutputInvalid(_)
    )
  }
}
