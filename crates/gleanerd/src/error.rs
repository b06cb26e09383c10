//! Errors surfaced by the `gleaner` command line interface.

use thiserror::Error;

use super::*;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum GleanerdError {
  /// An error from the analysis library
  #[error(transparent)]
  Gleaner(#[from] GleanerError),

  /// A failed terminal prompt
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// Terminal or file system I/O failure
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// JSON rendering failure
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// The requested paper index does not exist
  #[error("no paper with index {0}, run `gleaner list` to see the available papers")]
  PaperNotFound(usize),
}

/// Type alias for Result with [`GleanerdError`] as the error type.
pub type Result<T> = core::result::Result<T, GleanerdError>;
