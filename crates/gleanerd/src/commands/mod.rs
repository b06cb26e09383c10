//! Subcommands of the `gleaner` binary.

use clap::Args;

use super::*;

pub mod analyze;
pub mod batch;
pub mod export;
pub mod list;
pub mod menu;

pub use analyze::{analyze, AnalyzeArgs};
pub use batch::{batch, BatchArgs};
pub use export::{export, ExportArgs};
pub use list::list;
pub use menu::menu;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// List the supported papers of the papers directory
  List,

  /// Analyze one paper by its index from `list`
  Analyze(AnalyzeArgs),

  /// Analyze every supported paper of the papers directory
  Batch(BatchArgs),

  /// Analyze one paper and write the result to the output directory
  Export(ExportArgs),

  /// Interactive menu (default when no command is given)
  Menu,
}

/// Looks up the supported paper with the given 1-based `index`.
pub fn find_paper(gleaner: &Gleaner, index: usize) -> Result<PaperRecord> {
  gleaner
    .scan()?
    .into_iter()
    .find(|p| p.index == Some(index))
    .ok_or(GleanerdError::PaperNotFound(index))
}
