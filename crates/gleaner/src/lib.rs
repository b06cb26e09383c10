//! Academic paper metadata extraction library.
//!
//! `gleaner` turns paper files (PDF, Word, plain text) into a fixed, typed
//! analysis record covering:
//!
//! - The paper title
//! - Innovation claims and their value
//! - Key formulas, derivation steps and mathematical advantages
//! - Reproduction requirements (data, environment, hardware, steps, code)
//! - Comparative experiments (methods, metrics, results, conclusion)
//!
//! # Features
//!
//! - **Structural segmentation**: raw text is split into home page, abstract, experiments,
//!   conclusion and full-text regions with per-format size caps
//! - **Heuristic extraction**: every field can be produced from keyword scoring alone, so a
//!   result is always available
//! - **Model-assisted extraction**: an optional language model (Ollama) is asked for the same
//!   record, and its answer is validated before it is trusted
//! - **Batch processing**: whole directories are processed sequentially and a failure on one
//!   paper never aborts the batch
//!
//! # Getting Started
//!
//! ```no_run
//! use gleaner::{Config, Gleaner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let gleaner = Gleaner::builder().with_config(Config::default()).build();
//!
//!   // Analyze every supported paper in the configured directory
//!   let report = gleaner.analyze_batch().await?;
//!   println!("Analyzed {} of {} papers", report.analyzed_count, report.valid_papers_count);
//!
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`paper`]: Paper records and directory scanning
//! - [`loader`]: Decoding files into page/paragraph/line units
//! - [`segment`]: Structural segmentation into [`segment::StructuredContent`]
//! - [`classify`]: Topic relevance classification
//! - [`extract`]: Heuristic field extractors
//! - [`analysis`]: The output schema
//! - [`llm`]: Language model client
//! - [`prompt`]: Prompt composition for the model
//! - [`select`]: Choosing between model and heuristic results
//! - [`gleaner`]: The analyzer tying everything together
//! - [`export`]: Writing results to disk

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod analysis;
pub mod classify;
pub mod configuration;
pub mod error;
pub mod export;
pub mod extract;
pub mod gleaner;
pub mod keywords;
pub mod llm;
pub mod loader;
pub mod paper;
pub mod prompt;
pub mod segment;
pub mod select;

pub use crate::{configuration::Config, gleaner::Gleaner};
use crate::{
  analysis::*, error::*, llm::ModelClient, loader::TextUnits, paper::PaperRecord,
  segment::StructuredContent,
};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use gleaner::prelude::*;
///
/// async fn example(gleaner: &Gleaner) -> Result<(), GleanerError> {
///   for paper in gleaner.scan()?.iter().filter(|p| p.is_valid()) {
///     let analysis = gleaner.analyze(paper).await?;
///     println!("{}", analysis.analysis_result.paper_title);
///   }
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    analysis::{AnalysisResult, BatchReport, PaperAnalysis, Provenance},
    error::GleanerError,
    export::export_analysis,
    llm::ModelClient,
    paper::PaperRecord,
    Config, Gleaner,
  };
}
