//! The analyzer tying the pipeline together.
//!
//! A [`Gleaner`] owns a [`Config`] and an optional [`ModelClient`]. Each paper
//! runs through the same steps:
//!
//! 1. [`loader::load`](crate::loader::load) decodes the file into units
//! 2. [`StructuredContent::from_units`] labels the regions
//! 3. [`classify::is_yolo_related`](crate::classify::is_yolo_related) decides relevance
//! 4. [`extract::heuristic_candidate`](crate::extract::heuristic_candidate) builds the fallback
//! 5. the model is asked, if one is configured
//! 6. [`select::select`](crate::select::select) picks and normalizes the result
//!
//! # Examples
//!
//! ```no_run
//! use gleaner::{llm::OllamaClient, Config, Gleaner};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default().with_papers_dir("papers");
//! let gleaner = Gleaner::builder()
//!   .with_model_client(OllamaClient::from_config(&config.model))
//!   .with_config(config)
//!   .build();
//!
//! for paper in gleaner.scan()?.iter().filter(|p| p.is_valid()) {
//!   let analysis = gleaner.analyze(paper).await?;
//!   println!("{} ({})", analysis.analysis_result.paper_title, analysis.extraction_source);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use super::*;
use crate::{llm::OllamaClient, prompt::compose_prompt};

/// Paper analyzer.
#[derive(Clone)]
pub struct Gleaner {
  /// Directories and model settings
  config: Config,
  /// Model consulted for each paper, if any
  client: Option<Arc<dyn ModelClient>>,
}

impl std::fmt::Debug for Gleaner {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Gleaner")
      .field("config", &self.config)
      .field("client", &self.client.as_ref().map(|_| "dyn ModelClient"))
      .finish()
  }
}

/// Builder for [`Gleaner`].
#[derive(Default)]
pub struct GleanerBuilder {
  /// Configuration, defaults to [`Config::default`]
  config: Option<Config>,
  /// Explicit model client
  client: Option<Arc<dyn ModelClient>>,
}

impl GleanerBuilder {
  /// Sets the configuration.
  pub fn with_config(mut self, config: Config) -> Self {
    self.config = Some(config);
    self
  }

  /// Sets the model client used for every paper.
  ///
  /// An explicit client is used even when the configuration disables the
  /// model.
  pub fn with_model_client(mut self, client: impl ModelClient + 'static) -> Self {
    self.client = Some(Arc::new(client));
    self
  }

  /// Builds the analyzer.
  ///
  /// Without an explicit client, an [`OllamaClient`] is created from the
  /// configuration when the model is enabled there.
  pub fn build(self) -> Gleaner {
    let config = self.config.unwrap_or_default();
    let client = self.client.or_else(|| {
      config
        .model
        .enabled
        .then(|| Arc::new(OllamaClient::from_config(&config.model)) as Arc<dyn ModelClient>)
    });
    Gleaner { config, client }
  }
}

impl Gleaner {
  /// Starts building an analyzer.
  pub fn builder() -> GleanerBuilder { GleanerBuilder::default() }

  /// The active configuration.
  pub fn config(&self) -> &Config { &self.config }

  /// Whether a model is consulted.
  pub fn has_model(&self) -> bool { self.client.is_some() }

  /// Lists the files of the papers directory, creating it if needed.
  pub fn scan(&self) -> Result<Vec<PaperRecord>> { paper::scan_directory(&self.config.papers_dir) }

  /// Analyzes a single paper.
  ///
  /// # Errors
  ///
  /// - [`GleanerError::UnsupportedFormat`] if the record is not in a supported format
  /// - [`GleanerError::Decode`] if the file cannot be read
  /// - [`GleanerError::ContentTooShort`] if too little text was found
  ///
  /// Model failures are never returned; they fall back to heuristic extraction.
  pub async fn analyze(&self, paper: &PaperRecord) -> Result<PaperAnalysis> {
    info!("Analyzing {}", paper.name);
    let units = loader::load(paper)?;
    let content = StructuredContent::from_units(&units)?;

    let relevant = classify::is_yolo_related(&content, &paper.name);
    info!("{}: classified as {}", paper.name, if relevant { "YOLO" } else { "non-YOLO" });

    let heuristic = extract::heuristic_candidate(&content, &paper.name, relevant);

    let model_outcome = match &self.client {
      Some(client) => {
        let prompt = compose_prompt(&paper.name, &content, relevant);
        trace!("{}: prompt of {} characters", paper.name, prompt.len());
        Some(client.complete(&prompt).await)
      },
      None => None,
    };

    let (analysis_result, extraction_source) =
      select::select(&paper.name, model_outcome, heuristic, relevant);

    Ok(PaperAnalysis {
      paper: paper.clone(),
      is_yolo_related: relevant,
      extraction_source,
      analysis_result,
    })
  }

  /// Analyzes every valid paper of the papers directory in order.
  ///
  /// A paper that fails is recorded in the error log as `"<name>: <error>"` and
  /// the batch continues.
  ///
  /// # Errors
  ///
  /// - [`GleanerError::NoValidPapers`] if the directory holds no supported file
  /// - [`GleanerError::Path`] if the directory cannot be read
  pub async fn analyze_batch(&self) -> Result<BatchReport> {
    let papers = self.scan()?;
    let valid = papers.iter().filter(|p| p.is_valid()).collect::<Vec<_>>();
    if valid.is_empty() {
      return Err(GleanerError::NoValidPapers(self.config.papers_dir.clone()));
    }

    let mut analyzed = Vec::new();
    let mut error_log = Vec::new();
    for (i, paper) in valid.iter().enumerate() {
      info!("Paper {}/{}: {}", i + 1, valid.len(), paper.name);
      match self.analyze(paper).await {
        Ok(analysis) => analyzed.push(analysis),
        Err(e) => {
          warn!("{}: {e}", paper.name);
          error_log.push(format!("{}: {e}", paper.name));
        },
      }
    }

    let report = BatchReport::new(papers.len(), valid.len(), analyzed, error_log);
    info!(
      "Batch finished with status {}: {}/{} analyzed",
      report.overall_status, report.analyzed_count, report.valid_papers_count
    );
    Ok(report)
  }
}
