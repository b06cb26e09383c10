//! Structural segmentation of raw text units.
//!
//! The segmenter scans the units produced by the [`loader`](crate::loader) and
//! labels a handful of regions that the extractors rely on:
//!
//! - **home page**: the leading units, where the title usually sits
//! - **abstract**: the block introduced by the first `abstract` marker
//! - **experiments**: every block mentioning experiments or results, up to a
//!   character budget
//! - **conclusion**: the block introduced by the first `conclusion` marker (pages only)
//! - **full text**: a bounded prefix of the whole document
//!
//! The experiments budget is checked around each contribution rather than
//! enforced by truncation, so the region can exceed its nominal cap by up to
//! one contribution. Once the cap is reached no later block is added.

use super::*;
use crate::loader::Granularity;

/// Minimum number of characters the full-text region must hold.
pub const MIN_FULL_TEXT_CHARS: usize = 200;

/// Characters taken from each experimental page.
pub const PAGE_EXPERIMENT_SLICE: usize = 2000;

/// Labeled regions of a single document.
///
/// Created once per load and read by every extractor. Regions that were not
/// found are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredContent {
  /// Granularity of the units this content was built from
  pub granularity:   Option<Granularity>,
  /// Number of units the document was decoded into
  pub unit_count:    usize,
  /// Title-candidate region
  pub home_page:     String,
  /// Abstract region
  pub abstract_text: String,
  /// Experimental results region
  pub experiments:   String,
  /// Conclusion region
  pub conclusion:    String,
  /// Bounded prefix of the whole document
  pub full_text:     String,
}

impl StructuredContent {
  /// Segments decoded text units.
  ///
  /// # Errors
  ///
  /// Returns [`GleanerError::ContentTooShort`] if the full-text region holds
  /// fewer than [`MIN_FULL_TEXT_CHARS`] characters.
  pub fn from_units(units: &TextUnits) -> Result<Self> {
    let content = match units.granularity {
      Granularity::Page => Self::from_pages(&units.units),
      granularity => Self::from_blocks(granularity, &units.units),
    };

    let length = content.full_text.chars().count();
    if length < MIN_FULL_TEXT_CHARS {
      return Err(GleanerError::ContentTooShort { length });
    }

    debug!(
      "Segmented {} units: home {} / abstract {} / experiments {} / conclusion {} / full {} chars",
      content.unit_count,
      content.home_page.len(),
      content.abstract_text.len(),
      content.experiments.len(),
      content.conclusion.len(),
      length,
    );
    Ok(content)
  }

  /// Segments PDF pages.
  fn from_pages(pages: &[String]) -> Self {
    let granularity = Granularity::Page;
    let mut content = Self {
      granularity: Some(granularity),
      unit_count: pages.len(),
      home_page: pages.first().map(|p| p.trim().to_string()).unwrap_or_default(),
      ..Self::default()
    };

    if let Some(first) = pages.first() {
      content.full_text.push_str(&format!("[Home page]\n{first}\n"));
    }

    let mut experiment_chars = 0;
    for (i, page) in pages.iter().take(granularity.full_text_units()).enumerate() {
      let page_number = i + 1;
      let lower = page.to_ascii_lowercase();
      content.full_text.push_str(&format!("[Page {page_number}]\n{page}\n"));

      if content.abstract_text.is_empty() {
        if let Some(block) = block_after_marker(page, &lower, keywords::ABSTRACT_MARKER) {
          content.abstract_text = block;
        }
      }

      if keywords::contains_any(&lower, granularity.experiment_keywords())
        && experiment_chars < granularity.experiments_cap()
      {
        let slice = page.chars().take(PAGE_EXPERIMENT_SLICE).collect::<String>();
        let contribution = format!("[Page {page_number} experiments]\n{slice}\n");
        experiment_chars += contribution.chars().count();
        content.experiments.push_str(&contribution);
      }

      if content.conclusion.is_empty() {
        if let Some(block) = block_after_marker(page, &lower, keywords::CONCLUSION_MARKER) {
          content.conclusion = block;
        }
      }
    }

    content
  }

  /// Segments paragraphs or lines.
  fn from_blocks(granularity: Granularity, units: &[String]) -> Self {
    let mut content = Self {
      granularity: Some(granularity),
      unit_count: units.len(),
      home_page: join_prefix(units, granularity.home_units()),
      full_text: join_prefix(units, granularity.full_text_units()),
      ..Self::default()
    };

    let follow = granularity.abstract_follow_units();
    if let Some(i) = units.iter().enumerate().position(|(i, unit)| {
      unit.to_ascii_lowercase().contains(keywords::ABSTRACT_MARKER) && i + follow < units.len()
    }) {
      content.abstract_text = units[i..=i + follow].join("\n");
    }

    let follow = granularity.experiment_follow_units();
    let mut experiment_chars = 0;
    for (i, unit) in units.iter().enumerate() {
      let lower = unit.to_ascii_lowercase();
      if !keywords::contains_any(&lower, granularity.experiment_keywords())
        || i + follow >= units.len()
      {
        continue;
      }

      let block = units[i..=i + follow].join("\n");
      experiment_chars += block.chars().count();
      content.experiments.push_str(&block);

      if experiment_chars > granularity.experiments_cap() {
        break;
      }
    }

    content
  }
}

/// Returns the first paragraph of `text` following `marker`.
///
/// `lower` must be the ASCII-lowercased form of `text`, so byte offsets found
/// in it are valid in `text`.
fn block_after_marker(text: &str, lower: &str, marker: &str) -> Option<String> {
  let start = lower.find(marker)? + marker.len();
  let rest = text[start..].trim();
  Some(rest.split("\n\n").next().unwrap_or_default().to_string())
}

/// Joins at most `count` leading units with newlines.
fn join_prefix(units: &[String], count: usize) -> String {
  units[..units.len().min(count)].join("\n")
}
