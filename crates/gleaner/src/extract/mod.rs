//! Heuristic field extraction.
//!
//! Each extractor reads one or two regions of a [`StructuredContent`] and
//! fills a part of the [`AnalysisResult`] by keyword scoring alone. Together
//! they form the heuristic candidate, which is always available and is used
//! whenever the model is disabled, unreachable, or answers with something
//! unusable.
//!
//! Extraction is a pure function of its input: the same content always yields
//! the same candidate.
//!
//! Sentences are the pieces between `.`, `!` and `?`. Length thresholds are
//! applied to the untrimmed piece while returned values are trimmed.

use super::*;

pub mod comparison;
pub mod innovation;
pub mod math;
pub mod reproduction;
pub mod title;

/// Builds the complete heuristic candidate for one document.
///
/// `relevant` is the classifier verdict and decides the `isYoloRelated` and
/// `pseudoCode` values.
pub fn heuristic_candidate(content: &StructuredContent, name: &str, relevant: bool) -> AnalysisResult {
  let pseudo_code = if relevant {
    placeholder::PSEUDO_CODE_UNAVAILABLE.to_string()
  } else {
    PSEUDO_CODE_SENTINEL.to_string()
  };

  AnalysisResult {
    paper_title:            title::extract(content, name),
    is_yolo_related:        relevant.into(),
    innovation_point:       innovation::extract(content, pseudo_code),
    math_derivation:        math::extract(content),
    reproduction_steps:     reproduction::extract(content),
    comparison_experiments: comparison::extract(content),
  }
  .normalize(relevant)
}

/// Splits `text` into sentences on `.`, `!` and `?`.
fn sentences(text: &str) -> impl Iterator<Item = &str> { text.split(['.', '!', '?']) }

/// Returns the trimmed sentences of `text` that mention a keyword and are
/// longer than `min_chars` characters before trimming.
fn matching_sentences<'a>(
  text: &'a str,
  needles: &'a [&'a str],
  min_chars: usize,
) -> impl Iterator<Item = &'a str> {
  sentences(text)
    .filter(move |s| s.chars().count() > min_chars && keywords::contains_any(&s.to_lowercase(), needles))
    .map(str::trim)
}

/// Returns the first matching sentence, or `fallback`.
fn first_sentence(text: &str, needles: &[&str], min_chars: usize, fallback: &str) -> String {
  matching_sentences(text, needles, min_chars).next().unwrap_or(fallback).to_string()
}

/// Keeps the first `max_chars` characters of `text`, appending `...` if
/// anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    Some((end, _)) => format!("{}...", &text[..end]),
    None => text.to_string(),
  }
}

/// Numbers `items` as `1. `, `2. `, ... and joins them with newlines.
fn numbered<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
  items
    .into_iter()
    .enumerate()
    .map(|(i, item)| format!("{}. {item}", i + 1))
    .collect::<Vec<_>>()
    .join("\n")
}
