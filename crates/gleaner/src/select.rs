//! Choosing between the model answer and the heuristic candidate.
//!
//! The model answer wins only if it parses into a complete [`AnalysisResult`]
//! with a non-blank title. Otherwise the heuristic candidate is used as a
//! whole; fields are never merged across the two sources. Whichever wins is
//! then normalized against the classifier verdict.

use super::*;

/// Removes an optional Markdown code fence around `raw`.
///
/// Both ```` ```json ```` and bare ```` ``` ```` openings are recognized.
pub fn strip_code_fence(raw: &str) -> &str {
  let text = raw.trim();
  let Some(body) = text.strip_prefix("```") else {
    return text;
  };
  let body = body.strip_prefix("json").unwrap_or(body);
  body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parses a model answer into a validated [`AnalysisResult`].
///
/// # Errors
///
/// Returns [`GleanerError::ModelOutputInvalid`] if the answer is not JSON, lacks
/// a key, or has a blank `paperTitle` or `isYoloRelated`.
pub fn parse_candidate(raw: &str) -> Result<AnalysisResult> {
  let result: AnalysisResult = serde_json::from_str(strip_code_fence(raw))
    .map_err(|e| GleanerError::ModelOutputInvalid(e.to_string()))?;

  if result.paper_title.trim().is_empty() {
    return Err(GleanerError::ModelOutputInvalid("paperTitle is blank".to_string()));
  }
  Ok(result)
}

/// Picks the result for one document.
///
/// `model_outcome` is `None` when the model was not consulted. Model errors of
/// any kind are logged and answered with `heuristic`.
pub fn select(
  name: &str,
  model_outcome: Option<Result<String>>,
  heuristic: AnalysisResult,
  relevant: bool,
) -> (AnalysisResult, Provenance) {
  let (result, provenance) = match model_outcome {
    None => (heuristic, Provenance::Heuristic),
    Some(Err(e)) => {
      error!("{name}: model call failed ({e}), using heuristic extraction");
      (heuristic, Provenance::Heuristic)
    },
    Some(Ok(raw)) => match parse_candidate(&raw) {
      Ok(candidate) => (candidate, Provenance::Model),
      Err(e) => {
        warn!("{name}: {e}, using heuristic extraction");
        (heuristic, Provenance::Heuristic)
      },
    },
  };

  debug!("{name}: selected {provenance} result");
  (result.normalize(relevant), provenance)
}
