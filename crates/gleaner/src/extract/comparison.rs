//! Comparative experiment extraction from the experiments and conclusion.

use super::*;

/// Maximum length of the experimental conclusion.
const CONCLUSION_MAX_CHARS: usize = 100;

/// Extracts how the paper compares against other work.
pub fn extract(content: &StructuredContent) -> ComparisonExperiments {
  let text = format!("{}\n{}", content.experiments, content.conclusion);

  let methods = matching_sentences(&text, keywords::COMPARISON, 10)
    .filter(|s| s.chars().any(char::is_uppercase))
    .take(3)
    .map(|s| s.split(',').next().unwrap_or_default().trim())
    .collect::<Vec<_>>();
  let compared_methods = if methods.is_empty() {
    placeholder::COMPARED_METHODS.to_string()
  } else {
    methods.join(", ")
  };

  let results = sentences(&text)
    .filter(|s| s.contains('%') || keywords::contains_any(&s.to_lowercase(), keywords::RESULT))
    .map(str::trim)
    .take(2)
    .collect::<Vec<_>>();
  let key_results =
    if results.is_empty() { placeholder::KEY_RESULTS.to_string() } else { results.join("\n") };

  ComparisonExperiments {
    compared_methods,
    evaluation_metrics: first_sentence(&text, keywords::METRIC, 0, placeholder::EVALUATION_METRICS),
    key_results,
    experiment_conclusion: conclusion(&content.conclusion, &text),
  }
}

/// The conclusion region if there is one, otherwise the first line of `text`
/// stating a finding.
fn conclusion(region: &str, text: &str) -> String {
  if !region.is_empty() {
    return truncate_with_ellipsis(region, CONCLUSION_MAX_CHARS);
  }

  text
    .split('\n')
    .map(str::trim)
    .find(|line| keywords::contains_any(&line.to_lowercase(), keywords::CONCLUSION))
    .map(|line| truncate_with_ellipsis(line, CONCLUSION_MAX_CHARS))
    .unwrap_or_else(|| placeholder::EXPERIMENT_CONCLUSION.to_string())
}
