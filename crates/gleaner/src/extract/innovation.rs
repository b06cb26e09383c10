//! Innovation extraction from the home page and abstract.

use super::*;

/// Maximum length of the core innovation.
const CORE_MAX_CHARS: usize = 150;

/// Maximum length of the innovation value.
const VALUE_MAX_CHARS: usize = 100;

/// Extracts the innovation claims.
///
/// `pseudo_code` is passed through untouched, since code is never derived
/// heuristically.
pub fn extract(content: &StructuredContent, pseudo_code: String) -> InnovationPoint {
  let text = format!("{}\n{}", content.home_page, content.abstract_text);
  let candidates = matching_sentences(&text, keywords::INNOVATION, 10).collect::<Vec<_>>();

  let core_innovation = candidates
    .iter()
    .find(|s| keywords::contains_any(&s.to_lowercase(), keywords::INNOVATION_CORE))
    .or(candidates.first())
    .map(|s| truncate_with_ellipsis(s, CORE_MAX_CHARS))
    .unwrap_or_else(|| placeholder::CORE_INNOVATION.to_string());

  let innovation_value = match candidates
    .iter()
    .find(|s| keywords::contains_any(&s.to_lowercase(), keywords::INNOVATION_VALUE))
  {
    Some(sentence) => truncate_with_ellipsis(sentence, VALUE_MAX_CHARS),
    None if candidates.is_empty() => placeholder::INNOVATION_VALUE.to_string(),
    None => placeholder::INNOVATION_VALUE_UNSTATED.to_string(),
  };

  InnovationPoint { core_innovation, innovation_value, pseudo_code }
}
