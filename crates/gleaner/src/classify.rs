//! Topic relevance classification.
//!
//! A paper is relevant when it belongs to the YOLO object-detection family.
//! Terms of competing domains take strict precedence over family terms, so a
//! paper mentioning both "transformer" and "YOLO" is not relevant.

use super::*;

/// Decides whether the paper behind `content` is YOLO-related.
///
/// `name` is the file name, which is consulted for family terms as well. Both
/// the text and the name are compared in lowercase.
pub fn is_yolo_related(content: &StructuredContent, name: &str) -> bool {
  let text = content.full_text.to_lowercase();

  if keywords::contains_any(&text, keywords::NEGATIVE_TOPIC) {
    debug!("{name} mentions a competing domain");
    return false;
  }

  keywords::contains_any(&text, keywords::POSITIVE_TOPIC)
    || keywords::contains_any(&name.to_lowercase(), keywords::POSITIVE_TOPIC)
}
