//! Title extraction.
//!
//! Candidates are tried in order: a title-like line of the home page, an early
//! line of the abstract region, and finally the file name.

use super::*;

/// Prefix marking a title that was derived from the file name.
pub const FILENAME_PREFIX: &str = "Derived from filename: ";

lazy_static! {
  /// Supported extensions anywhere in a file name.
  static ref EXTENSION: Regex = Regex::new(r"(?i)\.(pdf|docx|doc|txt)").unwrap();
  /// A trailing parenthetical annotation, ASCII or full-width.
  static ref ANNOTATION: Regex = Regex::new(r"\s*(\([^()]*\)|（[^（）]*）)\s*$").unwrap();
}

/// Extracts the title of the paper.
pub fn extract(content: &StructuredContent, name: &str) -> String {
  let home_title = non_blank_lines(&content.home_page, 3).find(|line| {
    line.chars().count() > 5
      && !line.contains(keywords::TITLE_FORBIDDEN)
      && (is_title_case(line) || is_upper_case(line))
  });
  if let Some(title) = home_title {
    return title.to_string();
  }

  let abstract_title = non_blank_lines(&content.abstract_text, 2)
    .find(|line| line.chars().count() > 5 && !line.to_lowercase().starts_with("abstract"));
  if let Some(title) = abstract_title {
    return title.to_string();
  }

  trace!("No title found in the text of {name}, using the file name");
  format!("{FILENAME_PREFIX}{}", title_from_filename(name))
}

/// The trimmed, non-blank lines among the first `count` lines of `text`.
fn non_blank_lines(text: &str, count: usize) -> impl Iterator<Item = &str> {
  text.split('\n').take(count).map(str::trim).filter(|line| !line.is_empty())
}

/// Strips extensions and a trailing parenthetical annotation from `name`.
fn title_from_filename(name: &str) -> String {
  let stem = EXTENSION.replace_all(name, "");
  ANNOTATION.replace(&stem, "").trim().to_string()
}

/// Whether every word starts upper case and continues lower case.
///
/// An upper case letter may only follow an uncased character and a lower case
/// letter only a cased one. At least one cased letter is required.
fn is_title_case(text: &str) -> bool {
  let mut previous_cased = false;
  let mut any_cased = false;
  for c in text.chars() {
    if c.is_uppercase() {
      if previous_cased {
        return false;
      }
      previous_cased = true;
      any_cased = true;
    } else if c.is_lowercase() {
      if !previous_cased {
        return false;
      }
      previous_cased = true;
      any_cased = true;
    } else {
      previous_cased = false;
    }
  }
  any_cased
}

/// Whether `text` has at least one cased letter and no lower case letters.
fn is_upper_case(text: &str) -> bool {
  text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn content(home_page: &str, abstract_text: &str) -> StructuredContent {
    StructuredContent {
      home_page: home_page.to_string(),
      abstract_text: abstract_text.to_string(),
      ..StructuredContent::default()
    }
  }

  #[test]
  fn test_case_predicates() {
    assert!(is_title_case("Real-Time Object Detection"));
    assert!(is_title_case("Yolo: You Only Look Once"));
    assert!(!is_title_case("YOLOv8: A New Detector"));
    assert!(!is_title_case("Real-time object detection"));
    assert!(!is_title_case("1234"));
    assert!(is_upper_case("YOLOV8 DETECTION"));
    assert!(!is_upper_case("YOLOv8"));
  }

  #[test]
  fn test_home_page_title() {
    let content = content("\n  Efficient Dense Detection  \nAlice∗ and Bob", "");
    assert_eq!(extract(&content, "x.pdf"), "Efficient Dense Detection");
  }

  #[test]
  fn test_home_page_skips_author_lines() {
    let content = content("Alice Smith1, Bob Jones2\nDEEP DETECTORS\n", "");
    assert_eq!(extract(&content, "x.pdf"), "DEEP DETECTORS");
  }

  #[test]
  fn test_only_first_three_home_lines() {
    let content = content("a\nb\nc\nLate Title Line", "");
    assert!(extract(&content, "late.txt").starts_with(FILENAME_PREFIX));
  }

  #[test]
  fn test_abstract_fallback() {
    let content = content("lowercase only here", "Abstract\nwe study dense detectors");
    assert_eq!(extract(&content, "x.pdf"), "we study dense detectors");
  }

  #[test]
  fn test_filename_fallback() {
    let content = content("", "");
    assert_eq!(
      extract(&content, "YOLOv9 Programmable Gradients (arXiv 2024).pdf"),
      "Derived from filename: YOLOv9 Programmable Gradients"
    );
    assert_eq!(extract(&content, "检测论文（草稿）.docx"), "Derived from filename: 检测论文");
    assert_eq!(extract(&content, "notes.TXT"), "Derived from filename: notes");
  }
}
