//! Keyword tables driving segmentation, classification and extraction.
//!
//! All tables are lowercase unless stated otherwise and are matched as plain
//! substrings of ASCII-lowercased text.

/// Marks the start of the abstract region.
pub static ABSTRACT_MARKER: &str = "abstract";

/// Marks the start of the conclusion region.
pub static CONCLUSION_MARKER: &str = "conclusion";

/// Page-level markers of experimental content.
pub static PAGE_EXPERIMENT: &[&str] = &["experiment", "result", "evaluation"];

/// Paragraph- and line-level markers of experimental content.
pub static BLOCK_EXPERIMENT: &[&str] = &["experiment", "result"];

/// Terms of competing domains. Any hit makes a paper not relevant.
pub static NEGATIVE_TOPIC: &[&str] = &[
  "mamba",
  "diffusion",
  "time series",
  "nlp",
  "language",
  "transformer",
  "bert",
  "gpt",
  "llm",
];

/// Terms of the tracked YOLO/object-detection family.
pub static POSITIVE_TOPIC: &[&str] = &[
  "yolov11",
  "yolov10",
  "yolov9",
  "yolov8",
  "yolo v11",
  "yolo v10",
  "yolo",
  "object detection",
  "target detection",
  "bounding box",
];

/// Characters that disqualify a home-page line from being the title.
pub static TITLE_FORBIDDEN: &[char] = &['∗', '@', '1', '2', '3', '4', '5'];

/// Sentences announcing a contribution.
pub static INNOVATION: &[&str] =
  &["innovation", "novel", "propose", "proposed", "breakthrough", "improvement"];

/// Preferred markers for the core innovation sentence.
pub static INNOVATION_CORE: &[&str] = &["propose", "novel"];

/// Markers of the value an innovation brings.
pub static INNOVATION_VALUE: &[&str] = &["solve", "improve", "enable", "benefit"];

/// Characters typical of formula lines.
pub static FORMULA_SYMBOLS: &[char] = &['=', '$', '∑', '∫', '∂', '∈', '∀', '∃'];

/// Markers of derivation steps.
pub static DERIVATION: &[&str] = &["step", "assume", "derive", "obtain", "result in"];

/// Markers of a mathematical advantage.
pub static ADVANTAGE: &[&str] = &["advantage", "faster", "lower", "reduce", "efficient"];

/// Markers of dataset descriptions.
pub static DATASET: &[&str] = &["dataset"];

/// Markers of software environment descriptions.
pub static ENVIRONMENT: &[&str] = &["python", "pytorch", "tensorflow", "version"];

/// Markers of hardware descriptions.
pub static HARDWARE: &[&str] = &["gpu", "tpu", "a100", "v100", "rtx", "memory"];

/// Markers of code availability.
pub static CODE: &[&str] =
  &["github", "gitlab", "open source", "open-source", "repository", "code available"];

/// Markers of explicit procedure lines.
pub static PROCEDURE: &[&str] = &["step", "train", "test", "load data"];

/// Markers of compared methods.
pub static COMPARISON: &[&str] = &["compare", "baseline", "method", "sota"];

/// Evaluation metric names.
pub static METRIC: &[&str] =
  &["metric", "accuracy", "perplexity", "bleu", "map", "f1", "precision", "recall"];

/// Markers of quantitative results.
pub static RESULT: &[&str] = &["higher", "lower", "better", "score"];

/// Markers of concluding statements.
pub static CONCLUSION: &[&str] =
  &["conclusion", "find", "finding", "conclude", "show that", "demonstrate"];

/// Returns `true` if `haystack` contains any of `needles`.
///
/// `haystack` is expected to be lowercased already.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
  needles.iter().any(|needle| haystack.contains(needle))
}
