//! The analysis output schema.
//!
//! An [`AnalysisResult`] is produced either by the language model or by the
//! heuristic extractors, never by mixing the two. Whatever its source, it is
//! normalized with [`AnalysisResult::normalize`] before it leaves the library so
//! that:
//!
//! - no leaf field is blank (missing values become a field-specific placeholder)
//! - `pseudoCode` holds [`PSEUDO_CODE_SENTINEL`] for papers outside the tracked topic
//!
//! All types serialize with camelCase keys.

use super::*;

/// Fixed `pseudoCode` value for papers that are not YOLO-related.
pub const PSEUDO_CODE_SENTINEL: &str = "Not a YOLO-series paper; pseudo-code is not generated";

/// Field placeholders used when no value could be found.
#[allow(missing_docs)]
pub mod placeholder {
  /// Title placeholder, only reachable for blank model titles after validation.
  pub const PAPER_TITLE: &str = "Title not identified";
  pub const CORE_INNOVATION: &str = "Not specified (see the innovation section of the paper)";
  pub const INNOVATION_VALUE: &str = "Not specified (see the value discussion of the paper)";
  /// Used when innovation sentences exist but none states a benefit.
  pub const INNOVATION_VALUE_UNSTATED: &str =
    "No explicit value statement found (see the full text)";
  /// Heuristic extraction cannot write code, even for relevant papers.
  pub const PSEUDO_CODE_UNAVAILABLE: &str =
    "Pseudo-code requires model-based extraction and was not generated";
  pub const KEY_FORMULAS: &str = "No specific formulas identified (see the math sections)";
  pub const DERIVATION_STEPS: &str = "No specific derivation steps identified";
  pub const MATH_ADVANTAGE: &str = "No specific mathematical advantage identified";
  pub const DATA_PREP: &str = "Dataset not disclosed (see the dataset section)";
  pub const ENV_CONFIG: &str = "Environment not disclosed (see the implementation details)";
  pub const HARDWARE_REQ: &str = "Hardware not disclosed (see the implementation details)";
  pub const CORE_STEPS: &str = "No specific reproduction steps identified";
  pub const CODE_INFO: &str = "Code not released (no repository mentioned)";
  pub const COMPARED_METHODS: &str = "Compared methods not disclosed (see the experiments)";
  pub const EVALUATION_METRICS: &str = "Evaluation metrics not specified";
  pub const KEY_RESULTS: &str = "Key results not specified";
  pub const EXPERIMENT_CONCLUSION: &str = "Experimental conclusion not specified";
}

/// Whether a paper belongs to the tracked YOLO family, serialized as `yes`/`no`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "RawRelevance")]
pub enum Relevance {
  /// The paper is YOLO-related
  Yes,
  /// The paper is not YOLO-related
  No,
}

impl From<bool> for Relevance {
  fn from(relevant: bool) -> Self { if relevant { Self::Yes } else { Self::No } }
}

impl From<Relevance> for bool {
  fn from(relevance: Relevance) -> Self { relevance == Relevance::Yes }
}

/// Shapes a model may use for [`Relevance`].
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRelevance {
  /// A JSON boolean
  Flag(bool),
  /// A string such as `"yes"` or `"No"`
  Text(String),
}

impl TryFrom<RawRelevance> for Relevance {
  type Error = String;

  fn try_from(raw: RawRelevance) -> std::result::Result<Self, Self::Error> {
    match raw {
      RawRelevance::Flag(flag) => Ok(flag.into()),
      RawRelevance::Text(text) => match text.trim().to_lowercase().as_str() {
        "yes" | "true" => Ok(Self::Yes),
        "no" | "false" => Ok(Self::No),
        "" => Err("isYoloRelated is blank".to_string()),
        other => Err(format!("isYoloRelated must be yes or no, got {other:?}")),
      },
    }
  }
}

/// What the paper contributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InnovationPoint {
  /// The core innovation (at most 150 characters from heuristics)
  pub core_innovation:  String,
  /// The problem solved or benefit gained (at most 100 characters from heuristics)
  pub innovation_value: String,
  /// Pseudo-code of the innovation, or a fixed sentinel
  pub pseudo_code:      String,
}

/// The mathematical content of the paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MathDerivation {
  /// Up to three formula lines
  pub key_formulas:     String,
  /// Up to three numbered derivation steps
  pub derivation_steps: String,
  /// The claimed mathematical advantage
  pub math_advantage:   String,
}

/// What is needed to reproduce the paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReproductionSteps {
  /// Datasets and their preparation
  pub data_prep:    String,
  /// Software environment
  pub env_config:   String,
  /// Hardware requirements
  pub hardware_req: String,
  /// Numbered reproduction procedure
  pub core_steps:   String,
  /// Code availability
  pub code_info:    String,
}

/// How the paper compares against other work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonExperiments {
  /// Methods compared against
  pub compared_methods:      String,
  /// Metrics used
  pub evaluation_metrics:    String,
  /// Headline results
  pub key_results:           String,
  /// Conclusion drawn from the experiments
  pub experiment_conclusion: String,
}

/// The complete analysis of one paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
  /// The paper's title
  pub paper_title:            String,
  /// Whether the paper is YOLO-related
  pub is_yolo_related:        Relevance,
  /// Contribution summary
  pub innovation_point:       InnovationPoint,
  /// Mathematical content
  pub math_derivation:        MathDerivation,
  /// Reproduction requirements
  pub reproduction_steps:     ReproductionSteps,
  /// Comparative experiments
  pub comparison_experiments: ComparisonExperiments,
}

impl AnalysisResult {
  /// Enforces the schema invariants.
  ///
  /// Blank leaves are replaced by their placeholder and, when `relevant` is
  /// false, `pseudoCode` is forced to [`PSEUDO_CODE_SENTINEL`].
  pub fn normalize(mut self, relevant: bool) -> Self {
    use placeholder::*;

    fill(&mut self.paper_title, PAPER_TITLE);

    let innovation = &mut self.innovation_point;
    fill(&mut innovation.core_innovation, CORE_INNOVATION);
    fill(&mut innovation.innovation_value, INNOVATION_VALUE);
    fill(&mut innovation.pseudo_code, PSEUDO_CODE_UNAVAILABLE);
    if !relevant {
      innovation.pseudo_code = PSEUDO_CODE_SENTINEL.to_string();
    }

    let math = &mut self.math_derivation;
    fill(&mut math.key_formulas, KEY_FORMULAS);
    fill(&mut math.derivation_steps, DERIVATION_STEPS);
    fill(&mut math.math_advantage, MATH_ADVANTAGE);

    let reproduction = &mut self.reproduction_steps;
    fill(&mut reproduction.data_prep, DATA_PREP);
    fill(&mut reproduction.env_config, ENV_CONFIG);
    fill(&mut reproduction.hardware_req, HARDWARE_REQ);
    fill(&mut reproduction.core_steps, CORE_STEPS);
    fill(&mut reproduction.code_info, CODE_INFO);

    let comparison = &mut self.comparison_experiments;
    fill(&mut comparison.compared_methods, COMPARED_METHODS);
    fill(&mut comparison.evaluation_metrics, EVALUATION_METRICS);
    fill(&mut comparison.key_results, KEY_RESULTS);
    fill(&mut comparison.experiment_conclusion, EXPERIMENT_CONCLUSION);

    self
  }

  /// All leaf values in schema order, paired with their camelCase key.
  pub fn leaves(&self) -> [(&'static str, &str); 17] {
    let relevance = match self.is_yolo_related {
      Relevance::Yes => "yes",
      Relevance::No => "no",
    };
    [
      ("paperTitle", &self.paper_title),
      ("isYoloRelated", relevance),
      ("coreInnovation", &self.innovation_point.core_innovation),
      ("innovationValue", &self.innovation_point.innovation_value),
      ("pseudoCode", &self.innovation_point.pseudo_code),
      ("keyFormulas", &self.math_derivation.key_formulas),
      ("derivationSteps", &self.math_derivation.derivation_steps),
      ("mathAdvantage", &self.math_derivation.math_advantage),
      ("dataPrep", &self.reproduction_steps.data_prep),
      ("envConfig", &self.reproduction_steps.env_config),
      ("hardwareReq", &self.reproduction_steps.hardware_req),
      ("coreSteps", &self.reproduction_steps.core_steps),
      ("codeInfo", &self.reproduction_steps.code_info),
      ("comparedMethods", &self.comparison_experiments.compared_methods),
      ("evaluationMetrics", &self.comparison_experiments.evaluation_metrics),
      ("keyResults", &self.comparison_experiments.key_results),
      ("experimentConclusion", &self.comparison_experiments.experiment_conclusion),
    ]
  }
}

/// Replaces a blank `field` with `placeholder`.
fn fill(field: &mut String, placeholder: &str) {
  if field.trim().is_empty() {
    *field = placeholder.to_string();
  }
}

/// Where an [`AnalysisResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
  /// Produced by the language model and validated
  Model,
  /// Produced by the heuristic extractors
  Heuristic,
}

impl Display for Provenance {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Model => write!(f, "model"),
      Self::Heuristic => write!(f, "heuristic"),
    }
  }
}

/// The analysis of one paper together with its context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperAnalysis {
  /// The analyzed file
  pub paper:             PaperRecord,
  /// Relevance as decided by the keyword classifier
  pub is_yolo_related:   bool,
  /// Which path produced `analysis_result`
  pub extraction_source: Provenance,
  /// The analysis itself
  pub analysis_result:   AnalysisResult,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
  /// Every valid paper was analyzed
  Success,
  /// Some papers were analyzed and some failed
  PartialError,
  /// Nothing was analyzed
  Error,
}

impl Display for OverallStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Success => write!(f, "success"),
      Self::PartialError => write!(f, "partial_error"),
      Self::Error => write!(f, "error"),
    }
  }
}

/// Aggregated results of analyzing a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
  /// Outcome of the run
  pub overall_status:          OverallStatus,
  /// Number of files found
  pub total_papers:            usize,
  /// Number of files in a supported format
  pub valid_papers_count:      usize,
  /// Number of papers analyzed successfully
  pub analyzed_count:          usize,
  /// Analyzed papers classified as YOLO-related
  pub yolo_related_count:      usize,
  /// Analyzed papers classified as not YOLO-related
  pub non_yolo_related_count:  usize,
  /// Per-paper analyses in processing order
  pub analyzed_papers:         Vec<PaperAnalysis>,
  /// One entry per failed paper, in processing order
  pub error_log:               Vec<String>,
}

impl BatchReport {
  /// Assembles a report and derives its counters and status.
  pub fn new(
    total_papers: usize,
    valid_papers_count: usize,
    analyzed_papers: Vec<PaperAnalysis>,
    error_log: Vec<String>,
  ) -> Self {
    let yolo_related_count = analyzed_papers.iter().filter(|a| a.is_yolo_related).count();
    let overall_status = match (analyzed_papers.is_empty(), error_log.is_empty()) {
      (_, true) if !analyzed_papers.is_empty() => OverallStatus::Success,
      (false, false) => OverallStatus::PartialError,
      _ => OverallStatus::Error,
    };
    Self {
      overall_status,
      total_papers,
      valid_papers_count,
      analyzed_count: analyzed_papers.len(),
      yolo_related_count,
      non_yolo_related_count: analyzed_papers.len() - yolo_related_count,
      analyzed_papers,
      error_log,
    }
  }

  /// A report for a run that could not start, such as an empty papers directory.
  pub fn fatal(error: &GleanerError) -> Self {
    Self {
      overall_status:         OverallStatus::Error,
      total_papers:           0,
      valid_papers_count:     0,
      analyzed_count:         0,
      yolo_related_count:     0,
      non_yolo_related_count: 0,
      analyzed_papers:        Vec::new(),
      error_log:              vec![error.to_string()],
    }
  }
}
