//! Prompt composition for model-assisted extraction.
//!
//! The prompt carries bounded excerpts of each region, the classifier verdict
//! and the exact output schema. The model is asked for bare JSON, although a
//! fenced answer is tolerated by [`select`](crate::select).

use super::*;

/// Characters of the home page included in the prompt.
pub const HOME_PAGE_EXCERPT: usize = 200;
/// Characters of the abstract included in the prompt.
pub const ABSTRACT_EXCERPT: usize = 500;
/// Characters of the experiments region included in the prompt.
pub const EXPERIMENTS_EXCERPT: usize = 800;
/// Characters of the conclusion included in the prompt.
pub const CONCLUSION_EXCERPT: usize = 300;

/// Builds the extraction prompt for one document.
pub fn compose_prompt(name: &str, content: &StructuredContent, relevant: bool) -> String {
  let paper_type = if relevant {
    "YOLO-series paper (generate pseudo-code for its innovation)"
  } else {
    "not a YOLO-series paper (pseudo-code takes the fixed value below)"
  };

  let pseudo_code_rules = if relevant {
    "\n- Pseudo-code rules: target framework PyTorch; concise pseudo-code keeping the __init__ and \
     forward methods; map it strictly onto the YOLO innovation (backbone, neck or head)."
  } else {
    ""
  };

  let pseudo_code_guidance = if relevant {
    "PyTorch pseudo-code of the innovation (__init__ and forward)".to_string()
  } else {
    PSEUDO_CODE_SENTINEL.to_string()
  };

  let schema = serde_json::json!({
    "paperTitle": "full title taken from the first page or the abstract, never the file name",
    "isYoloRelated": "yes or no",
    "innovationPoint": {
      "coreInnovation": "core innovation with the concrete improvement, at most 150 characters",
      "innovationValue": "problem solved or value gained, at most 100 characters",
      "pseudoCode": pseudo_code_guidance,
    },
    "mathDerivation": {
      "keyFormulas": format!("at least one formula in LaTeX, otherwise \"{}\"", placeholder::KEY_FORMULAS),
      "derivationSteps": format!("at least two numbered steps, otherwise \"{}\"", placeholder::DERIVATION_STEPS),
      "mathAdvantage": format!("advantage over prior methods, otherwise \"{}\"", placeholder::MATH_ADVANTAGE),
    },
    "reproductionSteps": {
      "dataPrep": format!("dataset name and preprocessing, otherwise \"{}\"", placeholder::DATA_PREP),
      "envConfig": format!("Python version and key dependencies, otherwise \"{}\"", placeholder::ENV_CONFIG),
      "hardwareReq": format!("GPU model and memory, otherwise \"{}\"", placeholder::HARDWARE_REQ),
      "coreSteps": format!("three to five numbered steps, otherwise \"{}\"", placeholder::CORE_STEPS),
      "codeInfo": format!("repository URL, otherwise \"{}\"", placeholder::CODE_INFO),
    },
    "comparisonExperiments": {
      "comparedMethods": format!("at least one compared method, otherwise \"{}\"", placeholder::COMPARED_METHODS),
      "evaluationMetrics": format!("at least one metric, otherwise \"{}\"", placeholder::EVALUATION_METRICS),
      "keyResults": format!("results with numbers, otherwise \"{}\"", placeholder::KEY_RESULTS),
      "experimentConclusion": format!("conclusion in at most 100 characters, otherwise \"{}\"", placeholder::EXPERIMENT_CONCLUSION),
    },
  });
  let schema = serde_json::to_string_pretty(&schema).unwrap_or_else(|_| schema.to_string());

  format!(
    "[Role] You are an expert at extracting structured information from academic papers. Extract \
     every field below from the structured content.

[Input]
- File name: {name}
- Title candidates: {home_page}
- Abstract: {abstract_text}
- Experiments: {experiments}
- Conclusion: {conclusion}
- Paper type: {paper_type}{pseudo_code_rules}

[Output requirements]
1. Return only a JSON object, with no text before or after it.
2. Use exactly these keys, none added and none removed, and never leave a value blank:
{schema}
3. For papers that are not YOLO-series, pseudoCode must be exactly \"{sentinel}\".
4. When a value is unknown, use the specific fallback given above instead of a bare \"unknown\".",
    home_page = excerpt(&content.home_page, HOME_PAGE_EXCERPT),
    abstract_text = excerpt(&content.abstract_text, ABSTRACT_EXCERPT),
    experiments = excerpt(&content.experiments, EXPERIMENTS_EXCERPT),
    conclusion = excerpt(&content.conclusion, CONCLUSION_EXCERPT),
    sentinel = PSEUDO_CODE_SENTINEL,
  )
}

/// The first `max_chars` characters of `text`.
fn excerpt(text: &str, max_chars: usize) -> &str {
  match text.char_indices().nth(max_chars) {
    Some((end, _)) => &text[..end],
    None => text,
  }
}
