//! Reproduction requirement extraction from the experiments and full text.

use super::*;

/// Procedure used when the paper does not spell one out.
pub const DEFAULT_STEPS: [&str; 4] = [
  "Load the dataset and preprocess it (cleaning, normalization)",
  "Initialize the model and configure training parameters (learning rate, epochs)",
  "Train the model and monitor the training process",
  "Validate model performance on the test set",
];

/// Maximum length of a procedure line taken from the paper.
const STEP_MAX_CHARS: usize = 80;

/// Extracts what is needed to reproduce the paper.
pub fn extract(content: &StructuredContent) -> ReproductionSteps {
  let text = format!("{}\n{}", content.experiments, content.full_text);

  ReproductionSteps {
    data_prep:    first_sentence(&text, keywords::DATASET, 10, placeholder::DATA_PREP),
    env_config:   first_sentence(&text, keywords::ENVIRONMENT, 0, placeholder::ENV_CONFIG),
    hardware_req: first_sentence(&text, keywords::HARDWARE, 0, placeholder::HARDWARE_REQ),
    core_steps:   core_steps(&text),
    code_info:    first_sentence(&text, keywords::CODE, 0, placeholder::CODE_INFO),
  }
}

/// Numbered procedure lines of `text`, or [`DEFAULT_STEPS`] if fewer than
/// three lines describe one.
fn core_steps(text: &str) -> String {
  let lines = text
    .split('\n')
    .map(str::trim)
    .filter(|line| keywords::contains_any(&line.to_lowercase(), keywords::PROCEDURE))
    .collect::<Vec<_>>();

  if lines.len() < 3 {
    return numbered(DEFAULT_STEPS);
  }

  let steps =
    lines.iter().take(4).map(|line| truncate_with_ellipsis(line, STEP_MAX_CHARS)).collect::<Vec<_>>();
  numbered(steps.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn content(experiments: &str, full_text: &str) -> StructuredContent {
    StructuredContent {
      experiments: experiments.to_string(),
      full_text: full_text.to_string(),
      ..StructuredContent::default()
    }
  }

  #[test]
  fn test_fields() {
    let content = content(
      "We evaluate on the COCO dataset with 80 classes. Training uses PyTorch 2.1 on 8 A100 GPUs.",
      "Code is on GitHub at example/detector.",
    );
    let steps = extract(&content);
    assert_eq!(steps.data_prep, "We evaluate on the COCO dataset with 80 classes");
    assert_eq!(steps.env_config, "Training uses PyTorch 2");
    assert_eq!(steps.hardware_req, "1 on 8 A100 GPUs");
    assert_eq!(steps.code_info, "Code is on GitHub at example/detector");
  }

  #[test]
  fn test_default_steps() {
    let steps = extract(&content("We train for 300 epochs.", "Then we test."));
    assert_eq!(steps.core_steps.lines().count(), 4);
    assert!(steps.core_steps.starts_with("1. Load the dataset"));
    assert_eq!(steps.data_prep, placeholder::DATA_PREP);
    assert_eq!(steps.code_info, placeholder::CODE_INFO);
  }

  #[test]
  fn test_steps_from_text() {
    let long = format!("Step four {}", "x".repeat(100));
    let text = format!(
      "Step one: load data\nStep two: train\nplain line\nStep three: test\n{long}\nStep five"
    );
    let steps = extract(&content("", &text));
    let lines = steps.core_steps.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "1. Step one: load data");
    assert_eq!(lines[2], "3. Step three: test");
    assert!(lines[3].starts_with("4. Step four"));
    assert!(lines[3].ends_with("..."));
    assert_eq!(lines[3].chars().count(), 3 + STEP_MAX_CHARS + 3);
  }
}
