//! Formula, derivation and advantage extraction from the full text.

use super::*;

/// Extracts the mathematical content.
pub fn extract(content: &StructuredContent) -> MathDerivation {
  let text = &content.full_text;

  let formulas = text
    .split('\n')
    .map(str::trim)
    .filter(|line| line.chars().count() > 3 && line.contains(keywords::FORMULA_SYMBOLS))
    .take(3)
    .collect::<Vec<_>>();
  let key_formulas = if formulas.is_empty() {
    placeholder::KEY_FORMULAS.to_string()
  } else {
    formulas.join("\n")
  };

  let derivation = matching_sentences(text, keywords::DERIVATION, 10).take(3).collect::<Vec<_>>();
  let derivation_steps = if derivation.is_empty() {
    placeholder::DERIVATION_STEPS.to_string()
  } else {
    numbered(derivation)
  };

  MathDerivation {
    key_formulas,
    derivation_steps,
    math_advantage: first_sentence(text, keywords::ADVANTAGE, 10, placeholder::MATH_ADVANTAGE),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn content(full_text: &str) -> StructuredContent {
    StructuredContent { full_text: full_text.to_string(), ..StructuredContent::default() }
  }

  #[test]
  fn test_formulas() {
    let content = content("intro\n  L = L_cls + L_box  \nx=1\n∑ w_i x_i\n$a$ + b\n∂f/∂x = 0");
    let math = extract(&content);
    assert_eq!(math.key_formulas, "L = L_cls + L_box\n∑ w_i x_i\n$a$ + b");
  }

  #[test]
  fn test_derivation_and_advantage() {
    let content = content(
      "We assume the boxes are independent. In the next step we derive the gradient. We obtain \
       a closed form. Finally we derive a bound. The head is faster than before.",
    );
    let math = extract(&content);
    assert_eq!(
      math.derivation_steps,
      "1. We assume the boxes are independent\n2. In the next step we derive the gradient\n3. We \
       obtain a closed form"
    );
    assert_eq!(math.math_advantage, "The head is faster than before");
  }

  #[test]
  fn test_placeholders() {
    let math = extract(&content("Nothing mathematical here at all"));
    assert_eq!(math.key_formulas, placeholder::KEY_FORMULAS);
    assert_eq!(math.derivation_steps, placeholder::DERIVATION_STEPS);
    assert_eq!(math.math_advantage, placeholder::MATH_ADVANTAGE);
  }
}
