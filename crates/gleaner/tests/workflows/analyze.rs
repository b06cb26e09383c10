use gleaner::paper::{Format, Validity};

use super::*;

#[traced_test]
#[tokio::test]
async fn test_analyze_yolo_text_paper() -> TestResult<()> {
  let (gleaner, dir) = create_test_gleaner();
  write_txt(&dir.path().join("DOCS"), "anchor_free.txt", YOLO_PAPER);

  let papers = gleaner.scan()?;
  assert_eq!(papers.len(), 1);
  assert_eq!(papers[0].format, Some(Format::Txt));
  assert_eq!(papers[0].index, Some(1));

  let analysis = gleaner.analyze(&papers[0]).await?;
  assert!(analysis.is_yolo_related);
  assert_eq!(analysis.extraction_source, Provenance::Heuristic);

  let result = &analysis.analysis_result;
  assert_eq!(result.paper_title, "Anchor Free Heads For Real Time Detection");
  // the home page has no full stop before this line, so the sentence spans the heading lines
  assert!(result
    .innovation_point
    .core_innovation
    .ends_with("YOLOv8 improves object detection via a novel anchor-free head"));
  assert_eq!(result.math_derivation.key_formulas, "Our loss is L = L_cls + L_box + L_dfl.");
  assert_eq!(result.reproduction_steps.data_prep, "We train on the COCO dataset with 118k images");
  assert_ne!(result.innovation_point.pseudo_code, PSEUDO_CODE_SENTINEL);
  assert_complete(result);

  assert!(logs_contain("classified as YOLO"));
  Ok(())
}

#[tokio::test]
async fn test_negative_terms_win() -> TestResult<()> {
  let (gleaner, dir) = create_test_gleaner();
  let path = write_txt(&dir.path().join("DOCS"), "yolo_vs_attention.txt", TRANSFORMER_PAPER);

  let analysis = gleaner.analyze(&PaperRecord::from_path(path)).await?;
  assert!(!analysis.is_yolo_related);
  assert_eq!(analysis.analysis_result.paper_title, "Scaling Attention For Dense Prediction");
  assert_eq!(analysis.analysis_result.innovation_point.pseudo_code, PSEUDO_CODE_SENTINEL);
  assert_complete(&analysis.analysis_result);
  Ok(())
}

#[tokio::test]
async fn test_analyze_docx_paper() -> TestResult<()> {
  let (gleaner, dir) = create_test_gleaner();
  let mut paragraphs = YOLO_PAPER.lines().collect::<Vec<_>>();
  paragraphs.insert(1, "");
  write_docx(&dir.path().join("DOCS"), "anchor_free.docx", &paragraphs);

  let papers = gleaner.scan()?;
  let analysis = gleaner.analyze(&papers[0]).await?;
  assert!(analysis.is_yolo_related);
  assert_eq!(analysis.paper.format, Some(Format::Docx));
  assert_eq!(analysis.analysis_result.paper_title, "Anchor Free Heads For Real Time Detection");
  Ok(())
}

#[tokio::test]
async fn test_heuristic_analysis_is_idempotent() -> TestResult<()> {
  let (gleaner, dir) = create_test_gleaner();
  let path = write_txt(&dir.path().join("DOCS"), "anchor_free.txt", YOLO_PAPER);
  let paper = PaperRecord::from_path(path);

  let first = gleaner.analyze(&paper).await?;
  let second = gleaner.analyze(&paper).await?;
  assert_eq!(first.analysis_result, second.analysis_result);
  Ok(())
}

#[tokio::test]
async fn test_too_short() {
  let (gleaner, dir) = create_test_gleaner();
  let path = write_txt(&dir.path().join("DOCS"), "short.txt", &"a".repeat(150));

  let err = gleaner.analyze(&PaperRecord::from_path(path)).await.unwrap_err();
  assert!(matches!(err, GleanerError::ContentTooShort { length: 150 }));
}

#[tokio::test]
async fn test_deleted_and_unsupported_files() {
  let (gleaner, dir) = create_test_gleaner();
  let docs = dir.path().join("DOCS");
  let path = write_txt(&docs, "gone.txt", YOLO_PAPER);
  let paper = PaperRecord::from_path(&path);
  std::fs::remove_file(&path).unwrap();

  let err = gleaner.analyze(&paper).await.unwrap_err();
  assert!(matches!(err, GleanerError::Decode { .. }));

  let slides = PaperRecord::from_path(write_txt(&docs, "slides.pptx", YOLO_PAPER));
  assert_eq!(slides.status, Validity::Unsupported);
  let err = gleaner.analyze(&slides).await.unwrap_err();
  assert!(matches!(err, GleanerError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn test_legacy_binary_doc_is_decode_failure() {
  let (gleaner, dir) = create_test_gleaner();
  let path = dir.path().join("DOCS").join("legacy.doc");
  std::fs::write(&path, b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1 old word format").unwrap();

  let err = gleaner.analyze(&PaperRecord::from_path(path)).await.unwrap_err();
  assert!(matches!(err, GleanerError::Decode { .. }));
  assert!(err.to_string().contains("legacy.doc"));
}
