use super::*;

#[traced_test]
#[tokio::test]
async fn test_batch_isolates_failures() -> TestResult<()> {
  let (gleaner, dir) = create_test_gleaner();
  let docs = dir.path().join("DOCS");
  write_txt(&docs, "a_anchor_free.txt", YOLO_PAPER);
  write_txt(&docs, "b_short.txt", &"x".repeat(150));
  write_txt(&docs, "c_attention.txt", TRANSFORMER_PAPER);
  write_txt(&docs, "notes.md", "not a paper");

  let report = gleaner.analyze_batch().await?;
  assert_eq!(report.overall_status, OverallStatus::PartialError);
  assert_eq!(report.total_papers, 4);
  assert_eq!(report.valid_papers_count, 3);
  assert_eq!(report.analyzed_count, 2);
  assert_eq!(report.yolo_related_count, 1);
  assert_eq!(report.non_yolo_related_count, 1);

  let names = report.analyzed_papers.iter().map(|a| a.paper.name.as_str()).collect::<Vec<_>>();
  assert_eq!(names, vec!["a_anchor_free.txt", "c_attention.txt"]);

  assert_eq!(report.error_log.len(), 1);
  assert!(report.error_log[0].starts_with("b_short.txt: content too short (150 < 200"));
  assert!(logs_contain("Paper 3/3: c_attention.txt"));
  Ok(())
}

#[tokio::test]
async fn test_batch_success() -> TestResult<()> {
  let (gleaner, dir) = create_test_gleaner();
  write_txt(&dir.path().join("DOCS"), "anchor_free.txt", YOLO_PAPER);

  let report = gleaner.analyze_batch().await?;
  assert_eq!(report.overall_status, OverallStatus::Success);
  assert!(report.error_log.is_empty());
  for analysis in &report.analyzed_papers {
    assert_complete(&analysis.analysis_result);
  }
  Ok(())
}

#[tokio::test]
async fn test_batch_where_everything_fails() -> TestResult<()> {
  let (gleaner, dir) = create_test_gleaner();
  write_txt(&dir.path().join("DOCS"), "short.txt", "tiny");

  let report = gleaner.analyze_batch().await?;
  assert_eq!(report.overall_status, OverallStatus::Error);
  assert_eq!(report.analyzed_count, 0);
  assert_eq!(report.error_log.len(), 1);
  Ok(())
}

#[tokio::test]
async fn test_batch_without_supported_files() {
  let (gleaner, dir) = create_test_gleaner();
  write_txt(&dir.path().join("DOCS"), "notes.md", YOLO_PAPER);

  let err = gleaner.analyze_batch().await.unwrap_err();
  assert!(matches!(err, GleanerError::NoValidPapers(_)));

  let report = BatchReport::fatal(&err);
  assert_eq!(report.overall_status, OverallStatus::Error);
  assert_eq!(report.total_papers, 0);
  assert!(report.error_log[0].starts_with("no supported papers found"));
}

#[tokio::test]
async fn test_batch_report_json() -> TestResult<()> {
  let (gleaner, dir) = create_test_gleaner();
  write_txt(&dir.path().join("DOCS"), "anchor_free.txt", YOLO_PAPER);

  let report = gleaner.analyze_batch().await?;
  let json = serde_json::to_value(&report)?;
  assert_eq!(json["overallStatus"], "success");
  assert_eq!(json["yoloRelatedCount"], 1);
  assert_eq!(json["analyzedPapers"][0]["extractionSource"], "heuristic");
  assert_eq!(json["analyzedPapers"][0]["analysisResult"]["isYoloRelated"], "yes");
  assert!(json["analyzedPapers"][0]["paper"]["path"].is_string());
  Ok(())
}
