use gleaner::export::export_analysis;

use super::*;

#[tokio::test]
async fn test_analyze_then_export() -> TestResult<()> {
  let (gleaner, dir) = create_test_gleaner();
  write_txt(&dir.path().join("DOCS"), "anchor free (v2).txt", YOLO_PAPER);

  let paper = gleaner.scan()?.remove(0);
  let analysis = gleaner.analyze(&paper).await?;
  let path = export_analysis(&analysis, &gleaner.config().output_dir)?;

  assert_eq!(path.file_name().unwrap(), "analysis_anchor_free__v2__heuristic.json");
  let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
  assert_eq!(json["paperInfo"]["name"], "anchor free (v2).txt");
  assert_eq!(json["isYoloRelated"], true);
  assert_eq!(
    json["analysisResult"]["paperTitle"],
    "Anchor Free Heads For Real Time Detection"
  );
  Ok(())
}
