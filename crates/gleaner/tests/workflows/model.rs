use super::*;

#[tokio::test]
async fn test_model_answer_is_used() -> TestResult<()> {
  let dir = tempdir()?;
  let docs = dir.path().join("DOCS");
  std::fs::create_dir_all(&docs)?;
  write_txt(&docs, "anchor_free.txt", YOLO_PAPER);

  let raw = model_answer("Anchor-Free YOLO Heads", "yes", "class Head(nn.Module): ...");
  let client = ScriptedClient::new([Ok(raw)]);
  let gleaner = gleaner_with_client(&dir, client.clone());

  let paper = gleaner.scan()?.remove(0);
  let analysis = gleaner.analyze(&paper).await?;
  assert_eq!(analysis.extraction_source, Provenance::Model);
  assert_eq!(analysis.analysis_result.paper_title, "Anchor-Free YOLO Heads");
  assert_eq!(analysis.analysis_result.innovation_point.pseudo_code, "class Head(nn.Module): ...");

  let prompts = client.prompts();
  assert_eq!(prompts.len(), 1);
  assert!(prompts[0].contains("File name: anchor_free.txt"));
  assert!(prompts[0].contains("backbone, neck or head"));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_model_failure_falls_back() -> TestResult<()> {
  let dir = tempdir()?;
  let docs = dir.path().join("DOCS");
  std::fs::create_dir_all(&docs)?;
  write_txt(&docs, "anchor_free.txt", YOLO_PAPER);

  let client = ScriptedClient::new([Err(GleanerError::ModelCall("connection refused".into()))]);
  let gleaner = gleaner_with_client(&dir, client);

  let report = gleaner.analyze_batch().await?;
  assert_eq!(report.overall_status, OverallStatus::Success);
  assert!(report.error_log.is_empty());
  assert_eq!(report.analyzed_papers[0].extraction_source, Provenance::Heuristic);
  assert_eq!(
    report.analyzed_papers[0].analysis_result.paper_title,
    "Anchor Free Heads For Real Time Detection"
  );
  assert!(logs_contain("connection refused"));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_fenced_answer_with_blank_title_is_discarded() -> TestResult<()> {
  let dir = tempdir()?;
  let docs = dir.path().join("DOCS");
  std::fs::create_dir_all(&docs)?;
  write_txt(&docs, "anchor_free.txt", YOLO_PAPER);

  let raw = format!("```json\n{}\n```", model_answer("", "yes", "class Head: ..."));
  let gleaner = gleaner_with_client(&dir, ScriptedClient::new([Ok(raw)]));

  let paper = gleaner.scan()?.remove(0);
  let analysis = gleaner.analyze(&paper).await?;
  assert_eq!(analysis.extraction_source, Provenance::Heuristic);
  assert_eq!(analysis.analysis_result.paper_title, "Anchor Free Heads For Real Time Detection");
  assert!(logs_contain("paperTitle is blank"));
  Ok(())
}

#[tokio::test]
async fn test_sentinel_overrides_model_for_unrelated_papers() -> TestResult<()> {
  let dir = tempdir()?;
  let docs = dir.path().join("DOCS");
  std::fs::create_dir_all(&docs)?;
  write_txt(&docs, "attention.txt", TRANSFORMER_PAPER);

  let raw = model_answer("Scaling Attention", "yes", "class Encoder(nn.Module): ...");
  let client = ScriptedClient::new([Ok(raw)]);
  let gleaner = gleaner_with_client(&dir, client.clone());

  let paper = gleaner.scan()?.remove(0);
  let analysis = gleaner.analyze(&paper).await?;
  assert_eq!(analysis.extraction_source, Provenance::Model);
  assert!(!analysis.is_yolo_related);
  assert_eq!(analysis.analysis_result.innovation_point.pseudo_code, PSEUDO_CODE_SENTINEL);
  assert!(!client.prompts()[0].contains("backbone, neck or head"));
  Ok(())
}

#[tokio::test]
async fn test_each_paper_gets_its_own_answer() -> TestResult<()> {
  let dir = tempdir()?;
  let docs = dir.path().join("DOCS");
  std::fs::create_dir_all(&docs)?;
  write_txt(&docs, "a.txt", YOLO_PAPER);
  write_txt(&docs, "b.txt", YOLO_PAPER);
  write_txt(&docs, "c.txt", YOLO_PAPER);

  let client = ScriptedClient::new([
    Ok(model_answer("First", "yes", "code")),
    Ok("I cannot answer that.".to_string()),
  ]);
  let gleaner = gleaner_with_client(&dir, client.clone());

  let report = gleaner.analyze_batch().await?;
  let sources = report.analyzed_papers.iter().map(|a| a.extraction_source).collect::<Vec<_>>();
  assert_eq!(sources, vec![Provenance::Model, Provenance::Heuristic, Provenance::Heuristic]);
  assert_eq!(client.prompts().len(), 3);
  for analysis in &report.analyzed_papers {
    assert_complete(&analysis.analysis_result);
  }
  Ok(())
}
