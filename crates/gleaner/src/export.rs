//! Writing analyses to disk.

use super::*;

/// Export file layout.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
  /// When and how the analysis was produced
  pub export_info:     ExportInfo,
  /// The analyzed file
  pub paper_info:      PaperRecord,
  /// Classifier verdict
  pub is_yolo_related: bool,
  /// The analysis itself
  pub analysis_result: AnalysisResult,
}

/// Provenance and time of an export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportInfo {
  /// Which path produced the analysis
  pub source: Provenance,
  /// Export time in UTC
  pub time:   DateTime<Utc>,
}

/// Writes `analysis` as pretty-printed JSON into `output_dir`.
///
/// The directory is created if needed and the file is named
/// `analysis_<stem>_<source>.json`, where `<stem>` is the paper's file stem
/// with every character other than letters, digits, `-` and `_` replaced by
/// `_`. An existing file of the same name is overwritten.
///
/// Returns the path of the written file.
pub fn export_analysis(analysis: &PaperAnalysis, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
  let output_dir = output_dir.as_ref();
  std::fs::create_dir_all(output_dir)?;

  let file_name = format!(
    "analysis_{}_{}.json",
    sanitize(&analysis.paper.stem()),
    analysis.extraction_source
  );
  let path = output_dir.join(file_name);

  let document = ExportDocument {
    export_info:     ExportInfo { source: analysis.extraction_source, time: Utc::now() },
    paper_info:      analysis.paper.clone(),
    is_yolo_related: analysis.is_yolo_related,
    analysis_result: analysis.analysis_result.clone(),
  };
  std::fs::write(&path, serde_json::to_string_pretty(&document)?)?;

  info!("Exported analysis of {} to {}", analysis.paper.name, path.display());
  Ok(path)
}

/// Replaces characters that are awkward in file names.
fn sanitize(stem: &str) -> String {
  stem.chars().map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' }).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn analysis(name: &str) -> PaperAnalysis {
    let content = StructuredContent::default();
    PaperAnalysis {
      paper:             PaperRecord::from_path(name),
      is_yolo_related:   false,
      extraction_source: Provenance::Heuristic,
      analysis_result:   extract::heuristic_candidate(&content, name, false),
    }
  }

  #[test]
  fn test_sanitize() {
    assert_eq!(sanitize("YOLOv8 v1.2 (draft)"), "YOLOv8_v1_2__draft_");
    assert_eq!(sanitize("检测-论文_1"), "检测-论文_1");
  }

  #[traced_test]
  #[test]
  fn test_export_analysis() {
    let dir = tempdir().unwrap();
    let output_dir = dir.path().join("ANALYSIS_OUTPUT");
    let path = export_analysis(&analysis("dense.v2.pdf"), &output_dir).unwrap();

    assert_eq!(path, output_dir.join("analysis_dense_v2_heuristic.json"));
    assert!(logs_contain("Exported analysis of dense.v2.pdf"));

    let json: serde_json::Value =
      serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["exportInfo"]["source"], "heuristic");
    assert!(json["exportInfo"]["time"].as_str().unwrap().parse::<DateTime<Utc>>().is_ok());
    assert_eq!(json["paperInfo"]["name"], "dense.v2.pdf");
    assert_eq!(json["isYoloRelated"], false);
    assert_eq!(json["analysisResult"]["innovationPoint"]["pseudoCode"], PSEUDO_CODE_SENTINEL);
  }

  #[test]
  fn test_export_overwrites() {
    let dir = tempdir().unwrap();
    let first = export_analysis(&analysis("a.txt"), dir.path()).unwrap();
    let second = export_analysis(&analysis("a.txt"), dir.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
  }
}
