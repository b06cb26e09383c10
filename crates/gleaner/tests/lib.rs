use std::{
  collections::VecDeque,
  error::Error,
  io::Write,
  path::{Path, PathBuf},
  sync::{Arc, Mutex},
};

use async_trait::async_trait;
use gleaner::{
  analysis::{OverallStatus, PSEUDO_CODE_SENTINEL},
  error::{GleanerError, Result as GleanerResult},
  prelude::*,
};
use tempfile::{tempdir, TempDir};
use tracing_test::traced_test;

mod workflows;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

/// A YOLO paper whose title sits on the first line.
pub const YOLO_PAPER: &str = "Anchor Free Heads For Real Time Detection
Alice Smith1 and Bob Jones2
YOLOv8 improves object detection via a novel anchor-free head.
Abstract
We propose a decoupled head that improves accuracy while reducing latency.
The head predicts one bounding box per grid cell without anchors.
Our loss is L = L_cls + L_box + L_dfl.
We train on the COCO dataset with 118k images.
Training uses PyTorch 2 on 8 A100 GPUs.
Code is available on GitHub.
Experimental results show that our head is faster than YOLOv5.";

/// A paper mentioning YOLO next to a competing domain term.
pub const TRANSFORMER_PAPER: &str = "Scaling Attention For Dense Prediction
Carol White
Abstract
We study a transformer encoder for dense prediction and compare it to YOLO.
The encoder attends over all patches with a learned position embedding.
Experiments on ADE20K report mIoU gains of several points over strong baselines.
We conclude that attention scales well with model size.";

/// Writes a plain text paper into `dir`.
pub fn write_txt(dir: &Path, name: &str, text: &str) -> PathBuf {
  let path = dir.join(name);
  std::fs::write(&path, text).unwrap();
  path
}

/// Writes a minimal Word document with one paragraph per entry of `paragraphs`.
pub fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
  let body = paragraphs
    .iter()
    .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
    .collect::<String>();
  let xml = format!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?><w:document \
     xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"><w:body>{body}</w:body></w:document>"
  );

  let path = dir.join(name);
  let mut writer = zip::ZipWriter::new(std::fs::File::create(&path).unwrap());
  writer.start_file("word/document.xml", zip::write::SimpleFileOptions::default()).unwrap();
  writer.write_all(xml.as_bytes()).unwrap();
  writer.finish().unwrap();
  path
}

/// An analyzer over a fresh papers directory, without a model.
pub fn create_test_gleaner() -> (Gleaner, TempDir) {
  let dir = tempdir().unwrap();
  let config = Config::default()
    .with_papers_dir(dir.path().join("DOCS"))
    .with_output_dir(dir.path().join("ANALYSIS_OUTPUT"))
    .with_model_enabled(false);
  std::fs::create_dir_all(&config.papers_dir).unwrap();
  (Gleaner::builder().with_config(config).build(), dir)
}

/// Model client answering from a fixed script, one entry per call.
///
/// Calls past the end of the script fail like an unreachable service.
#[derive(Clone, Default)]
pub struct ScriptedClient {
  answers: Arc<Mutex<VecDeque<GleanerResult<String>>>>,
  prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
  pub fn new(answers: impl IntoIterator<Item = GleanerResult<String>>) -> Self {
    Self {
      answers: Arc::new(Mutex::new(answers.into_iter().collect())),
      prompts: Arc::default(),
    }
  }

  pub fn prompts(&self) -> Vec<String> { self.prompts.lock().unwrap().clone() }
}

#[async_trait]
impl ModelClient for ScriptedClient {
  async fn complete(&self, prompt: &str) -> GleanerResult<String> {
    self.prompts.lock().unwrap().push(prompt.to_string());
    self
      .answers
      .lock()
      .unwrap()
      .pop_front()
      .unwrap_or_else(|| Err(GleanerError::ModelCall("script exhausted".to_string())))
  }
}

/// An analyzer over `dir` that asks `client` for every paper.
pub fn gleaner_with_client(dir: &TempDir, client: ScriptedClient) -> Gleaner {
  let config = Config::default()
    .with_papers_dir(dir.path().join("DOCS"))
    .with_output_dir(dir.path().join("ANALYSIS_OUTPUT"));
  Gleaner::builder().with_config(config).with_model_client(client).build()
}

/// A complete model answer in the camelCase schema.
pub fn model_answer(title: &str, relevance: &str, pseudo_code: &str) -> String {
  serde_json::json!({
    "paperTitle": title,
    "isYoloRelated": relevance,
    "innovationPoint": {
      "coreInnovation": "Decoupled anchor-free head",
      "innovationValue": "Removes anchor tuning",
      "pseudoCode": pseudo_code,
    },
    "mathDerivation": {
      "keyFormulas": "L = L_cls + L_box + L_dfl",
      "derivationSteps": "1. Assign targets\n2. Regress distances",
      "mathAdvantage": "Fewer hyperparameters",
    },
    "reproductionSteps": {
      "dataPrep": "COCO 2017",
      "envConfig": "Python 3.10, PyTorch 2.1",
      "hardwareReq": "8x A100",
      "coreSteps": "1. Prepare data\n2. Train\n3. Validate",
      "codeInfo": "Available on GitHub",
    },
    "comparisonExperiments": {
      "comparedMethods": "YOLOv5, YOLOX",
      "evaluationMetrics": "mAP50-95",
      "keyResults": "53.9 AP",
      "experimentConclusion": "Faster and more accurate",
    },
  })
  .to_string()
}

/// Asserts that no leaf of `result` is blank.
pub fn assert_complete(result: &AnalysisResult) {
  for (key, value) in result.leaves() {
    assert!(!value.trim().is_empty(), "{key} is blank");
  }
}
