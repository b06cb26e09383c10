//! Runtime configuration.
//!
//! Configuration is read from a TOML file, by default
//! `<config dir>/gleaner/config.toml`. Every key is optional and a missing
//! file yields [`Config::default`]:
//!
//! ```toml
//! papers_dir = "DOCS"
//! output_dir = "ANALYSIS_OUTPUT"
//!
//! [model]
//! enabled = true
//! host = "http://localhost:11434"
//! model = "llama3.2:3b"
//! timeout_secs = 300
//! ```

use super::*;
use crate::llm::DEFAULT_HOST;

/// Settings for the whole analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Directory scanned for papers
  pub papers_dir: PathBuf,
  /// Directory exported analyses are written to
  pub output_dir: PathBuf,
  /// Language model settings
  pub model:      ModelConfig,
}

/// Settings for the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
  /// Whether the model is consulted at all
  pub enabled:      bool,
  /// Base URL of the Ollama service
  pub host:         String,
  /// Model tag
  pub model:        String,
  /// Per-request timeout in seconds, `0` for none
  pub timeout_secs: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      papers_dir: PathBuf::from("DOCS"),
      output_dir: PathBuf::from("ANALYSIS_OUTPUT"),
      model:      ModelConfig::default(),
    }
  }
}

impl Default for ModelConfig {
  fn default() -> Self {
    Self {
      enabled:      true,
      host:         DEFAULT_HOST.to_string(),
      model:        "llama3.2:3b".to_string(),
      timeout_secs: 300,
    }
  }
}

impl FromStr for Config {
  type Err = GleanerError;

  fn from_str(s: &str) -> Result<Self> { Ok(toml::from_str(s)?) }
}

impl Config {
  /// Returns the default path for the configuration file.
  ///
  /// - On Unix: `~/.config/gleaner/config.toml`
  /// - On macOS: `~/Library/Application Support/gleaner/config.toml`
  /// - On Windows: `%APPDATA%\gleaner\config.toml`
  /// - Fallback: `./gleaner/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("gleaner").join("config.toml")
  }

  /// Loads the configuration at `path`, or the defaults if there is no file.
  ///
  /// # Errors
  ///
  /// - [`GleanerError::Path`] if the file exists but cannot be read
  /// - [`GleanerError::TomlDe`] if it is not valid configuration
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No configuration at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let config = std::fs::read_to_string(path)?.parse::<Self>()?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
  }

  /// Writes the configuration to `path`, creating parent directories.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    Ok(())
  }

  /// Sets the directory scanned for papers.
  pub fn with_papers_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.papers_dir = dir.into();
    self
  }

  /// Sets the export directory.
  pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.output_dir = dir.into();
    self
  }

  /// Replaces the model settings.
  pub fn with_model(mut self, model: ModelConfig) -> Self {
    self.model = model;
    self
  }

  /// Turns the model on or off.
  pub fn with_model_enabled(mut self, enabled: bool) -> Self {
    self.model.enabled = enabled;
    self
  }
}
