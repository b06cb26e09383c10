//! Client implementation for interacting with Ollama LLMs.
//!
//! The analyzer only needs one capability from a language model: turn a prompt
//! into text. That capability is the [`ModelClient`] trait, so tests and other
//! backends can stand in for the network. [`OllamaClient`] is the production
//! implementation and sends a single chat message to a locally running Ollama
//! service through the builder-style [`LlamaRequest`].
//!
//! # Examples
//!
//! ```no_run
//! use gleaner::llm::LlamaRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = LlamaRequest::new()
//!   .with_host("http://localhost:11434")
//!   .with_model("llama3.2:3b")
//!   .with_message("Summarize the YOLOv8 paper in one sentence.");
//!
//! let response = request.send().await?;
//! println!("Response: {}", response.message.content);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use super::*;
use crate::configuration::ModelConfig;

/// Host used when none, or an invalid one, was configured.
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Turns a prompt into the model's free-text answer.
///
/// Implementations must not interpret the answer. Validation happens in
/// [`select`](crate::select).
#[async_trait]
pub trait ModelClient: Send + Sync {
  /// Sends `prompt` and returns the raw completion.
  async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Path of the Ollama chat endpoint, the only one answering with a [`LlamaResponse`].
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Request builder for Ollama LLM interactions.
///
/// # Examples
///
/// ```no_run
/// # use gleaner::llm::LlamaRequest;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let request = LlamaRequest::new().with_model("llama3.2:3b").with_message("Explain NMS");
///
/// let response = request.send().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Serialize, Default)]
pub struct LlamaRequest {
  /// The model tag to use for generation. Sending without one is an error.
  pub model: Option<String>,

  /// Conversation messages, processed in order. Must not be empty when sent.
  pub messages: Vec<Message>,

  /// Whether to stream the response. Always `false`, the answer is read in one piece.
  pub stream: bool,

  /// Generation parameters.
  pub options: Options,

  /// Base URL of the service. Skipped during serialization.
  #[serde(skip)]
  pub host: Option<Url>,

  /// Overall request timeout. Skipped during serialization.
  #[serde(skip)]
  pub timeout: Option<Duration>,
}

/// A single message of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  /// `user` for prompts, `assistant` for model answers
  pub role:    String,
  /// The message text
  pub content: String,
}

/// Configuration options for LLM inference.
#[derive(Debug, Serialize, Deserialize)]
pub struct Options {
  /// Maximum number of tokens to generate
  num_predict: u64,
  /// Top-k sampling parameter
  top_k:       u64,
  /// Top-p (nucleus) sampling parameter
  top_p:       f64,
  /// Temperature for controlling randomness in generation
  temperature: f64,
}

impl Default for Options {
  fn default() -> Self { Self { num_predict: 4096, top_k: 40, top_p: 0.9, temperature: 0.2 } }
}

/// Response structure from the chat endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct LlamaResponse {
  /// Name of the model used
  pub model:                String,
  /// Timestamp of response creation
  #[serde(default)]
  pub created_at:           String,
  /// Generated message content
  pub message:              Message,
  /// Reason for completion
  #[serde(default)]
  pub done_reason:          String,
  /// Whether generation is complete
  #[serde(default)]
  pub done:                 bool,
  /// Total processing time in nanoseconds
  #[serde(default)]
  pub total_duration:       u64,
  /// Number of tokens in the prompt
  #[serde(default)]
  pub prompt_eval_count:    u64,
  /// Number of generated tokens
  #[serde(default)]
  pub eval_count:           u64,
}

impl LlamaRequest {
  /// Creates a new request with builder-style API with default settings.
  pub fn new() -> Self { Self::default() }

  /// Sets the base URL of the service.
  ///
  /// An unparsable host is ignored with a warning and [`DEFAULT_HOST`] is used
  /// instead.
  pub fn with_host(mut self, host: &str) -> Self {
    self.host = match Url::parse(host) {
      Ok(url) => Some(url),
      Err(e) => {
        warn!("Invalid host {host:?} ({e}), using {DEFAULT_HOST}");
        None
      },
    };
    self
  }

  /// Sets the model tag, such as `llama3.2:3b`.
  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model.replace(model.into());
    self
  }

  /// Adds a user message to the conversation.
  pub fn with_message(mut self, content: &str) -> Self {
    self.messages.push(Message { role: "user".to_string(), content: content.to_string() });
    self
  }

  /// Limits how long the whole request may take.
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// The full URL the request is posted to.
  pub fn url(&self) -> Result<Url> {
    let base = match &self.host {
      Some(host) => host.clone(),
      None => {
        debug!("No host set, using {DEFAULT_HOST}");
        Url::parse(DEFAULT_HOST).map_err(|e| GleanerError::Config(e.to_string()))?
      },
    };
    base.join(CHAT_ENDPOINT).map_err(|e| GleanerError::Config(e.to_string()))
  }

  /// Sends the request to the Ollama service.
  ///
  /// # Errors
  ///
  /// - [`GleanerError::LLMMissingModel`] if no model was set
  /// - [`GleanerError::LLMMissingMessage`] if no message was added
  /// - [`GleanerError::Network`] if the request fails or the body cannot be decoded
  /// - [`GleanerError::ModelCall`] if the service answers with an error status
  pub async fn send(&self) -> Result<LlamaResponse> {
    if self.model.is_none() {
      return Err(GleanerError::LLMMissingModel);
    }

    if self.messages.is_empty() {
      return Err(GleanerError::LLMMissingMessage);
    }

    let url = self.url()?;
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = self.timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    trace!("Posting {} message(s) to {url}", self.messages.len());
    let response = client.post(url).json(&self).send().await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(GleanerError::ModelCall(format!("{status}: {}", body.trim())));
    }

    let llama_response: LlamaResponse = response.json().await?;
    Ok(llama_response)
  }
}

/// [`ModelClient`] backed by a local Ollama service.
#[derive(Debug, Clone)]
pub struct OllamaClient {
  /// Base URL of the service
  host:    String,
  /// Model tag
  model:   String,
  /// Per-request timeout
  timeout: Option<Duration>,
}

impl OllamaClient {
  /// Creates a client for `model` served at `host`.
  pub fn new(host: impl Into<String>, model: impl Into<String>) -> Self {
    Self { host: host.into(), model: model.into(), timeout: None }
  }

  /// Creates a client from the `[model]` section of the configuration.
  pub fn from_config(config: &ModelConfig) -> Self {
    let client = Self::new(&config.host, &config.model);
    match config.timeout_secs {
      0 => client,
      secs => client.with_timeout(Duration::from_secs(secs)),
    }
  }

  /// Limits how long a single completion may take.
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// The model tag this client requests.
  pub fn model(&self) -> &str { &self.model }
}

#[async_trait]
impl ModelClient for OllamaClient {
  async fn complete(&self, prompt: &str) -> Result<String> {
    let mut request = LlamaRequest::new()
      .with_host(&self.host)
      .with_model(self.model.as_str())
      .with_message(prompt);
    if let Some(timeout) = self.timeout {
      request = request.with_timeout(timeout);
    }

    let response = request.send().await?;
    debug!(
      "{} answered with {} characters ({} tokens)",
      response.model,
      response.message.content.len(),
      response.eval_count
    );
    Ok(response.message.content)
  }
}
