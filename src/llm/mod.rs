//! LLM: OpenAI-compatible chat adapter for component generation.
//!
//! DESIGN
//! ======
//! Configured entirely from environment variables. `LlmClient` pairs a
//! chat-completions HTTP client with the configured model name and is used
//! through the [`LlmChat`] trait so services can be tested with a mock.

pub mod client;
pub mod config;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

/// Concrete LLM client backed by an OpenAI-compatible gateway.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: client::ChatCompletionsClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// See [`LlmConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner =
            client::ChatCompletionsClient::new(config.api_key, &config.base_url, config.temperature, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.inner
            .chat(&self.model, max_tokens, system, messages)
            .await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
