//! Text generation backends.
//!
//! The rest of the service only sees [`TextProvider`], so the remote Gemini
//! API, the mock and the disabled backend are interchangeable.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Empty response")]
    EmptyResponse,
}

/// Sampling controls for a single generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Upper bound on generated tokens.
    pub max_new_tokens: u32,

    /// Sampling temperature; ignored when `do_sample` is false.
    pub temperature: f32,

    /// Nucleus sampling cut-off.
    pub top_p: Option<f32>,

    /// Greedy decoding when false.
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 128,
            temperature: 0.7,
            top_p: None,
            do_sample: true,
        }
    }
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short backend name for logs and metrics.
    fn name(&self) -> &'static str;

    /// Generate a completion for `prompt`.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;

    /// Probe the backend once at startup.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

/// Backend used when generation is switched off. Never becomes ready.
pub struct DisabledTextProvider;

#[async_trait]
impl TextProvider for DisabledTextProvider {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::NotConfigured(
            "Text generation is disabled".to_string(),
        ))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Err(ProviderError::NotConfigured(
            "Text generation is disabled".to_string(),
        ))
    }
}
