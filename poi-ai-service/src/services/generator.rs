//! Shared access to the text generation backend.
//!
//! The provider is probed once at startup. Calls are bounded by a permit pool
//! and a per-call timeout, since a generation backend is slow and costly per
//! request.

use super::providers::{GenerationParams, ProviderError, TextProvider};
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Semaphore;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation backend is not ready")]
    NotReady,

    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[derive(Debug, Clone, Copy)]
pub struct GenerationLimits {
    pub max_concurrent: usize,
    pub timeout: Duration,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_concurrent: 2,
            timeout: Duration::from_secs(30),
        }
    }
}

pub struct TextGenerator {
    provider: Arc<dyn TextProvider>,
    ready: bool,
    permits: Semaphore,
    timeout: Duration,
}

impl TextGenerator {
    /// Probe `provider` and wrap it. A failed probe leaves the generator
    /// permanently not ready; it never fails startup.
    pub async fn initialize(provider: Arc<dyn TextProvider>, limits: GenerationLimits) -> Self {
        let ready = match provider.health_check().await {
            Ok(()) => {
                tracing::info!(backend = provider.name(), "Text generation backend ready");
                true
            }
            Err(e) => {
                tracing::warn!(
                    backend = provider.name(),
                    error = %e,
                    "Text generation backend unavailable, using fallback responses"
                );
                false
            }
        };

        Self::with_readiness(provider, ready, limits)
    }

    pub fn with_readiness(
        provider: Arc<dyn TextProvider>,
        ready: bool,
        limits: GenerationLimits,
    ) -> Self {
        Self {
            provider,
            ready,
            permits: Semaphore::new(limits.max_concurrent.max(1)),
            timeout: limits.timeout,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn backend(&self) -> &'static str {
        self.provider.name()
    }

    /// Generate text for `prompt`, with any echo of the prompt removed and
    /// surrounding whitespace trimmed.
    pub async fn generate(
        &self,
        feature: &'static str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        if !self.ready {
            counter!("genai_generations_total", "feature" => feature, "outcome" => "not_ready")
                .increment(1);
            return Err(GenerationError::NotReady);
        }

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| GenerationError::NotReady)?;

        let start = Instant::now();
        let outcome = tokio::time::timeout(self.timeout, self.provider.generate(prompt, params)).await;
        histogram!("genai_generation_duration_seconds", "feature" => feature)
            .record(start.elapsed().as_secs_f64());

        let result = match outcome {
            Err(_) => Err(GenerationError::Timeout(self.timeout)),
            Ok(Err(e)) => Err(GenerationError::from(e)),
            Ok(Ok(text)) => Ok(strip_prompt_echo(&text, prompt)),
        };

        let label = match &result {
            Ok(_) => "success",
            Err(GenerationError::Timeout(_)) => "timeout",
            Err(_) => "error",
        };
        counter!("genai_generations_total", "feature" => feature, "outcome" => label).increment(1);

        result
    }
}

fn strip_prompt_echo(text: &str, prompt: &str) -> String {
    if prompt.is_empty() {
        return text.trim().to_string();
    }
    text.replace(prompt, "").trim().to_string()
}
