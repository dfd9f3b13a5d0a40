use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_GENERATION_MAX_CONCURRENT: usize = 2;

#[derive(Debug, Clone)]
pub struct PoiAiConfig {
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub generation: GenerationConfig,
    pub tunnel: TunnelConfig,
    pub observability: ObservabilityConfig,
}

/// Which text generation backend to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Mock,
    Disabled,
}

impl ProviderKind {
    fn parse(value: &str) -> Result<Self, AppError> {
        match value.to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "mock" => Ok(ProviderKind::Mock),
            "disabled" | "none" => Ok(ProviderKind::Disabled),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Unknown GENAI_PROVIDER '{}', expected gemini, mock or disabled",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub provider: ProviderKind,
    /// Model for chat and descriptions (e.g., gemini-2.0-flash)
    pub text_model: String,
    /// Empty key leaves the Gemini backend not ready
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub timeout_secs: u64,
    pub max_concurrent: usize,
}

impl GenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone)]
pub struct TunnelConfig {
    /// Tunnel is disabled when unset
    pub auth_token: Option<String>,
    pub agent_binary: String,
    pub agent_api_url: String,
    /// File that receives the public URL
    pub url_file: String,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// OTLP export is skipped when unset
    pub otlp_endpoint: Option<String>,
}

impl PoiAiConfig {
    pub fn load() -> Result<Self, AppError> {
        let mut common_config = core_config::Config::load()?;
        if let Ok(level) = env::var("LOG_LEVEL") {
            common_config.log_level = level;
        }
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let provider = ProviderKind::parse(&get_env("GENAI_PROVIDER", Some("gemini"), is_prod)?)?;
        // Only a real backend needs a key
        let api_key_default = if provider == ProviderKind::Gemini && is_prod {
            None
        } else {
            Some("")
        };

        Ok(PoiAiConfig {
            common: common_config,
            models: ModelConfig {
                provider,
                text_model: get_env("GENAI_TEXT_MODEL", Some("gemini-2.0-flash"), false)?,
                api_key: get_env("GOOGLE_API_KEY", api_key_default, false)?,
            },
            generation: GenerationConfig {
                timeout_secs: get_env(
                    "GENERATION_TIMEOUT_SECS",
                    Some(&DEFAULT_GENERATION_TIMEOUT_SECS.to_string()),
                    false,
                )?
                .parse()
                .unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECS),
                max_concurrent: get_env(
                    "GENERATION_MAX_CONCURRENT",
                    Some(&DEFAULT_GENERATION_MAX_CONCURRENT.to_string()),
                    false,
                )?
                .parse()
                .unwrap_or(DEFAULT_GENERATION_MAX_CONCURRENT),
            },
            tunnel: TunnelConfig {
                auth_token: env::var("NGROK_AUTH_TOKEN").ok().filter(|t| !t.is_empty()),
                agent_binary: get_env("NGROK_BINARY", Some("ngrok"), false)?,
                agent_api_url: get_env("NGROK_API_URL", Some("http://127.0.0.1:4040"), false)?,
                url_file: get_env("NGROK_URL_FILE", Some("ngrok_url.txt"), false)?,
            },
            observability: ObservabilityConfig {
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|e| !e.is_empty()),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
