//! Configuration for the DashScope API connection.

use dashgate_core::GenerationOptions;
use dashgate_error::{ConfigError, DashGateResult, DashScopeError, DashScopeErrorKind};
use derive_getters::Getters;

/// Configuration for the DashScope API connection.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct DashScopeConfig {
    /// API key for authentication
    api_key: String,
    /// Base URL of the API
    #[builder(default = "\"https://dashscope.aliyuncs.com\".to_string()")]
    base_url: String,
    /// Model identifier to use for generation
    #[builder(default = "\"qwen-plus\".to_string()")]
    model: String,
    /// Default sampling options; per-request options take precedence
    #[builder(default)]
    default_options: Option<GenerationOptions>,
}

impl DashScopeConfig {
    /// Creates a builder for DashScopeConfig.
    pub fn builder() -> DashScopeConfigBuilder {
        DashScopeConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `DASHSCOPE_API_KEY` (required)
    /// - `DASHSCOPE_BASE_URL` (default: "https://dashscope.aliyuncs.com")
    /// - `DASHSCOPE_MODEL` (default: "qwen-plus")
    /// - `DASHSCOPE_TOP_P`, `DASHSCOPE_TOP_K`, `DASHSCOPE_TEMPERATURE`
    ///   (optional default sampling options)
    pub fn from_env() -> DashGateResult<Self> {
        let api_key = std::env::var("DASHSCOPE_API_KEY")
            .map_err(|_| DashScopeError::new(DashScopeErrorKind::MissingApiKey))?;
        let base_url = std::env::var("DASHSCOPE_BASE_URL")
            .unwrap_or_else(|_| "https://dashscope.aliyuncs.com".to_string());
        let model = std::env::var("DASHSCOPE_MODEL").unwrap_or_else(|_| "qwen-plus".to_string());

        let mut options = GenerationOptions::builder();
        if let Some(top_p) = env_parse::<f32>("DASHSCOPE_TOP_P")? {
            options.top_p(top_p);
        }
        if let Some(top_k) = env_parse::<u32>("DASHSCOPE_TOP_K")? {
            options.top_k(top_k);
        }
        if let Some(temperature) = env_parse::<f32>("DASHSCOPE_TEMPERATURE")? {
            options.temperature(temperature);
        }
        let options = options.build().map_err(|e| {
            ConfigError::new(format!("Failed to build default options: {}", e))
        })?;
        let default_options = (!options.is_empty()).then_some(options);

        Ok(DashScopeConfigBuilder::default()
            .api_key(api_key)
            .base_url(base_url)
            .model(model)
            .default_options(default_options)
            .build()
            .expect("Valid DashScopeConfig"))
    }
}

/// Reads and parses an optional environment variable.
fn env_parse<T>(name: &str) -> DashGateResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::new(format!("{} is not valid: {}", name, e)).into()),
        Err(_) => Ok(None),
    }
}
