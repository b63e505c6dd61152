use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co/models/distilgpt2";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Remote text-generation endpoint and the generation parameters sent with
/// every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_do_sample")]
    pub do_sample: bool,
    #[serde(default)]
    pub return_full_text: bool,
}

impl Config {
    /// Applies environment overrides. `lookup` is `std::env::var` in
    /// production.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("HF_API_TOKEN").filter(|t| !t.trim().is_empty()) {
            self.inference.api_token = Some(token);
        }
    }

    pub fn validate(&self) -> Result<()> {
        let inference = &self.inference;

        if inference.timeout_secs == 0 {
            return Err(Error::config("inference.timeout_secs must be greater than 0"));
        }
        if inference.max_new_tokens == 0 {
            return Err(Error::config("inference.max_new_tokens must be greater than 0"));
        }
        if !inference.temperature.is_finite() || inference.temperature < 0.0 {
            return Err(Error::config(format!(
                "inference.temperature must be a non-negative number, got {}",
                inference.temperature
            )));
        }

        let url = reqwest::Url::parse(&inference.api_url).map_err(|e| {
            Error::config(format!("inference.api_url '{}' is invalid: {}", inference.api_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "inference.api_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }
}

impl InferenceConfig {
    /// Model name as shown on the liveness page: the last path segment of
    /// the endpoint URL.
    pub fn model_name(&self) -> &str {
        self.api_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or("unknown")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            timeout_secs: default_timeout_secs(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            do_sample: default_do_sample(),
            return_full_text: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    45
}

fn default_max_new_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_do_sample() -> bool {
    true
}
