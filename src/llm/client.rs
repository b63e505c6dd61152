use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends `prompt` to the model and returns the generated completion,
    /// trimmed. Every remote failure comes back as a typed `Error`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for the Hugging Face hosted inference API.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
    timeout_secs: u64,
    parameters: GenerationParameters,
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            parameters: GenerationParameters::from(&config),
            api_url: config.api_url,
            api_token: config.api_token,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn has_token(&self) -> bool {
        self.api_token.is_some()
    }

    fn map_transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            Error::Network(err)
        }
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let payload = GenerationRequest {
            inputs: prompt.to_string(),
            parameters: self.parameters.clone(),
        };

        debug!(
            "Sending generation request to {} ({} prompt chars, max_new_tokens={})",
            self.api_url,
            prompt.chars().count(),
            self.parameters.max_new_tokens
        );

        let mut request = self.client.post(&self.api_url).json(&payload);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(api_error) => api_error.describe(),
                Err(_) => body.trim().to_string(),
            };
            return Err(Error::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let generations: Vec<GeneratedText> = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(format!("expected a list of generations: {}", e)))?;

        let first = generations
            .into_iter()
            .next()
            .ok_or_else(|| Error::malformed("empty generation list"))?;

        debug!(
            "Received completion of {} chars",
            first.generated_text.chars().count()
        );

        Ok(first.generated_text.trim().to_string())
    }
}
