use crate::config::InferenceConfig;
use serde::{Deserialize, Serialize};

/// Body sent to the text-generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub return_full_text: bool,
}

/// One element of the endpoint's JSON array reply.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText {
    #[serde(default)]
    pub generated_text: String,
}

/// Error body returned alongside non-2xx statuses, e.g.
/// `{"error": "Model distilgpt2 is currently loading", "estimated_time": 20.0}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

impl From<&InferenceConfig> for GenerationParameters {
    fn from(config: &InferenceConfig) -> Self {
        Self {
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            do_sample: config.do_sample,
            return_full_text: config.return_full_text,
        }
    }
}

impl ApiErrorBody {
    pub fn describe(&self) -> String {
        match self.estimated_time {
            Some(secs) => format!("{} (estimated time {:.0}s)", self.error, secs),
            None => self.error.clone(),
        }
    }
}
