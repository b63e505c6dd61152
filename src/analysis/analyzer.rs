use super::prompt::{FallbackReason, SIMPLIFIED_MEANING_MARKER, build_fallback, build_prompt};
use crate::llm::InferenceClient;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of analyzing one piece of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// Prompt followed by the model's completion.
    Completed(String),
    Fallback { reason: FallbackReason, text: String },
}

impl Analysis {
    pub fn into_text(self) -> String {
        match self {
            Self::Completed(text) | Self::Fallback { text, .. } => text,
        }
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Self::Completed(_) => None,
            Self::Fallback { reason, .. } => Some(*reason),
        }
    }
}

pub struct Analyzer {
    client: Arc<dyn InferenceClient>,
}

impl Analyzer {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self { client }
    }

    /// Analyzes already-trimmed, non-empty `text`. Never fails: remote
    /// errors and unusable completions turn into a fallback analysis.
    pub async fn analyze(&self, text: &str) -> Analysis {
        let prompt = build_prompt(text);

        match self.client.generate(&prompt).await {
            Ok(completion) => {
                let analyzed = format!("{prompt}{completion}");
                if completion.is_empty() || !analyzed.contains(SIMPLIFIED_MEANING_MARKER) {
                    warn!("Inference endpoint returned an unusable completion, using fallback");
                    return fallback(text, FallbackReason::UnusableCompletion);
                }
                debug!("Analysis completed with {} completion chars", completion.chars().count());
                Analysis::Completed(analyzed)
            }
            Err(e) => {
                warn!(error = %e, "Inference request failed, using fallback");
                fallback(text, FallbackReason::RequestFailed)
            }
        }
    }
}

fn fallback(text: &str, reason: FallbackReason) -> Analysis {
    Analysis::Fallback {
        reason,
        text: build_fallback(text, reason),
    }
}
