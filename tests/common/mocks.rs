use async_trait::async_trait;
use deepreader::{Error, Result, llm::InferenceClient};
use std::sync::{Arc, Mutex};

/// Mock inference client for testing
#[derive(Debug)]
pub struct MockInferenceClient {
    pub completions: Arc<Mutex<Vec<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<MockFailure>,
}

/// Failure the mock should report instead of a completion.
#[derive(Debug, Clone)]
pub enum MockFailure {
    Timeout,
    Upstream(u16, String),
    Malformed(String),
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            completions: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_completions(self, completions: Vec<&str>) -> Self {
        *self.completions.lock().unwrap() = completions.into_iter().map(String::from).collect();
        self
    }

    pub fn with_error(mut self, error: MockFailure) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(match error {
                MockFailure::Timeout => Error::Timeout { secs: 45 },
                MockFailure::Upstream(status, message) => Error::Upstream {
                    status: *status,
                    message: message.clone(),
                },
                MockFailure::Malformed(message) => Error::malformed(message.clone()),
            });
        }

        let mut completions = self.completions.lock().unwrap();
        if completions.is_empty() {
            return Err(Error::malformed("No more mock completions available"));
        }

        Ok(completions.remove(0))
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
