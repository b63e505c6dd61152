use super::mocks::MockInferenceClient;
use axum::Router;
use axum_test::TestServer;
use deepreader::{config::InferenceConfig, server};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const TEST_MODEL: &str = "distilgpt2";
pub const TEST_TOKEN: &str = "hf_test_token";
pub const MODEL_PATH: &str = "/models/distilgpt2";

/// Inference settings pointing at a mock endpoint
pub fn create_test_inference_config(base_uri: &str) -> InferenceConfig {
    InferenceConfig {
        api_url: format!("{}{}", base_uri, MODEL_PATH),
        api_token: Some(TEST_TOKEN.to_string()),
        ..InferenceConfig::default()
    }
}

/// Router backed by the given mock client
pub fn create_test_app(client: MockInferenceClient) -> (Router, Arc<MockInferenceClient>) {
    let client = Arc::new(client);
    let app = server::router(client.clone(), TEST_MODEL);
    (app, client)
}

pub fn create_test_server(client: MockInferenceClient) -> (TestServer, Arc<MockInferenceClient>) {
    let (app, client) = create_test_app(client);
    (TestServer::new(app).unwrap(), client)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Fallback text expected when the remote call fails
pub fn request_failed_fallback(text: &str) -> String {
    format!(
        "1. Simplified Meaning:\n{}... (API Request Failed)\n\n2. Metaphors/Symbols:\nNone\n\n3. Philosophical Themes:\nNone",
        text
    )
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

inference:
  api_url: "https://api-inference.huggingface.co/models/gpt2"
  api_token: "hf_from_file"
  timeout_secs: 30
  max_new_tokens: 250
  temperature: 0.9
  do_sample: false
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
