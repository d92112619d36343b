use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use lead_responder::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    gateway::{GatewaySettings, ModelGateway},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            api_key: "test-api-key".to_string(),
            ..LlmConfig::default()
        },
    }
}

pub fn create_test_app(mock: Arc<MockLlmClient>) -> Router {
    create_test_app_with_settings(mock, GatewaySettings::default())
}

pub fn create_test_app_with_settings(mock: Arc<MockLlmClient>, settings: GatewaySettings) -> Router {
    let gateway = ModelGateway::new(mock, settings);
    server::router(AppState::new(gateway))
}

pub fn post_generate(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:1234"
  api_key: "file-api-key"
  model: "gemini-1.5-pro"
  request_timeout_secs: 30
  strict_empty_response: false
  seed_history_with_message: false
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
