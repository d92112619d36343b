mod prompt;
mod types;

pub use prompt::{GENERATION_CONFIG, SYSTEM_INSTRUCTION};
pub use types::*;

use crate::{
    Result,
    config::LlmConfig,
    llm::{ChatMessage, Content, GeminiClient, GenerateContentRequest, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Behavior switches for the two observed variants of the upstream handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewaySettings {
    pub strict_empty_response: bool,
    pub seed_history_with_message: bool,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            strict_empty_response: true,
            seed_history_with_message: true,
        }
    }
}

impl From<&LlmConfig> for GatewaySettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            strict_empty_response: config.strict_empty_response,
            seed_history_with_message: config.seed_history_with_message,
        }
    }
}

pub struct ModelGateway {
    llm_client: Arc<dyn LlmClient>,
    settings: GatewaySettings,
}

impl ModelGateway {
    pub fn new(llm_client: Arc<dyn LlmClient>, settings: GatewaySettings) -> Self {
        Self {
            llm_client,
            settings,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let client = GeminiClient::new(config)?;
        info!(
            "Model gateway using {} (strict_empty_response={}, seed_history_with_message={})",
            client.model(),
            config.strict_empty_response,
            config.seed_history_with_message
        );
        Ok(Self::new(Arc::new(client), GatewaySettings::from(config)))
    }

    /// History preceding the live message. With seeding on it holds the message itself
    /// as a prior user turn.
    pub fn initial_history(&self, content: &str) -> Vec<ChatMessage> {
        if self.settings.seed_history_with_message {
            vec![ChatMessage::user(content)]
        } else {
            Vec::new()
        }
    }

    pub async fn generate(&self, content: &str) -> ApiResult {
        let history = self.initial_history(content);
        self.generate_with_history(&history, content).await
    }

    /// Sends `content` after `history` in a single request. Never fails: every error is
    /// folded into [`ApiResult::Failure`].
    pub async fn generate_with_history(&self, history: &[ChatMessage], content: &str) -> ApiResult {
        let request = build_request(history, content);

        let response = match self.llm_client.generate_content(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Model call failed: {}", e);
                return ApiResult::failure(e.to_string());
            }
        };

        if let Some(reason) = response.block_reason() {
            warn!("Model blocked the prompt: {}", reason);
        }

        let text = match response.text().filter(|t| !t.is_empty()) {
            Some(text) => text,
            None if self.settings.strict_empty_response => {
                warn!("Model returned an empty response");
                return ApiResult::failure(EMPTY_RESPONSE_ERROR);
            }
            None => {
                debug!("Model returned an empty response, parsing empty text");
                String::new()
            }
        };

        parse_reply(text, content)
    }
}

pub fn build_request(history: &[ChatMessage], content: &str) -> GenerateContentRequest {
    let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
    contents.push(Content::from(&ChatMessage::user(content)));

    GenerateContentRequest {
        system_instruction: Some(Content::text(None, SYSTEM_INSTRUCTION)),
        contents,
        generation_config: Some(GENERATION_CONFIG.clone()),
    }
}

fn parse_reply(text: String, content: &str) -> ApiResult {
    match serde_json::from_str(&text) {
        Ok(model_response) => ApiResult::success(model_response, content),
        Err(e) => {
            warn!("Model reply is not valid JSON: {}", e);
            ApiResult::parse_failure(&e, text)
        }
    }
}
