use async_trait::async_trait;
use lead_responder::{
    Error, Result,
    llm::{
        Candidate, Content, GenerateContentRequest, GenerateContentResponse, LlmClient, MODEL_ROLE,
    },
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    pub requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    /// Returned once the queued responses run out.
    pub fallback: Option<GenerateContentResponse>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            fallback: None,
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<GenerateContentResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn always(mut self, response: GenerateContentResponse) -> Self {
        self.fallback = Some(response);
        self
    }

    pub fn always_text(self, text: &str) -> Self {
        self.always(create_text_response(text))
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            return Ok(responses.remove(0));
        }

        self.fallback
            .clone()
            .ok_or_else(|| Error::llm("No more mock responses available"))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn create_text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content::text(Some(MODEL_ROLE), text)),
            finish_reason: Some("STOP".to_string()),
        }],
        prompt_feedback: None,
    }
}

pub fn create_empty_response() -> GenerateContentResponse {
    GenerateContentResponse::default()
}

pub const LEAD_REPLY_JSON: &str = r#"{"summary":"Lead owns a 3-bed house in Oakland","question":"What price are you hoping to get for it?","status":"[\"Reviewing in Process\"]"}"#;
