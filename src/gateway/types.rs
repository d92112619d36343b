use serde::Serialize;
use serde_json::Value;

pub const EMPTY_RESPONSE_ERROR: &str = "Empty response from model";
pub const PARSE_ERROR_PREFIX: &str = "Error parsing model response JSON: ";

/// Outcome of one gateway call, serialized to the client as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResult {
    Success {
        model_response: Value,
        original_content: String,
    },
    Failure {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_response: Option<String>,
    },
}

impl ApiResult {
    pub fn success(model_response: Value, original_content: impl Into<String>) -> Self {
        Self::Success {
            model_response,
            original_content: original_content.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            raw_response: None,
        }
    }

    pub fn parse_failure(error: &serde_json::Error, raw_response: impl Into<String>) -> Self {
        Self::Failure {
            error: format!("{}{}", PARSE_ERROR_PREFIX, error),
            raw_response: Some(raw_response.into()),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { error, .. } => Some(error),
            Self::Success { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Failure { raw_response: Some(_), .. } => "decode_error",
            Self::Failure { error, .. } if error == EMPTY_RESPONSE_ERROR => "empty_response",
            Self::Failure { .. } => "transport_error",
        }
    }
}
