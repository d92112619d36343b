use super::types::{ErrorResponse, GenerateRequest, HealthResponse, MISSING_MESSAGE_ERROR};
use crate::gateway::{ApiResult, ModelGateway};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ModelGateway>,
}

impl AppState {
    pub fn new(gateway: ModelGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<ApiResult>, (StatusCode, Json<ErrorResponse>)> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected generate request body: {}", rejection.body_text());
            return Err(bad_request());
        }
    };

    let Some(message) = request.message() else {
        warn!("Rejected generate request without a message");
        return Err(bad_request());
    };

    let request_id = Uuid::new_v4();
    let span = info_span!("generate", %request_id);

    let result = async move {
        info!("Received generate request ({} bytes)", message.len());
        debug!("Message: {}", message);

        let result = state.gateway.generate(message).await;

        info!("Generate request finished: {}", result.kind());
        result
    }
    .instrument(span)
    .await;

    Ok(Json(result))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

fn bad_request() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: MISSING_MESSAGE_ERROR.to_string(),
        }),
    )
}
