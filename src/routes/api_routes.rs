use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::errors::AppError;
use crate::models::{ChatbotReply, ChatbotRequest, HealthStatus};
use crate::service::stub_service::StubService;

/// POST `/chatbot` — `{"message"}` in, `{"response"}` or `{"error"}` out.
///
/// The body is parsed by hand so that a missing or non-JSON body gets the
/// same JSON error as a body without `message`.
pub async fn chatbot_handler(
    State(svc): State<StubService>,
    body: Bytes,
) -> Result<Json<ChatbotReply>, AppError> {
    let request: ChatbotRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejecting chatbot body: {e}");
        AppError::MissingMessage
    })?;

    let response = svc.reply(&request.message)?;
    Ok(Json(ChatbotReply { response }))
}

/// GET `/health`
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
