//! Message submission endpoint handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::service::{MessageService, SendError};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: MessageService,
}

impl AppState {
    pub fn new(service: MessageService) -> Self {
        Self { service }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
///
/// Reports process liveness only; deliberately does not touch the
/// service or the broker connection.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Message Submission
// =============================================================================

/// Incoming JSON message submission.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub author: String,
    pub body: String,
}

/// Submission response envelope.
#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    fn published() -> Self {
        Self {
            success: true,
            message: Some("Message published successfully"),
            error: None,
        }
    }

    fn failed(reason: String) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(reason),
        }
    }
}

/// Message submission endpoint.
///
/// Delegates to the service, which validates the fields and performs
/// the single publish attempt. Validation failures map to 400, publish
/// failures to 500.
pub async fn post_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> impl IntoResponse {
    info!(
        author = %request.author,
        body_length = request.body.len(),
        "message_received"
    );

    match state.service.send_message(&request.author, &request.body).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::published())),
        Err(err @ SendError::Validation(_)) => {
            warn!(author = %request.author, error = %err, "message_rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse::failed(err.to_string())),
            )
        }
        Err(err @ SendError::Publish(_)) => {
            error!(author = %request.author, error = %err, "message_publish_failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::failed(err.to_string())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_omits_error_field() {
        let json = serde_json::to_string(&MessageResponse::published()).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_response_failure_carries_reason() {
        let json =
            serde_json::to_string(&MessageResponse::failed("author is required".to_string()))
                .unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("author is required"));
        assert!(!json.contains("message"));
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let request: MessageRequest =
            serde_json::from_str(r#"{"author":"Cartman","body":"Respect my authority!"}"#)
                .unwrap();
        assert_eq!(request.author, "Cartman");
        assert_eq!(request.body, "Respect my authority!");
    }
}
