// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the Navigator REST API.
//!
//! The wire contract uses camelCase field names; internally everything is
//! snake_case. Validation failures map to 400 with an `{"error"}` body and
//! reach the engine before any external call is made; any other engine
//! failure maps to an undifferentiated 500.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use navigator_core::types::{Mode, NavigatorResponse};
use navigator_core::NavigatorError;
use navigator_engine::NavigatorRequest;
use navigator_memory::RecalledFragment;

use crate::server::GatewayState;

/// Request body for POST /v1/navigator.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorApiRequest {
    #[serde(default)]
    pub user_message: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    "demo-user".to_string()
}

/// Response body for POST /v1/navigator: the normalized response fields
/// plus the recall debug payload.
#[derive(Debug, Serialize)]
pub struct NavigatorApiResponse {
    #[serde(flatten)]
    pub response: NavigatorResponse,
    pub recalled_memory: Vec<RecalledFragment>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// POST /v1/navigator
pub async fn post_navigator(
    State(state): State<GatewayState>,
    Json(body): Json<NavigatorApiRequest>,
) -> Response {
    let request = NavigatorRequest {
        user_message: body.user_message,
        project_id: body.project_id,
        mode: body.mode,
        user_id: body.user_id,
    };

    match state.engine.handle(request).await {
        Ok(reply) => Json(NavigatorApiResponse {
            response: reply.response,
            recalled_memory: reply.recalled,
        })
        .into_response(),
        Err(NavigatorError::Validation(message)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
        }
        Err(e) => {
            error!(error = %e, "navigator request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Navigator failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_camel_case_with_defaults() {
        let body: NavigatorApiRequest = serde_json::from_str(
            r#"{"userMessage": "hello", "projectId": "p1", "mode": "project_plan"}"#,
        )
        .unwrap();
        assert_eq!(body.user_message, "hello");
        assert_eq!(body.project_id, "p1");
        assert_eq!(body.mode, Mode::ProjectPlan);
        assert_eq!(body.user_id, "demo-user");
    }

    #[test]
    fn absent_fields_default_to_empty_for_engine_validation() {
        let body: NavigatorApiRequest = serde_json::from_str("{}").unwrap();
        assert!(body.user_message.is_empty());
        assert!(body.project_id.is_empty());
        assert_eq!(body.mode, Mode::LiveGuidance);
    }

    #[test]
    fn response_flattens_contract_fields_beside_recall() {
        let payload = NavigatorApiResponse {
            response: NavigatorResponse {
                message: "hi".to_string(),
                ..NavigatorResponse::default()
            },
            recalled_memory: vec![RecalledFragment {
                text: "old fact".to_string(),
                score: 0.8,
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["message"], "hi");
        assert_eq!(json["mode"], "live_guidance");
        assert_eq!(json["recalled_memory"][0]["text"], "old fact");
        assert!(json.get("response").is_none(), "contract must be flattened");
    }
}
