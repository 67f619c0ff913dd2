// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenAI Chat Completions and Embeddings APIs.
//!
//! Every call makes exactly one attempt. Failures surface to the caller,
//! who owns the decision to fail the request or degrade.

use std::time::Duration;

use navigator_config::OpenAiConfig;
use navigator_core::NavigatorError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, EmbeddingRequest,
    EmbeddingResponse,
};

/// HTTP client for OpenAI API communication.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    embedding_model: String,
    has_key: bool,
}

impl OpenAiClient {
    /// Creates a new OpenAI API client from config.
    ///
    /// A missing API key is tolerated here (the process can still serve
    /// health checks and fail fast per request) but logged loudly.
    pub fn new(config: &OpenAiConfig) -> Result<Self, NavigatorError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let has_key = match &config.api_key {
            Some(key) => {
                let value = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|e| {
                    NavigatorError::Config(format!("invalid API key header value: {e}"))
                })?;
                headers.insert("authorization", value);
                true
            }
            None => {
                warn!("no OpenAI API key configured; completion and embedding calls will fail");
                false
            }
        };

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NavigatorError::Model {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            embedding_model: config.embedding_model.clone(),
            has_key,
        })
    }

    /// Returns the configured chat model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the configured embedding model identifier.
    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    fn require_key(&self) -> Result<(), NavigatorError> {
        if self.has_key {
            Ok(())
        } else {
            Err(NavigatorError::model("OpenAI API key is not configured"))
        }
    }

    /// Sends a chat completion request. One attempt, no retry.
    pub async fn chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, NavigatorError> {
        self.require_key()?;
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| NavigatorError::Model {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "chat completion response received");

        if !status.is_success() {
            return Err(NavigatorError::model(api_error_message(status, response).await));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| NavigatorError::Model {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Sends an embedding request. One attempt, no retry.
    pub async fn embeddings(
        &self,
        request: &EmbeddingRequest,
    ) -> Result<EmbeddingResponse, NavigatorError> {
        self.require_key()?;
        let url = format!("{}/embeddings", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(NavigatorError::storage)?;

        let status = response.status();
        debug!(status = %status, "embedding response received");

        // Embedding failures live in the storage taxonomy: callers treat
        // them like any other memory-layer fault and degrade.
        if !status.is_success() {
            return Err(NavigatorError::storage(
                api_error_message(status, response).await,
            ));
        }

        response
            .json::<EmbeddingResponse>()
            .await
            .map_err(NavigatorError::storage)
    }
}

/// Render a non-2xx response as a message, using the API's own error body
/// when it carries one.
async fn api_error_message(status: reqwest::StatusCode, response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
        format!(
            "OpenAI API error ({}): {}",
            api_err.error.error_type.as_deref().unwrap_or("unknown"),
            api_err.error.message
        )
    } else {
        format!("API returned {status}: {body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiMessage;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> OpenAiClient {
        OpenAiClient::new(&OpenAiConfig {
            api_key: Some("test-api-key".into()),
            base_url: base_url.to_string(),
            ..OpenAiConfig::default()
        })
        .unwrap()
    }

    fn test_request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "gpt-4o-mini".into(),
            messages: vec![ApiMessage {
                role: "user".into(),
                content: Some("Hello".into()),
                tool_calls: None,
                tool_call_id: None,
            }],
            tools: None,
            tool_choice: None,
        }
    }

    fn chat_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-test",
            "choices": [{
                "message": {"content": content},
                "finish_reason": "stop"
            }]
        })
    }

    #[tokio::test]
    async fn chat_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("Hi there!")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.chat(&test_request()).await.unwrap();
        assert_eq!(result.choices[0].message.content.as_deref(), Some("Hi there!"));
    }

    #[tokio::test]
    async fn chat_makes_exactly_one_attempt_on_error() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({
            "error": {"message": "Rate limited", "type": "rate_limit_error"}
        });
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(&error_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.chat(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("rate_limit_error"), "got: {err}");
    }

    #[tokio::test]
    async fn chat_fails_on_400_with_api_message() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({
            "error": {"message": "Bad model", "type": "invalid_request_error"}
        });
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.chat(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("Bad model"), "got: {err}");
    }

    #[tokio::test]
    async fn embeddings_success() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "data": [{"embedding": [0.1, 0.2, 0.3]}]
        });
        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client
            .embeddings(&EmbeddingRequest {
                model: "text-embedding-3-small".into(),
                input: "hello".into(),
            })
            .await
            .unwrap();
        assert_eq!(result.data[0].embedding, vec![0.1, 0.2, 0.3]);
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = OpenAiClient::new(&OpenAiConfig {
            api_key: None,
            base_url: "http://127.0.0.1:1".into(),
            ..OpenAiConfig::default()
        })
        .unwrap();
        let err = client.chat(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("API key"), "got: {err}");
    }
}
