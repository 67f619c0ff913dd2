// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI Chat Completions and Embeddings API wire types.

use serde::{Deserialize, Serialize};

// --- Chat request types ---

/// A request to the Chat Completions API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,

    /// Conversation messages.
    pub messages: Vec<ApiMessage>,

    /// Tool definitions available for the model to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ApiTool>>,

    /// Tool choice policy. Set to "auto" whenever tools are attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
}

/// A single message in the OpenAI conversation format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Role: "system", "user", "assistant", or "tool".
    pub role: String,

    /// Text content. Null on assistant messages that only request tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tool invocations requested by an assistant message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ApiToolCall>>,

    /// Id of the originating call, on "tool" role messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

/// A tool definition wrapped in OpenAI's "function" envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTool {
    /// Always "function".
    #[serde(rename = "type")]
    pub tool_type: String,

    /// The function descriptor.
    pub function: ApiFunction,
}

/// A function descriptor within a tool definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFunction {
    pub name: String,
    pub description: String,
    /// JSON Schema for the function's arguments.
    pub parameters: serde_json::Value,
}

/// A tool invocation in an assistant message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiToolCall {
    pub id: String,
    /// Always "function".
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: ApiFunctionCall,
}

/// The function name and raw JSON arguments of a tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFunctionCall {
    pub name: String,
    /// Raw JSON string exactly as emitted by the model.
    pub arguments: String,
}

// --- Chat response types ---

/// A full response from the Chat Completions API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub choices: Vec<ApiChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiChoice {
    pub message: ApiResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The assistant message within a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ApiToolCall>>,
}

// --- Embeddings types ---

/// A request to the Embeddings API.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest {
    pub model: String,
    pub input: String,
}

/// A response from the Embeddings API.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
}

/// One embedding vector in an embeddings response.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingData {
    pub embedding: Vec<f32>,
}

// --- Error types ---

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// The error payload within the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}
