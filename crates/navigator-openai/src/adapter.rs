// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait implementations translating core types to OpenAI wire types.

use async_trait::async_trait;

use navigator_core::traits::adapter::PluginAdapter;
use navigator_core::traits::completion::CompletionAdapter;
use navigator_core::traits::embedding::EmbeddingAdapter;
use navigator_core::types::{
    AdapterType, ChatMessage, ChatRole, Completion, CompletionRequest, HealthStatus,
    ToolCallRequest, ToolSchema,
};
use navigator_core::NavigatorError;

use crate::client::OpenAiClient;
use crate::types::{
    ApiFunction, ApiFunctionCall, ApiMessage, ApiTool, ApiToolCall, ChatCompletionRequest,
    EmbeddingRequest,
};

fn role_str(role: ChatRole) -> &'static str {
    match role {
        ChatRole::System => "system",
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
        ChatRole::Tool => "tool",
    }
}

fn to_api_message(msg: &ChatMessage) -> ApiMessage {
    let tool_calls = if msg.tool_calls.is_empty() {
        None
    } else {
        Some(msg.tool_calls.iter().map(to_api_tool_call).collect())
    };
    // Assistant messages that only carry tool calls have null content.
    let content = if msg.content.is_empty() && tool_calls.is_some() {
        None
    } else {
        Some(msg.content.clone())
    };
    ApiMessage {
        role: role_str(msg.role).to_string(),
        content,
        tool_calls,
        tool_call_id: msg.tool_call_id.clone(),
    }
}

fn to_api_tool_call(call: &ToolCallRequest) -> ApiToolCall {
    ApiToolCall {
        id: call.id.clone(),
        call_type: "function".to_string(),
        function: ApiFunctionCall {
            name: call.name.clone(),
            arguments: call.arguments.clone(),
        },
    }
}

fn to_api_tool(schema: &ToolSchema) -> ApiTool {
    ApiTool {
        tool_type: "function".to_string(),
        function: ApiFunction {
            name: schema.name.clone(),
            description: schema.description.clone(),
            parameters: schema.parameters.clone(),
        },
    }
}

#[async_trait]
impl PluginAdapter for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, NavigatorError> {
        // No probe request: a healthy process with no key is degraded, not down.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), NavigatorError> {
        Ok(())
    }
}

#[async_trait]
impl CompletionAdapter for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, NavigatorError> {
        let tools: Option<Vec<ApiTool>> = if request.tools.is_empty() {
            None
        } else {
            Some(request.tools.iter().map(to_api_tool).collect())
        };
        let wire = ChatCompletionRequest {
            model: request.model,
            messages: request.messages.iter().map(to_api_message).collect(),
            tool_choice: tools.as_ref().map(|_| "auto".to_string()),
            tools,
        };

        let response = self.chat(&wire).await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| NavigatorError::model("completion returned no choices"))?;

        Ok(Completion {
            content: choice.message.content.unwrap_or_default(),
            tool_calls: choice
                .message
                .tool_calls
                .unwrap_or_default()
                .into_iter()
                .map(|c| ToolCallRequest {
                    id: c.id,
                    name: c.function.name,
                    arguments: c.function.arguments,
                })
                .collect(),
        })
    }
}

#[async_trait]
impl EmbeddingAdapter for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, NavigatorError> {
        let response = self
            .embeddings(&EmbeddingRequest {
                model: self.embedding_model().to_string(),
                input: text.to_string(),
            })
            .await?;
        response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| NavigatorError::storage("embedding returned no vectors"))
    }
}
