// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Navigator workspace: conversation
//! transcripts, tool descriptors, and the structured mentor response.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Conversation intent steering the model's persona and response shape.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    /// Diagnose the user's proficiency with targeted questions.
    AssessmentQuestions,
    /// Feed back on assessment answers.
    AssessmentFeedback,
    /// Produce or revise a project plan.
    ProjectPlan,
    /// Live mentoring during the build.
    #[default]
    LiveGuidance,
}

/// Role tag on a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Tool,
}

/// A tool invocation requested by the model.
///
/// `arguments` is the raw JSON string exactly as emitted; the orchestration
/// layer parses it (substituting an empty object on failure) before dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

/// A single message in the request-scoped conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Set on role=tool messages: the id of the originating tool call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// Set on assistant messages that requested tool invocations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallRequest>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
            tool_call_id: None,
            tool_calls: Vec::new(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            tool_call_id: None,
            tool_calls: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, tool_calls: Vec<ToolCallRequest>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            tool_call_id: None,
            tool_calls,
        }
    }

    /// A tool-result message tagged with the originating call id.
    pub fn tool(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Tool,
            content: content.into(),
            tool_call_id: Some(call_id.into()),
            tool_calls: Vec::new(),
        }
    }
}

/// A schema-described tool advertised to the model.
///
/// Registered once at process start; immutable and shared read-only across
/// all requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    /// JSON Schema for the tool's arguments.
    pub parameters: serde_json::Value,
}

/// A request to the completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Tool catalog for this call. Empty means no tools are attached, which
    /// is how the final completion forecloses a second tool round.
    pub tools: Vec<ToolSchema>,
}

/// One completion choice from the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    pub content: String,
    pub tool_calls: Vec<ToolCallRequest>,
}

/// One step of a project plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

/// Structured coaching payload embedded in a mentor response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub best_practices: Vec<String>,
    #[serde(default)]
    pub meta_cognition_prompts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_priority: Option<String>,
}

/// The total, defaulted mentor response contract.
///
/// Every field is always present with a default empty value regardless of
/// model output quality; see [`crate::response::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigatorResponse {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub analysis: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub plan: Vec<PlanStep>,
    #[serde(default)]
    pub guidance: Guidance,
}

/// Project identity and its stored plan, rendered into the context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectContext {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub plan: Vec<PlanStep>,
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind the [`crate::traits::PluginAdapter`] trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum AdapterType {
    Provider,
    Embedding,
    Storage,
    Tool,
}
