// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orchestration state machine for the Navigator mentor engine.
//!
//! One request flows through a fixed five-phase protocol:
//!
//! ```text
//! CollectContext -> FirstCompletion -> (ToolDispatch)? -> FinalCompletion -> Normalize
//! ```
//!
//! Every external call is attempted exactly once. The tool round is bounded
//! to a single pass: the final completion carries no tool catalog, so the
//! model cannot request tools again. After the response is computed, the
//! user and assistant turns are persisted best-effort; a save failure never
//! invalidates the already-computed response.

pub mod context;

use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{debug, warn};

use navigator_core::types::{ChatMessage, CompletionRequest, Mode, NavigatorResponse};
use navigator_core::{CompletionAdapter, NavigatorError, PlanStore, normalize};
use navigator_memory::{MemoryService, RecalledFragment};
use navigator_tools::ToolRegistry;

/// Phases of the per-request protocol. Purely diagnostic: the flow through
/// them is linear and never revisits a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    CollectContext,
    FirstCompletion,
    ToolDispatch,
    FinalCompletion,
    Normalize,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineState::CollectContext => "collect_context",
            EngineState::FirstCompletion => "first_completion",
            EngineState::ToolDispatch => "tool_dispatch",
            EngineState::FinalCompletion => "final_completion",
            EngineState::Normalize => "normalize",
        };
        f.write_str(name)
    }
}

/// An incoming mentor request, already deserialized and defaulted.
#[derive(Debug, Clone)]
pub struct NavigatorRequest {
    pub user_message: String,
    pub project_id: String,
    pub mode: Mode,
    pub user_id: String,
}

/// The computed response plus the recall debug payload.
#[derive(Debug, Clone)]
pub struct NavigatorReply {
    pub response: NavigatorResponse,
    pub recalled: Vec<RecalledFragment>,
}

/// The top-level orchestrator. Stateless across requests; every field is
/// shared read-only.
pub struct NavigatorEngine {
    provider: Arc<dyn CompletionAdapter>,
    memory: Arc<MemoryService>,
    plans: Arc<dyn PlanStore>,
    tools: Arc<ToolRegistry>,
    model: String,
    persona: String,
}

impl NavigatorEngine {
    pub fn new(
        provider: Arc<dyn CompletionAdapter>,
        memory: Arc<MemoryService>,
        plans: Arc<dyn PlanStore>,
        tools: Arc<ToolRegistry>,
        model: String,
        persona: Option<String>,
    ) -> Self {
        Self {
            provider,
            memory,
            plans,
            tools,
            model,
            persona: persona.unwrap_or_else(|| context::DEFAULT_PERSONA.to_string()),
        }
    }

    /// Handle one mentor request end to end.
    ///
    /// Fails only on validation errors or a completion failure; every other
    /// failure degrades (empty recall, default plan, error tool payloads,
    /// fallback normalization, swallowed saves).
    pub async fn handle(&self, request: NavigatorRequest) -> Result<NavigatorReply, NavigatorError> {
        if request.user_message.is_empty() || request.project_id.is_empty() {
            return Err(NavigatorError::Validation(
                "Missing userMessage or projectId".to_string(),
            ));
        }

        debug!(state = %EngineState::CollectContext, project_id = %request.project_id, "handling request");
        let (recalled, plan_result) = tokio::join!(
            self.memory.recall(&request.project_id, &request.user_message),
            self.plans.load(&request.project_id),
        );
        let project = match plan_result {
            Ok(Some(project)) => project,
            Ok(None) => context::default_project(&request.project_id),
            Err(e) => {
                warn!(error = %e, "plan load failed, using default plan");
                context::default_project(&request.project_id)
            }
        };
        let mut transcript =
            context::build_messages(&self.persona, &recalled, &project, &request.user_message);

        debug!(state = %EngineState::FirstCompletion, model = %self.model, "requesting completion");
        let first = self
            .provider
            .complete(CompletionRequest {
                model: self.model.clone(),
                messages: transcript.clone(),
                tools: self.tools.schemas(),
            })
            .await?;

        let final_content = if first.tool_calls.is_empty() {
            first.content
        } else {
            debug!(state = %EngineState::ToolDispatch, calls = first.tool_calls.len(), "dispatching tools");
            transcript.push(ChatMessage::assistant(
                first.content.clone(),
                first.tool_calls.clone(),
            ));
            for call in &first.tool_calls {
                // Unparseable arguments degrade to an empty object.
                let args: Value =
                    serde_json::from_str(&call.arguments).unwrap_or_else(|_| json!({}));
                let result = self.tools.dispatch(&call.name, args).await;
                let content = match result {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                transcript.push(ChatMessage::tool(call.id.clone(), content));
            }

            debug!(state = %EngineState::FinalCompletion, "requesting final completion");
            let second = self
                .provider
                .complete(CompletionRequest {
                    model: self.model.clone(),
                    messages: transcript,
                    tools: Vec::new(),
                })
                .await?;
            second.content
        };

        debug!(state = %EngineState::Normalize, "normalizing response");
        let response = normalize(&final_content, request.mode);

        // Best-effort persistence of both turns, in order.
        if let Err(e) = self
            .memory
            .save(&request.user_id, &request.project_id, &request.user_message)
            .await
        {
            warn!(error = %e, "failed to save user turn");
        }
        if let Err(e) = self
            .memory
            .save("assistant", &request.project_id, &response.message)
            .await
        {
            warn!(error = %e, "failed to save assistant turn");
        }

        Ok(NavigatorReply { response, recalled })
    }
}
