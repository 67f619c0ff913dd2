// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry with total dispatch.
//!
//! Dispatch never fails: unknown tools and handler errors collapse into a
//! structured `{"error": ...}` payload that is fed back to the model as the
//! tool result. A tool round must not be able to take down a request.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::warn;

use navigator_core::types::ToolSchema;
use navigator_core::NavigatorError;

/// A tool the model can invoke during the tool round.
#[async_trait]
pub trait Tool: Send + Sync + 'static {
    /// The schema advertised to the model.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with already-parsed arguments.
    async fn call(&self, args: Value) -> Result<Value, NavigatorError>;
}

/// Immutable registry of tools, built once at startup and shared read-only
/// across all requests.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its schema name. Replaces any previous tool
    /// with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.schema().name, tool);
    }

    /// Schemas of every registered tool, in name order.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Dispatch one tool invocation. Total: always yields a JSON payload.
    ///
    /// Unknown tool names and handler failures produce `{"error": ...}`
    /// results instead of propagating.
    pub async fn dispatch(&self, name: &str, args: Value) -> Value {
        let Some(tool) = self.tools.get(name) else {
            warn!(tool = name, "dispatch requested for unregistered tool");
            return json!({"error": format!("{name} not implemented")});
        };
        match tool.call(args).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = name, error = %e, "tool handler failed");
                json!({"error": e.to_string()})
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl Tool for Echo {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "echo".into(),
                description: "Echoes its arguments".into(),
                parameters: json!({"type": "object"}),
            }
        }

        async fn call(&self, args: Value) -> Result<Value, NavigatorError> {
            Ok(json!({"echo": args}))
        }
    }

    struct Broken;

    #[async_trait]
    impl Tool for Broken {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "broken".into(),
                description: "Always fails".into(),
                parameters: json!({"type": "object"}),
            }
        }

        async fn call(&self, _args: Value) -> Result<Value, NavigatorError> {
            Err(NavigatorError::Tool {
                message: "handler exploded".into(),
            })
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Echo));
        registry.register(Arc::new(Broken));
        registry
    }

    #[tokio::test]
    async fn dispatch_known_tool() {
        let result = registry().dispatch("echo", json!({"x": 1})).await;
        assert_eq!(result, json!({"echo": {"x": 1}}));
    }

    #[tokio::test]
    async fn unknown_tool_yields_error_payload() {
        let result = registry().dispatch("mystery", json!({})).await;
        assert_eq!(result, json!({"error": "mystery not implemented"}));
    }

    #[tokio::test]
    async fn handler_failure_collapses_to_error_payload() {
        let result = registry().dispatch("broken", json!({})).await;
        let message = result["error"].as_str().unwrap();
        assert!(message.contains("handler exploded"));
    }

    #[test]
    fn schemas_are_in_name_order() {
        let names: Vec<String> = registry().schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["broken", "echo"]);
    }
}
