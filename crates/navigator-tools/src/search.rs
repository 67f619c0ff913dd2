// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Web search tool: stubbed search results for robotics references.

use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Value, json};

use navigator_core::types::ToolSchema;
use navigator_core::NavigatorError;

use crate::registry::Tool;

const DEFAULT_LIMIT: usize = 3;
const MAX_LIMIT: usize = 10;

/// Performs a lightweight (stubbed) web search.
pub struct WebSearch;

#[async_trait]
impl Tool for WebSearch {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "web_search".to_string(),
            description: "Perform a lightweight web search to gather relevant references for robotics topics, libraries, or datasheets.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Search query or keywords"},
                    "limit": {"type": "number", "description": "Number of results to return"}
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Value) -> Result<Value, NavigatorError> {
        // Missing or non-string query coerces to empty rather than failing.
        let query = args.get("query").and_then(Value::as_str).unwrap_or("");
        // The limit comes from model-emitted JSON; cap it before allocating.
        let limit = args
            .get("limit")
            .and_then(Value::as_u64)
            .map_or(DEFAULT_LIMIT, |n| (n as usize).min(MAX_LIMIT));

        let encoded_query = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
        let results: Vec<Value> = (0..limit)
            .map(|idx| {
                json!({
                    "title": format!("Result {} for {}", idx + 1, query),
                    "url": format!(
                        "https://example.com/search?q={}&n={}",
                        encoded_query,
                        idx + 1
                    ),
                    "snippet": "Stubbed search result. Replace with real search integration."
                })
            })
            .collect();

        Ok(json!({"query": query, "results": results}))
    }
}
