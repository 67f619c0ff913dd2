// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion adapter for deterministic testing.
//!
//! `MockCompletion` implements `CompletionAdapter` with pre-configured
//! completions, enabling fast, CI-runnable tests without external API calls.
//! Every request is recorded so tests can assert call counts, attached tool
//! catalogs, and transcript contents.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use navigator_core::traits::adapter::PluginAdapter;
use navigator_core::traits::completion::CompletionAdapter;
use navigator_core::types::{AdapterType, Completion, CompletionRequest, HealthStatus};
use navigator_core::NavigatorError;

/// A mock completion provider that returns pre-configured completions.
///
/// Completions are popped from a FIFO queue. When the queue is empty, a
/// default plain-text completion is returned. `Err` entries in the queue
/// simulate provider failures.
pub struct MockCompletion {
    queue: Arc<Mutex<VecDeque<Result<Completion, NavigatorError>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletion {
    /// Create a new mock with an empty queue.
    pub fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock pre-loaded with the given completions.
    pub fn with_completions(completions: Vec<Completion>) -> Self {
        Self {
            queue: Arc::new(Mutex::new(completions.into_iter().map(Ok).collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful completion.
    pub async fn push(&self, completion: Completion) {
        self.queue.lock().await.push_back(Ok(completion));
    }

    /// Queue a plain-text completion with no tool calls.
    pub async fn push_text(&self, content: impl Into<String>) {
        self.push(Completion {
            content: content.into(),
            tool_calls: Vec::new(),
        })
        .await;
    }

    /// Queue a provider failure.
    pub async fn push_error(&self, message: impl Into<String>) {
        self.queue
            .lock()
            .await
            .push_back(Err(NavigatorError::model(message.into())));
    }

    /// Number of completion calls made so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Snapshot of every request received, in order.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockCompletion {
    fn name(&self) -> &str {
        "mock-completion"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, NavigatorError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), NavigatorError> {
        Ok(())
    }
}

#[async_trait]
impl CompletionAdapter for MockCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, NavigatorError> {
        self.requests.lock().await.push(request);
        self.queue
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Ok(Completion {
                    content: "mock completion".to_string(),
                    tool_calls: Vec::new(),
                })
            })
    }
}
