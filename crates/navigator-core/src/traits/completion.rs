// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion adapter trait for chat-completion providers.

use async_trait::async_trait;

use crate::error::NavigatorError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{Completion, CompletionRequest};

/// Adapter for chat-completion providers.
///
/// A request carries a full transcript and an optional tool catalog; the
/// provider returns one completion choice, possibly with tool-call requests.
/// Implementations make exactly one attempt per call. Failure handling and
/// retry policy live with the caller, not the adapter.
#[async_trait]
pub trait CompletionAdapter: PluginAdapter {
    /// Sends a completion request and returns the first choice.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, NavigatorError>;
}
