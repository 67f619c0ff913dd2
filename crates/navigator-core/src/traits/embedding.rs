// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedding adapter trait for vector embedding generation.

use async_trait::async_trait;

use crate::error::NavigatorError;
use crate::traits::adapter::PluginAdapter;

/// Adapter for generating vector embeddings from text.
///
/// Embedding adapters power semantic memory recall by converting content
/// into vector representations. One attempt per call.
#[async_trait]
pub trait EmbeddingAdapter: PluginAdapter {
    /// Generates an embedding vector for the given text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, NavigatorError>;
}
