// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic embedding adapter for tests.
//!
//! `MockEmbedder` folds the input bytes into a fixed-dimension vector and
//! L2-normalizes it, so identical text always embeds to the same unit
//! vector and cosine similarity with itself is 1.0. No external calls.

use async_trait::async_trait;

use navigator_core::traits::adapter::PluginAdapter;
use navigator_core::traits::embedding::EmbeddingAdapter;
use navigator_core::types::{AdapterType, HealthStatus};
use navigator_core::NavigatorError;

const DIMENSIONS: usize = 16;

/// A deterministic, offline embedding adapter.
pub struct MockEmbedder {
    fail: bool,
}

impl MockEmbedder {
    /// Create an embedder that succeeds deterministically.
    pub fn new() -> Self {
        Self { fail: false }
    }

    /// Create an embedder whose every call fails, for degraded-path tests.
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold text bytes into a fixed-dimension vector and L2-normalize.
fn embed_text(text: &str) -> Vec<f32> {
    let mut vec = vec![0.0_f32; DIMENSIONS];
    for (i, byte) in text.bytes().enumerate() {
        vec[i % DIMENSIONS] += f32::from(byte) / 255.0;
    }
    // Empty input still embeds to a valid unit vector.
    if vec.iter().all(|v| *v == 0.0) {
        vec[0] = 1.0;
        return vec;
    }
    let norm: f32 = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    vec.iter().map(|v| v / norm).collect()
}

#[async_trait]
impl PluginAdapter for MockEmbedder {
    fn name(&self) -> &str {
        "mock-embedder"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Embedding
    }

    async fn health_check(&self) -> Result<HealthStatus, NavigatorError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), NavigatorError> {
        Ok(())
    }
}

#[async_trait]
impl EmbeddingAdapter for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, NavigatorError> {
        if self.fail {
            return Err(NavigatorError::storage("mock embedding failure"));
        }
        Ok(embed_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identical_text_embeds_identically() {
        let embedder = MockEmbedder::new();
        let a = embedder.embed("the same text").await.unwrap();
        let b = embedder.embed("the same text").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn embeddings_are_unit_vectors() {
        let embedder = MockEmbedder::new();
        for text in ["short", "a much longer piece of text with many bytes", ""] {
            let v = embedder.embed(text).await.unwrap();
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5, "norm {norm} for {text:?}");
        }
    }

    #[tokio::test]
    async fn different_text_usually_differs() {
        let embedder = MockEmbedder::new();
        let a = embedder.embed("alpha").await.unwrap();
        let b = embedder.embed("omega").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn failing_mode_fails() {
        assert!(MockEmbedder::failing().embed("x").await.is_err());
    }
}
