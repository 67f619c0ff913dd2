// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memory service: embed-then-store saves and similarity recall.
//!
//! Save and recall have deliberately asymmetric failure behavior. A save
//! failure is reported to the caller, who decides whether to surface or
//! swallow it. Recall never fails: any embedding or storage error is logged
//! and collapses to an empty result, because a degraded memory must not
//! take down the conversation.

use std::sync::Arc;

use chrono::Utc;
use navigator_config::MemoryConfig;
use navigator_core::{EmbeddingAdapter, NavigatorError};
use tracing::warn;
use uuid::Uuid;

use crate::store::MemoryStore;
use crate::types::{MemoryRecord, RecalledFragment, cosine_similarity};

/// High-level memory operations over the store and an embedding adapter.
pub struct MemoryService {
    store: Arc<MemoryStore>,
    embedder: Arc<dyn EmbeddingAdapter>,
    config: MemoryConfig,
}

impl MemoryService {
    /// Creates a new memory service.
    pub fn new(
        store: Arc<MemoryStore>,
        embedder: Arc<dyn EmbeddingAdapter>,
        config: MemoryConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            config,
        }
    }

    /// Save a memory fragment, embedding it first.
    ///
    /// Blank content is rejected before any external call. An embedding
    /// failure fails the save; nothing is stored without its vector.
    pub async fn save(
        &self,
        user_id: &str,
        project_id: &str,
        content: &str,
    ) -> Result<(), NavigatorError> {
        if content.trim().is_empty() {
            return Err(NavigatorError::Validation(
                "memory content must not be empty".to_string(),
            ));
        }

        let embedding = self.embedder.embed(content).await?;
        let record = MemoryRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
            content: content.to_string(),
            embedding,
            created_at: Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        };
        self.store.insert(&record).await
    }

    /// Recall fragments relevant to `query` within a project.
    ///
    /// Scores every stored fragment by cosine similarity, keeps those at or
    /// above the configured threshold, and returns the top `recall_limit`
    /// by score. Ties rank newer fragments first.
    ///
    /// Never returns an error: failures are logged and yield an empty list.
    pub async fn recall(&self, project_id: &str, query: &str) -> Vec<RecalledFragment> {
        let query_embedding = match self.embedder.embed(query).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "memory recall: query embedding failed");
                return Vec::new();
            }
        };

        let records = match self.store.fetch_for_project(project_id).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "memory recall: fetch failed");
                return Vec::new();
            }
        };

        // Records arrive newest-first; the stable sort preserves that order
        // among equal scores.
        let mut scored: Vec<RecalledFragment> = records
            .into_iter()
            .map(|r| RecalledFragment {
                score: cosine_similarity(&query_embedding, &r.embedding),
                text: r.content,
            })
            .filter(|f| f.score >= self.config.recall_threshold)
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.config.recall_limit);
        scored
    }
}
