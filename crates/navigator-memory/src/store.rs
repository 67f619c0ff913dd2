// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed stores for memory fragments and projects.

use async_trait::async_trait;
use navigator_core::{NavigatorError, PlanStore, PlanStep, ProjectContext};
use tokio_rusqlite::Connection;

use crate::database::storage_err;
use crate::types::{MemoryRecord, blob_to_vec, vec_to_blob};

/// Persistent store for memory fragments.
///
/// Stores embeddings as little-endian f32 BLOBs. Fetches are project-scoped
/// and newest-first, which downstream ranking relies on for tie-breaking.
pub struct MemoryStore {
    conn: Connection,
}

impl MemoryStore {
    /// Creates a new MemoryStore wrapping an existing connection.
    ///
    /// The connection must already have migrations applied
    /// (see [`crate::database::open`]).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Insert a memory fragment.
    pub async fn insert(&self, record: &MemoryRecord) -> Result<(), NavigatorError> {
        let id = record.id.clone();
        let user_id = record.user_id.clone();
        let project_id = record.project_id.clone();
        let content = record.content.clone();
        let embedding_blob = vec_to_blob(&record.embedding);
        let created_at = record.created_at.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO ai_memory (id, user_id, project_id, content, embedding, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    rusqlite::params![id, user_id, project_id, content, embedding_blob, created_at],
                )?;
                Ok(())
            })
            .await
            .map_err(storage_err)
    }

    /// Fetch all fragments for a project, newest first.
    ///
    /// The rowid tie-break keeps insertion order deterministic when two
    /// fragments share a timestamp.
    pub async fn fetch_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<MemoryRecord>, NavigatorError> {
        let project_id = project_id.to_string();
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, project_id, content, embedding, created_at FROM ai_memory WHERE project_id = ?1 ORDER BY created_at DESC, rowid DESC",
                )?;
                let records = stmt
                    .query_map(rusqlite::params![project_id], |row| {
                        let embedding_blob: Vec<u8> = row.get(4)?;
                        Ok(MemoryRecord {
                            id: row.get(0)?,
                            user_id: row.get(1)?,
                            project_id: row.get(2)?,
                            content: row.get(3)?,
                            embedding: blob_to_vec(&embedding_blob),
                            created_at: row.get(5)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(records)
            })
            .await
            .map_err(storage_err)
    }
}

/// Persistent store for projects and their plans.
///
/// The plan is stored as a JSON column; a row with a malformed or NULL plan
/// still loads, with an empty plan.
pub struct ProjectStore {
    conn: Connection,
}

impl ProjectStore {
    /// Creates a new ProjectStore wrapping an existing connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Insert or replace a project row.
    pub async fn put(&self, project: &ProjectContext) -> Result<(), NavigatorError> {
        let id = project.id.clone();
        let title = project.title.clone();
        let description = project.description.clone();
        let plan = serde_json::to_string(&project.plan)
            .map_err(|e| NavigatorError::Internal(format!("plan serialization failed: {e}")))?;

        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO projects (id, title, description, plan) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET title = excluded.title, description = excluded.description, plan = excluded.plan, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                    rusqlite::params![id, title, description, plan],
                )?;
                Ok(())
            })
            .await
            .map_err(storage_err)
    }

    async fn load_project(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectContext>, NavigatorError> {
        let project_id = project_id.to_string();
        self.conn
            .call(move |conn| {
                use rusqlite::OptionalExtension;

                let mut stmt = conn
                    .prepare("SELECT id, title, description, plan FROM projects WHERE id = ?1")?;
                let row = stmt
                    .query_row(rusqlite::params![project_id], |row| {
                        let plan_json: Option<String> = row.get(3)?;
                        Ok(ProjectContext {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            description: row.get(2)?,
                            plan: plan_json
                                .as_deref()
                                .and_then(|p| serde_json::from_str::<Vec<PlanStep>>(p).ok())
                                .unwrap_or_default(),
                        })
                    })
                    .optional()?;
                Ok(row)
            })
            .await
            .map_err(storage_err)
    }
}

#[async_trait]
impl PlanStore for ProjectStore {
    async fn load(&self, project_id: &str) -> Result<Option<ProjectContext>, NavigatorError> {
        self.load_project(project_id).await
    }
}
