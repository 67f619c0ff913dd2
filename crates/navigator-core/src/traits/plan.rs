// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plan store trait: project identity and stored plan lookup.

use async_trait::async_trait;

use crate::error::NavigatorError;
use crate::types::ProjectContext;

/// Read access to stored projects and their plans.
///
/// `Ok(None)` means the project has no stored record; callers fall back to
/// a default context rather than failing the request.
#[async_trait]
pub trait PlanStore: Send + Sync + 'static {
    /// Loads the project context for the given project id, if one exists.
    async fn load(&self, project_id: &str) -> Result<Option<ProjectContext>, NavigatorError>;
}
