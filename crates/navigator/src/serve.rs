// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wires the stores, provider, tools, and engine together and runs the
//! gateway.

use std::sync::Arc;

use tracing::info;

use navigator_config::NavigatorConfig;
use navigator_core::NavigatorError;
use navigator_engine::NavigatorEngine;
use navigator_memory::{MemoryService, MemoryStore, ProjectStore};
use navigator_openai::OpenAiClient;

pub async fn run(config: NavigatorConfig) -> Result<(), NavigatorError> {
    let conn = navigator_memory::open(&config.storage.database_path).await?;
    info!(path = %config.storage.database_path, "database ready");

    let client = Arc::new(OpenAiClient::new(&config.openai)?);
    let store = Arc::new(MemoryStore::new(conn.clone()));
    let memory = Arc::new(MemoryService::new(
        store,
        client.clone(),
        config.memory.clone(),
    ));
    let projects = Arc::new(ProjectStore::new(conn));
    let tools = Arc::new(navigator_tools::default_registry());

    let persona = navigator_config::resolve_persona(&config.agent)?;
    let engine = Arc::new(NavigatorEngine::new(
        client.clone(),
        memory,
        projects,
        tools,
        config.openai.model.clone(),
        persona,
    ));

    navigator_gateway::start_server(&config.gateway, engine).await
}
