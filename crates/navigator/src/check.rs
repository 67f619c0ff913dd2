// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `navigator check`: verify configuration, storage, and adapter health
//! without starting the server.

use navigator_config::NavigatorConfig;
use navigator_core::types::HealthStatus;
use navigator_core::{NavigatorError, PluginAdapter};
use navigator_openai::OpenAiClient;

pub async fn run(config: NavigatorConfig) -> Result<(), NavigatorError> {
    println!("agent.name          = {}", config.agent.name);
    println!("openai.model        = {}", config.openai.model);
    println!("openai.embedding    = {}", config.openai.embedding_model);
    println!("memory.threshold    = {}", config.memory.recall_threshold);
    println!("memory.limit        = {}", config.memory.recall_limit);
    println!("storage.database    = {}", config.storage.database_path);
    println!(
        "gateway             = {}:{}",
        config.gateway.bind_address, config.gateway.port
    );

    // Opening the database applies pending migrations.
    navigator_memory::open(&config.storage.database_path).await?;
    println!("storage             : ok");

    let client = OpenAiClient::new(&config.openai)?;
    match client.health_check().await? {
        HealthStatus::Healthy => println!("provider ({})     : healthy", client.name()),
        HealthStatus::Degraded(reason) => {
            println!("provider ({})     : degraded ({reason})", client.name());
        }
        HealthStatus::Unhealthy(reason) => {
            println!("provider ({})     : unhealthy ({reason})", client.name());
            return Err(NavigatorError::Internal(format!(
                "provider unhealthy: {reason}"
            )));
        }
    }

    if config.openai.api_key.is_none() {
        println!("warning             : no OpenAI API key configured");
    }

    println!("check               : ok");
    Ok(())
}
