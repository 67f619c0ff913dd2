// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool registry and built-in tools for the Navigator mentor engine.
//!
//! Tools are registered once at startup and shared read-only. Dispatch is
//! total: it always produces a JSON payload to feed back to the model.

pub mod registry;
pub mod search;
pub mod simulator;

use std::sync::Arc;

pub use registry::{Tool, ToolRegistry};
pub use search::WebSearch;
pub use simulator::GetSimulatorState;

/// Build the default registry with the built-in tools.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GetSimulatorState));
    registry.register(Arc::new(WebSearch));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_advertises_both_tools() {
        let names: Vec<String> = default_registry()
            .schemas()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["get_simulator_state", "web_search"]);
    }
}
