// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simulator state tool: a stubbed snapshot of the robot simulator.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Value, json};

use navigator_core::types::ToolSchema;
use navigator_core::NavigatorError;

use crate::registry::Tool;

/// Returns the latest simulator state for debugging.
///
/// The state is stubbed. `detail_level: "full"` adds a telemetry trace;
/// any other value (or none) yields the summary shape.
pub struct GetSimulatorState;

#[async_trait]
impl Tool for GetSimulatorState {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_simulator_state".to_string(),
            description: "Retrieve the latest simulator state including robot pose, sensor readings, and controller status for debugging.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "detail_level": {
                        "type": "string",
                        "description": "Optional level of detail: summary or full"
                    }
                }
            }),
        }
    }

    async fn call(&self, args: Value) -> Result<Value, NavigatorError> {
        // Non-string detail_level coerces to the summary default.
        let detail = args
            .get("detail_level")
            .and_then(Value::as_str)
            .unwrap_or("summary");

        let mut controller = json!({
            "mode": "line_follow",
            "target_speed_mps": 0.4,
            "pid": {"kp": 0.9, "ki": 0.03, "kd": 0.08}
        });

        if detail == "full" {
            let telemetry: Vec<Value> = (0..10)
                .map(|idx| {
                    json!({
                        "t": f64::from(idx) * 0.02,
                        "error": (f64::from(idx) / 2.0).sin() * 0.05,
                        "control": 0.2 + f64::from(idx) * 0.01
                    })
                })
                .collect();
            controller["telemetry"] = Value::Array(telemetry);
        }

        Ok(json!({
            "timestamp": Utc::now().to_rfc3339(),
            "pose": {"x": 1.2, "y": 0.5, "heading_deg": 45},
            "sensors": {
                "lineSensors": [0.12, 0.08, 0.15, 0.1],
                "imu": {"roll": 0.02, "pitch": -0.01, "yaw_rate": 0.12},
                "distance": {"front": 0.35, "left": 0.42, "right": 0.4}
            },
            "controller": controller,
            "note": "This is a stubbed simulator state. Replace with real simulator integration as needed."
        }))
    }
}
