// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Total projection from raw model output to the [`NavigatorResponse`]
//! contract.
//!
//! The model is asked to emit JSON but nothing enforces that it does.
//! `normalize` accepts any string and always produces a fully-populated
//! response: well-formed fields are kept, malformed or missing fields are
//! replaced with their defaults, and non-JSON output becomes the `message`
//! verbatim. The projection never fails and is idempotent over its own
//! serialized output.

use std::str::FromStr;

use serde_json::Value;

use crate::types::{Guidance, Mode, NavigatorResponse, PlanStep};

/// Projects raw model output onto the response contract.
///
/// `requested` is the mode from the incoming request; it is used when the
/// output carries no valid `mode` field.
pub fn normalize(raw: &str, requested: Mode) -> NavigatorResponse {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
        // Not JSON, or JSON but not an object: treat the whole output as
        // prose addressed to the user.
        return NavigatorResponse {
            mode: requested,
            message: raw.to_string(),
            ..NavigatorResponse::default()
        };
    };

    let mode = map
        .get("mode")
        .and_then(Value::as_str)
        .and_then(|s| Mode::from_str(s).ok())
        .unwrap_or(requested);

    let message = map
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string());

    NavigatorResponse {
        mode,
        message,
        questions: field(&map, "questions"),
        analysis: map
            .get("analysis")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        plan: field::<Vec<PlanStep>>(&map, "plan"),
        guidance: field::<Guidance>(&map, "guidance"),
    }
}

/// Deserializes one field, falling back to its default if it is absent or
/// has the wrong shape.
fn field<T>(map: &serde_json::Map<String, Value>, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    map.get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_output_is_kept() {
        let raw = r#"{
            "mode": "project_plan",
            "message": "Here is your plan.",
            "questions": [],
            "analysis": {"skill_level": "intermediate"},
            "plan": [{"title": "Wire the IMU", "description": "Connect over I2C"}],
            "guidance": {"warnings": ["Check voltage levels"], "next_priority": "IMU bring-up"}
        }"#;
        let resp = normalize(raw, Mode::LiveGuidance);
        assert_eq!(resp.mode, Mode::ProjectPlan);
        assert_eq!(resp.message, "Here is your plan.");
        assert_eq!(resp.plan.len(), 1);
        assert_eq!(resp.plan[0].title, "Wire the IMU");
        assert_eq!(resp.guidance.warnings, vec!["Check voltage levels"]);
        assert_eq!(resp.guidance.next_priority.as_deref(), Some("IMU bring-up"));
        assert_eq!(
            resp.analysis.get("skill_level").and_then(Value::as_str),
            Some("intermediate")
        );
    }

    #[test]
    fn non_json_output_becomes_message_verbatim() {
        let raw = "Sure! Let's start by testing the motors.";
        let resp = normalize(raw, Mode::LiveGuidance);
        assert_eq!(resp.mode, Mode::LiveGuidance);
        assert_eq!(resp.message, raw);
        assert!(resp.questions.is_empty());
        assert!(resp.analysis.is_empty());
        assert!(resp.plan.is_empty());
        assert_eq!(resp.guidance, Guidance::default());
    }

    #[test]
    fn non_object_json_falls_back_like_prose() {
        let resp = normalize(r#"["a","b"]"#, Mode::AssessmentQuestions);
        assert_eq!(resp.mode, Mode::AssessmentQuestions);
        assert_eq!(resp.message, r#"["a","b"]"#);
    }

    #[test]
    fn unknown_mode_string_falls_back_to_requested() {
        let resp = normalize(r#"{"mode": "chitchat", "message": "hi"}"#, Mode::ProjectPlan);
        assert_eq!(resp.mode, Mode::ProjectPlan);
        assert_eq!(resp.message, "hi");
    }

    #[test]
    fn missing_message_falls_back_to_raw_text() {
        let raw = r#"{"mode": "live_guidance"}"#;
        let resp = normalize(raw, Mode::LiveGuidance);
        assert_eq!(resp.message, raw);
    }

    #[test]
    fn wrongly_shaped_fields_fall_back_independently() {
        let raw = r#"{
            "message": "partial",
            "questions": "not a list",
            "plan": 42,
            "guidance": {"warnings": ["w"]},
            "analysis": []
        }"#;
        let resp = normalize(raw, Mode::LiveGuidance);
        assert_eq!(resp.message, "partial");
        assert!(resp.questions.is_empty());
        assert!(resp.plan.is_empty());
        assert!(resp.analysis.is_empty());
        assert_eq!(resp.guidance.warnings, vec!["w"]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            r#"{"mode":"assessment_feedback","message":"ok","questions":["q1"]}"#,
            "plain prose",
            r#"{"plan":"broken"}"#,
        ];
        for raw in inputs {
            let once = normalize(raw, Mode::LiveGuidance);
            let serialized = serde_json::to_string(&once).unwrap();
            let twice = normalize(&serialized, Mode::LiveGuidance);
            assert_eq!(once, twice, "not idempotent for input {raw}");
        }
    }

    #[test]
    fn empty_object_yields_defaults_with_raw_message() {
        let resp = normalize("{}", Mode::LiveGuidance);
        assert_eq!(resp.mode, Mode::LiveGuidance);
        assert_eq!(resp.message, "{}");
        assert!(resp.plan.is_empty());
    }
}
