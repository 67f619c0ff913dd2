// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request context assembly: persona, recalled memory, and project plan
//! rendered into the system message sequence.

use navigator_core::types::{ChatMessage, PlanStep, ProjectContext};
use navigator_memory::RecalledFragment;

/// Built-in mentor persona. Overridable via the agent config section.
pub const DEFAULT_PERSONA: &str = r#"You are "Project Navigator", an expert AI project mentor.
You understand the user, diagnose their proficiency, research their tools, create a custom plan, and guide them live while preventing mistakes.
You output ONLY valid JSON with:
{
  "mode": "",
  "message": "",
  "questions": [],
  "analysis": {},
  "plan": [],
  "guidance": {}
}

Your modes:
- assessment_questions
- assessment_feedback
- project_plan
- live_guidance

guidance contains:
- warnings[]
- best_practices[]
- meta_cognition_prompts[]
- next_priority

Think like a robotics expert with experience in Arduino, ESP32, sensors, motors, robotics logic, simulators, PID, line followers, obstacle bots, arm robots, etc."#;

/// The fixed fallback when a project has no stored plan or the load failed.
pub fn default_project(project_id: &str) -> ProjectContext {
    let step = |title: &str, description: &str| PlanStep {
        title: title.to_string(),
        description: description.to_string(),
        ..PlanStep::default()
    };
    ProjectContext {
        id: project_id.to_string(),
        title: "Untitled project".to_string(),
        description: None,
        plan: vec![
            step("Clarify goals", "Pin down what the robot must do and in what environment."),
            step("Prototype the core loop", "Get sensors, actuators, and control talking end to end."),
            step("Integrate and tune", "Combine subsystems and tune control parameters."),
            step("Test and iterate", "Exercise edge cases and refine until behavior is reliable."),
        ],
    }
}

/// Render recalled fragments as a numbered list, highest similarity first.
///
/// Returns `None` when nothing was recalled so the message is omitted
/// entirely rather than sent empty.
pub fn render_memory(fragments: &[RecalledFragment]) -> Option<String> {
    if fragments.is_empty() {
        return None;
    }
    let list = fragments
        .iter()
        .enumerate()
        .map(|(idx, f)| format!("{}. {}", idx + 1, f.text))
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("Relevant project memory (highest first):\n{list}"))
}

/// Render project identity and plan for the context.
pub fn render_project(project: &ProjectContext) -> String {
    let mut out = format!("Current project: {} (id: {})", project.title, project.id);
    if let Some(description) = &project.description {
        out.push('\n');
        out.push_str(description);
    }
    if !project.plan.is_empty() {
        out.push_str("\nProject plan:");
        for (idx, step) in project.plan.iter().enumerate() {
            out.push_str(&format!("\n{}. {}: {}", idx + 1, step.title, step.description));
        }
    }
    out
}

/// Build the full message sequence for the first completion.
///
/// Order is fixed: persona, optional recalled memory, project context,
/// then the user's utterance last.
pub fn build_messages(
    persona: &str,
    recalled: &[RecalledFragment],
    project: &ProjectContext,
    user_message: &str,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(persona)];
    if let Some(memory) = render_memory(recalled) {
        messages.push(ChatMessage::system(memory));
    }
    messages.push(ChatMessage::system(render_project(project)));
    messages.push(ChatMessage::user(user_message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_core::types::ChatRole;

    #[test]
    fn empty_recall_renders_no_memory_message() {
        assert!(render_memory(&[]).is_none());
    }

    #[test]
    fn memory_is_numbered_in_order() {
        let fragments = vec![
            RecalledFragment { text: "best".into(), score: 0.9 },
            RecalledFragment { text: "second".into(), score: 0.5 },
        ];
        let rendered = render_memory(&fragments).unwrap();
        assert!(rendered.contains("1. best"));
        assert!(rendered.contains("2. second"));
        assert!(rendered.starts_with("Relevant project memory"));
    }

    #[test]
    fn messages_end_with_the_user_utterance() {
        let project = default_project("p1");
        let messages = build_messages(DEFAULT_PERSONA, &[], &project, "help me");
        assert_eq!(messages.first().map(|m| m.role), Some(ChatRole::System));
        let last = messages.last().unwrap();
        assert_eq!(last.role, ChatRole::User);
        assert_eq!(last.content, "help me");
        // No recall: persona + project + user.
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn default_project_carries_a_plan() {
        let project = default_project("p1");
        assert_eq!(project.id, "p1");
        assert!(!project.plan.is_empty());
        let rendered = render_project(&project);
        assert!(rendered.contains("id: p1"));
        assert!(rendered.contains("Clarify goals"));
    }
}
