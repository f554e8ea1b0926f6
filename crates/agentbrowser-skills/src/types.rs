//! Skill type definitions.
//!
//! A skill is a named bundle of instructional text that teaches the agent
//! how to drive an external CLI.  Descriptors are compiled-in `static`
//! values and never change for the lifetime of the process.

use serde::Serialize;

/// Header prefix of the message injected when a skill is loaded.
pub const LOADED_HEADER: &str = "Skill Loaded: ";

/// An immutable skill definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillDescriptor {
    /// Unique skill name (e.g. `agent-browser`).
    pub name: &'static str,

    /// External CLI the agent runs through bash once the skill is loaded.
    pub command: &'static str,

    /// Name of the callable action that loads this skill.
    pub tool_name: &'static str,

    /// Short capability summary advertised in the system prompt.
    pub description: &'static str,

    /// Description declared for the callable action.
    pub tool_description: &'static str,

    /// Full instructional text injected into the conversation.
    pub template: &'static str,

    /// Optional quick workflow advertised alongside the description.
    pub quick_start: Option<&'static str>,
}

impl SkillDescriptor {
    /// Text of the silent message injected on activation: a header line,
    /// a blank line, then the template.
    pub fn loaded_message(&self) -> String {
        format!("{LOADED_HEADER}{}\n\n{}", self.name, self.template)
    }

    /// Confirmation returned to the caller after activation.
    pub fn confirmation(&self) -> String {
        format!(
            "Skill \"{}\" loaded. Use bash to execute {} commands.",
            self.name, self.command
        )
    }

    /// This skill's section of the `<available-skills>` prompt block.
    pub fn advertisement(&self, include_quick_start: bool) -> String {
        let mut section = format!(
            "## {}\n{}\n\nTo use: Call the `{}` tool, then use bash to execute {} commands.\n",
            self.name, self.description, self.tool_name, self.command
        );

        if let Some(quick_start) = self.quick_start.filter(|_| include_quick_start) {
            section.push_str("\nQuick workflow:\n");
            section.push_str(quick_start);
            section.push('\n');
        }

        section
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: SkillDescriptor = SkillDescriptor {
        name: "demo",
        command: "demo-cli",
        tool_name: "load_demo_skill",
        description: "Demo skill.",
        tool_description: "Load the demo skill.",
        template: "# Demo\n\nRun demo-cli.",
        quick_start: Some("1. demo-cli run"),
    };

    #[test]
    fn loaded_message_starts_with_header() {
        let text = SAMPLE.loaded_message();
        assert!(text.starts_with("Skill Loaded: demo\n\n"));
        assert!(text.ends_with(SAMPLE.template));
    }

    #[test]
    fn confirmation_names_skill_and_command() {
        assert_eq!(
            SAMPLE.confirmation(),
            "Skill \"demo\" loaded. Use bash to execute demo-cli commands."
        );
    }

    #[test]
    fn advertisement_with_quick_start() {
        let section = SAMPLE.advertisement(true);
        assert!(section.starts_with("## demo\nDemo skill.\n"));
        assert!(section.contains("`load_demo_skill`"));
        assert!(section.contains("Quick workflow:\n1. demo-cli run\n"));
    }

    #[test]
    fn advertisement_without_quick_start() {
        let section = SAMPLE.advertisement(false);
        assert!(!section.contains("Quick workflow"));

        let bare = SkillDescriptor {
            quick_start: None,
            ..SAMPLE
        };
        assert_eq!(bare.advertisement(true), section);
    }
}
