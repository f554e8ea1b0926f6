//! Skill registry — the immutable set of skills a plugin can serve.
//!
//! The built-in registry is assembled once from [`builtin::ALL`] and lives
//! for the rest of the process.  Custom registries are validated on
//! construction so that skill names and tool names stay unique.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::builtin;
use crate::error::{Result, SkillError};
use crate::types::SkillDescriptor;

/// Maximum tool name length accepted by LLM tool-use APIs.
const MAX_TOOL_NAME_LEN: usize = 128;

static BUILTIN: LazyLock<SkillRegistry> = LazyLock::new(|| SkillRegistry {
    skills: builtin::ALL.to_vec(),
});

/// An ordered, read-only collection of skill descriptors.
#[derive(Debug, Clone)]
pub struct SkillRegistry {
    skills: Vec<&'static SkillDescriptor>,
}

impl SkillRegistry {
    /// The process-wide registry of compiled-in skills.
    pub fn builtin() -> &'static SkillRegistry {
        &BUILTIN
    }

    /// Build a registry from `skills`, keeping their order.
    ///
    /// Fails if a name or tool name repeats, or if a descriptor is malformed.
    pub fn new(skills: impl IntoIterator<Item = &'static SkillDescriptor>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut tool_names = HashSet::new();
        let mut collected = Vec::new();

        for skill in skills {
            validate(skill)?;

            if !names.insert(skill.name) {
                return Err(SkillError::DuplicateSkill {
                    field: "name",
                    value: skill.name.to_owned(),
                });
            }
            if !tool_names.insert(skill.tool_name) {
                return Err(SkillError::DuplicateSkill {
                    field: "tool name",
                    value: skill.tool_name.to_owned(),
                });
            }

            collected.push(skill);
        }

        Ok(Self { skills: collected })
    }

    /// Look up a skill by name.
    pub fn get(&self, name: &str) -> Option<&'static SkillDescriptor> {
        self.skills.iter().copied().find(|s| s.name == name)
    }

    /// Look up a skill by the name of its callable action.
    pub fn by_tool_name(&self, tool_name: &str) -> Option<&'static SkillDescriptor> {
        self.skills.iter().copied().find(|s| s.tool_name == tool_name)
    }

    /// Iterate over all skills in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &'static SkillDescriptor> + '_ {
        self.skills.iter().copied()
    }

    /// Names of all skills in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.skills.iter().map(|s| s.name).collect()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

fn validate(skill: &SkillDescriptor) -> Result<()> {
    let invalid = |reason: &str| SkillError::InvalidDescriptor {
        name: skill.name.to_owned(),
        reason: reason.to_owned(),
    };

    if skill.name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if skill.template.trim().is_empty() {
        return Err(invalid("template is empty"));
    }
    if !is_valid_tool_name(skill.tool_name) {
        return Err(invalid("tool name must match ^[a-zA-Z0-9_-]{1,128}$"));
    }
    Ok(())
}

/// LLM APIs require tool names to match `^[a-zA-Z0-9_-]{1,128}$`.
pub fn is_valid_tool_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_TOOL_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHA: SkillDescriptor = SkillDescriptor {
        name: "alpha",
        command: "alpha",
        tool_name: "load_alpha_skill",
        description: "Alpha.",
        tool_description: "Load alpha.",
        template: "Alpha instructions.",
        quick_start: None,
    };

    const BETA: SkillDescriptor = SkillDescriptor {
        name: "beta",
        command: "beta",
        tool_name: "load_beta_skill",
        description: "Beta.",
        tool_description: "Load beta.",
        template: "Beta instructions.",
        quick_start: None,
    };

    const ALPHA_AGAIN: SkillDescriptor = SkillDescriptor {
        tool_name: "load_alpha_again",
        ..ALPHA
    };

    const BETA_SAME_TOOL: SkillDescriptor = SkillDescriptor {
        name: "beta-two",
        tool_name: "load_alpha_skill",
        ..BETA
    };

    const BAD_TOOL: SkillDescriptor = SkillDescriptor {
        name: "bad",
        tool_name: "load bad skill",
        ..ALPHA
    };

    const EMPTY_TEMPLATE: SkillDescriptor = SkillDescriptor {
        name: "empty",
        tool_name: "load_empty",
        template: "   ",
        ..ALPHA
    };

    #[test]
    fn builtin_contains_agent_browser() {
        let registry = SkillRegistry::builtin();
        assert_eq!(registry.names(), vec!["agent-browser"]);

        let skill = registry.get("agent-browser").unwrap();
        assert_eq!(skill.tool_name, "load_agent_browser_skill");
        assert!(std::ptr::eq(
            registry.by_tool_name("load_agent_browser_skill").unwrap(),
            skill
        ));
    }

    #[test]
    fn builtin_descriptors_are_valid() {
        let registry = SkillRegistry::new(builtin::ALL.iter().copied()).unwrap();
        assert_eq!(registry.len(), SkillRegistry::builtin().len());
    }

    #[test]
    fn new_keeps_order() {
        let registry = SkillRegistry::new([&BETA, &ALPHA]).unwrap();
        assert_eq!(registry.names(), vec!["beta", "alpha"]);
        assert!(!registry.is_empty());
    }

    #[test]
    fn duplicate_name_rejected() {
        let err = SkillRegistry::new([&ALPHA, &ALPHA_AGAIN]).unwrap_err();
        assert!(matches!(err, SkillError::DuplicateSkill { field: "name", .. }));
    }

    #[test]
    fn duplicate_tool_name_rejected() {
        let err = SkillRegistry::new([&ALPHA, &BETA_SAME_TOOL]).unwrap_err();
        assert!(matches!(
            err,
            SkillError::DuplicateSkill {
                field: "tool name",
                ..
            }
        ));
    }

    #[test]
    fn malformed_descriptors_rejected() {
        assert!(matches!(
            SkillRegistry::new([&BAD_TOOL]).unwrap_err(),
            SkillError::InvalidDescriptor { .. }
        ));
        assert!(matches!(
            SkillRegistry::new([&EMPTY_TEMPLATE]).unwrap_err(),
            SkillError::InvalidDescriptor { .. }
        ));
    }

    #[test]
    fn unknown_lookups_return_none() {
        let registry = SkillRegistry::new([&ALPHA]).unwrap();
        assert!(registry.get("beta").is_none());
        assert!(registry.by_tool_name("load_beta_skill").is_none());
    }

    #[test]
    fn tool_name_rules() {
        assert!(is_valid_tool_name("load_agent_browser_skill"));
        assert!(is_valid_tool_name("a-b_C9"));
        assert!(!is_valid_tool_name(""));
        assert!(!is_valid_tool_name("has space"));
        assert!(!is_valid_tool_name(&"x".repeat(129)));
    }
}
