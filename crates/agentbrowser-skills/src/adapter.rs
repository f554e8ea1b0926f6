//! Skill plugin — bridges the skill registry into the host [`Plugin`] trait.
//!
//! Skills reach the agent in two ways:
//!
//! 1. **Prompt advertisement** — the system prompt hook appends one
//!    `<available-skills>` block naming each enabled skill, its short
//!    description, and the tool that loads it.
//!
//! 2. **Load tool** — each enabled skill is exposed as an argument-less tool.
//!    Invoking it pushes the full skill template into the calling session as
//!    a silent message and returns a short confirmation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use agentbrowser_host::error::{HostError, Result as HostResult};
use agentbrowser_host::{
    OutboundMessage, Plugin, PluginContext, SessionClient, SystemPromptInput, SystemPromptOutput,
    ToolContext, ToolDefinition,
};

use crate::config::PluginConfig;
use crate::error::{Result, SkillError};
use crate::registry::SkillRegistry;
use crate::types::SkillDescriptor;

/// A host plugin serving a fixed set of skills.
pub struct SkillPlugin {
    id: String,
    client: Arc<dyn SessionClient>,
    skills: SkillRegistry,
    advertise_quick_start: bool,
}

impl SkillPlugin {
    /// Construct the plugin with the built-in registry and default config.
    ///
    /// This is the entry point the host calls once per session.
    pub fn init(ctx: PluginContext) -> Result<Self> {
        Self::new(ctx, SkillRegistry::builtin(), &PluginConfig::default())
    }

    /// Construct the plugin, enabling the skills named in `config`.
    ///
    /// An empty `config.skills` enables every skill in `registry`.  Naming
    /// the same skill twice is rejected as a duplicate.
    pub fn new(
        ctx: PluginContext,
        registry: &SkillRegistry,
        config: &PluginConfig,
    ) -> Result<Self> {
        let skills = if config.skills.is_empty() {
            registry.clone()
        } else {
            let selected = config
                .skills
                .iter()
                .map(|name| {
                    registry
                        .get(name)
                        .ok_or_else(|| SkillError::NotFound(name.clone()))
                })
                .collect::<Result<Vec<_>>>()?;
            SkillRegistry::new(selected)?
        };

        tracing::info!(
            id = %config.id,
            skills = skills.len(),
            "skill plugin initialized"
        );

        Ok(Self {
            id: config.id.clone(),
            client: ctx.client,
            skills,
            advertise_quick_start: config.advertise_quick_start,
        })
    }

    /// The enabled skills, in advertisement order.
    pub fn skills(&self) -> &SkillRegistry {
        &self.skills
    }

    /// Render the `<available-skills>` block, or `None` with no skills.
    pub fn available_skills_block(&self) -> Option<String> {
        if self.skills.is_empty() {
            return None;
        }

        let mut block = String::from("\n<available-skills>\n");
        for (i, skill) in self.skills.iter().enumerate() {
            if i > 0 {
                block.push('\n');
            }
            block.push_str(&skill.advertisement(self.advertise_quick_start));
        }
        block.push_str("</available-skills>\n");
        Some(block)
    }

    /// Push `skill`'s template into `session_id` and return the confirmation.
    async fn activate(&self, skill: &SkillDescriptor, session_id: &str) -> HostResult<String> {
        tracing::debug!(skill = %skill.name, session_id = %session_id, "loading skill");

        let message = OutboundMessage::silent_text(skill.loaded_message());
        if let Err(e) = self.client.send_message(session_id, message).await {
            tracing::warn!(
                skill = %skill.name,
                session_id = %session_id,
                error = %e,
                "failed to inject skill"
            );
            return Err(e);
        }

        tracing::info!(skill = %skill.name, session_id = %session_id, "skill loaded");
        Ok(skill.confirmation())
    }
}

impl std::fmt::Debug for SkillPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillPlugin")
            .field("id", &self.id)
            .field("skills", &self.skills.names())
            .field("advertise_quick_start", &self.advertise_quick_start)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Plugin for SkillPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        self.skills
            .iter()
            .map(|skill| ToolDefinition {
                name: skill.tool_name.to_owned(),
                description: skill.tool_description.to_owned(),
                parameters: ToolDefinition::empty_parameters(),
            })
            .collect()
    }

    async fn execute_tool(
        &self,
        name: &str,
        _params: Value,
        ctx: &ToolContext,
    ) -> HostResult<String> {
        let skill = self
            .skills
            .by_tool_name(name)
            .ok_or_else(|| HostError::ToolNotFound {
                plugin_id: self.id.clone(),
                tool_name: name.to_owned(),
            })?;

        self.activate(skill, &ctx.session_id).await
    }

    fn transform_system_prompt(&self, _input: &SystemPromptInput, output: &mut SystemPromptOutput) {
        if let Some(block) = self.available_skills_block() {
            output.push(block);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use agentbrowser_host::InMemorySessionClient;
    use serde_json::json;

    const DEMO: SkillDescriptor = SkillDescriptor {
        name: "demo",
        command: "demo-cli",
        tool_name: "load_demo_skill",
        description: "Demo skill.",
        tool_description: "Load the demo skill.",
        template: "Demo instructions.",
        quick_start: None,
    };

    fn plugin_with(config: &PluginConfig) -> (SkillPlugin, Arc<InMemorySessionClient>) {
        let client = Arc::new(InMemorySessionClient::new());
        let registry = SkillRegistry::new([&crate::builtin::AGENT_BROWSER, &DEMO]).unwrap();
        let plugin = SkillPlugin::new(PluginContext::new(client.clone()), &registry, config).unwrap();
        (plugin, client)
    }

    #[test]
    fn tools_have_empty_schema() {
        let (plugin, _) = plugin_with(&PluginConfig::default());
        let tools = plugin.tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "load_agent_browser_skill");
        assert_eq!(tools[1].name, "load_demo_skill");
        for tool in &tools {
            assert_eq!(tool.parameters, json!({ "type": "object", "properties": {} }));
        }
    }

    #[test]
    fn config_selects_skills() {
        let config = PluginConfig {
            skills: vec!["demo".into()],
            ..PluginConfig::default()
        };
        let (plugin, _) = plugin_with(&config);
        assert_eq!(plugin.skills().names(), vec!["demo"]);
        assert!(plugin.skills().by_tool_name("load_agent_browser_skill").is_none());
    }

    #[test]
    fn config_naming_skill_twice_rejected() {
        let config = PluginConfig {
            skills: vec!["demo".into(), "demo".into()],
            ..PluginConfig::default()
        };
        let client = Arc::new(InMemorySessionClient::new());
        let registry = SkillRegistry::new([&crate::builtin::AGENT_BROWSER, &DEMO]).unwrap();
        let err = SkillPlugin::new(PluginContext::new(client), &registry, &config).unwrap_err();
        assert!(matches!(err, SkillError::DuplicateSkill { field: "name", .. }));
    }

    #[test]
    fn unknown_configured_skill_rejected() {
        let config = PluginConfig {
            skills: vec!["nope".into()],
            ..PluginConfig::default()
        };
        let client = Arc::new(InMemorySessionClient::new());
        let err = SkillPlugin::new(PluginContext::new(client), SkillRegistry::builtin(), &config)
            .unwrap_err();
        assert!(matches!(err, SkillError::NotFound(ref name) if name == "nope"));
    }

    #[test]
    fn block_lists_every_skill_once() {
        let (plugin, _) = plugin_with(&PluginConfig::default());
        let block = plugin.available_skills_block().unwrap();
        assert!(block.starts_with("\n<available-skills>\n## agent-browser\n"));
        assert!(block.ends_with("</available-skills>\n"));
        assert_eq!(block.matches("## demo\n").count(), 1);
        assert_eq!(block.matches("<available-skills>").count(), 1);
    }

    #[test]
    fn empty_registry_adds_nothing() {
        let client = Arc::new(InMemorySessionClient::new());
        let registry = SkillRegistry::new(Vec::new()).unwrap();
        let plugin =
            SkillPlugin::new(PluginContext::new(client), &registry, &PluginConfig::default())
                .unwrap();

        let mut output = SystemPromptOutput::default();
        plugin.transform_system_prompt(&SystemPromptInput::default(), &mut output);
        assert!(output.system.is_empty());
        assert!(plugin.tools().is_empty());
    }

    #[tokio::test]
    async fn execute_selects_skill_by_tool_name() {
        let (plugin, client) = plugin_with(&PluginConfig::default());
        client.open_session("s1").await;

        let reply = plugin
            .execute_tool("load_demo_skill", json!({}), &ToolContext::new("s1"))
            .await
            .unwrap();
        assert_eq!(reply, "Skill \"demo\" loaded. Use bash to execute demo-cli commands.");

        let log = client.messages("s1").await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].message.text(), "Skill Loaded: demo\n\nDemo instructions.");
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let (plugin, client) = plugin_with(&PluginConfig::default());
        client.open_session("s1").await;

        let err = plugin
            .execute_tool("load_missing", json!({}), &ToolContext::new("s1"))
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::ToolNotFound { .. }));
        assert!(client.messages("s1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn disabled_skill_tool_is_not_found() {
        let config = PluginConfig {
            skills: vec!["demo".into()],
            ..PluginConfig::default()
        };
        let (plugin, client) = plugin_with(&config);
        client.open_session("s1").await;

        let err = plugin
            .execute_tool("load_agent_browser_skill", json!({}), &ToolContext::new("s1"))
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::ToolNotFound { .. }));
    }
}
