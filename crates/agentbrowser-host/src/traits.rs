//! Core plugin traits and supporting types.
//!
//! The host runtime constructs a plugin once per session from a
//! [`PluginContext`], discovers its callable tools via [`Plugin::tools`],
//! invokes them via [`Plugin::execute_tool`], and lets it extend the system
//! prompt via [`Plugin::transform_system_prompt`] while the prompt is being
//! assembled.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::OutboundMessage;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// A callable action exposed by a plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Machine-readable tool name (e.g. `load_agent_browser_skill`).
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema describing the tool's input parameters.
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// JSON Schema for a tool that takes no arguments.
    pub fn empty_parameters() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }
}

/// Per-call context the host supplies when invoking a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolContext {
    /// The session the tool was invoked from.
    pub session_id: String,
}

impl ToolContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

/// Read-only input to the system prompt hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemPromptInput {
    /// Session whose prompt is being assembled, when known.
    pub session_id: Option<String>,
    /// Model the prompt will be sent to, when known.
    pub model: Option<String>,
}

/// The in-progress system prompt. Hooks append to `system`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemPromptOutput {
    /// Ordered system prompt segments.
    pub system: Vec<String>,
}

impl SystemPromptOutput {
    /// Append one segment at the end.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.system.push(segment.into());
    }
}

// ---------------------------------------------------------------------------
// Core traits
// ---------------------------------------------------------------------------

/// Session messaging facility provided by the host.
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// Append `message` to the history of `session_id`.
    async fn send_message(&self, session_id: &str, message: OutboundMessage) -> Result<()>;
}

/// What the host hands to a plugin constructor.
#[derive(Clone)]
pub struct PluginContext {
    /// Session messaging client.
    pub client: Arc<dyn SessionClient>,
}

impl PluginContext {
    pub fn new(client: Arc<dyn SessionClient>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginContext").finish_non_exhaustive()
    }
}

/// The host plugin interface.
///
/// A plugin exposes a map of named tools and a system prompt hook.  The host
/// calls [`Plugin::transform_system_prompt`] synchronously during prompt
/// assembly, before the prompt is sent to the model.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Return the unique identifier for this plugin instance.
    fn id(&self) -> &str;

    /// Return the list of tools this plugin exposes.
    fn tools(&self) -> Vec<ToolDefinition>;

    /// Execute a named tool on behalf of the session in `ctx`.
    ///
    /// Returns the text handed back to the calling agent.
    async fn execute_tool(
        &self,
        name: &str,
        params: serde_json::Value,
        ctx: &ToolContext,
    ) -> Result<String>;

    /// Extend the system prompt being assembled.
    fn transform_system_prompt(&self, input: &SystemPromptInput, output: &mut SystemPromptOutput);
}
