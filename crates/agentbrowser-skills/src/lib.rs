//! Skill registry and plugin adapter for agentbrowser.
//!
//! This crate provides:
//!
//! - **Built-in skills** — compiled-in [`SkillDescriptor`]s, currently the
//!   `agent-browser` browser automation skill.
//!
//! - **Skill registry** — the immutable, process-wide set of skills, with
//!   validation for custom registries.
//!
//! - **Skill plugin** — a [`agentbrowser_host::Plugin`] that advertises
//!   skills in the system prompt and injects a skill's template into the
//!   session when its load tool is invoked.
//!
//! - **Configuration** — which skills are enabled, prompt wording, and where
//!   the host server lives.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use agentbrowser_host::{InMemorySessionClient, Plugin, PluginContext, ToolContext};
//! use agentbrowser_skills::SkillPlugin;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(InMemorySessionClient::new());
//! client.open_session("s1").await;
//!
//! let plugin = SkillPlugin::init(PluginContext::new(client))?;
//! let reply = plugin
//!     .execute_tool("load_agent_browser_skill", serde_json::json!({}), &ToolContext::new("s1"))
//!     .await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod builtin;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use adapter::SkillPlugin;
pub use config::{HostConfig, PluginConfig};
pub use error::{Result, SkillError};
pub use registry::SkillRegistry;
pub use types::{LOADED_HEADER, SkillDescriptor};
