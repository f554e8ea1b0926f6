//! Plugin configuration.
//!
//! Loaded once at startup from an optional TOML file, then overridden by
//! `AGENTBROWSER_*` environment variables.  Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use agentbrowser_host::DEFAULT_HOST_URL;

use crate::error::{Result, SkillError};

/// Environment variable overriding [`HostConfig::base_url`].
pub const ENV_HOST_URL: &str = "AGENTBROWSER_HOST_URL";
/// Environment variable overriding [`PluginConfig::skills`] (comma-separated).
pub const ENV_SKILLS: &str = "AGENTBROWSER_SKILLS";
/// Environment variable overriding [`PluginConfig::advertise_quick_start`].
pub const ENV_QUICK_START: &str = "AGENTBROWSER_QUICK_START";

/// Configuration for a [`SkillPlugin`](crate::SkillPlugin).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Plugin identifier reported to the host.
    pub id: String,
    /// Names of the enabled skills. Empty enables every registered skill.
    pub skills: Vec<String>,
    /// Whether the system prompt block includes each skill's quick workflow.
    pub advertise_quick_start: bool,
    /// Connection settings for a running host server.
    pub host: HostConfig,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            id: "agent-browser".to_owned(),
            skills: Vec::new(),
            advertise_quick_start: true,
            host: HostConfig::default(),
        }
    }
}

/// Where the HTTP session client delivers messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Base URL of the host server.
    pub base_url: String,
    /// Per-request timeout. Unset means no timeout.
    pub request_timeout_secs: Option<u64>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HOST_URL.to_owned(),
            request_timeout_secs: None,
        }
    }
}

impl PluginConfig {
    /// Read a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|e| SkillError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "plugin configuration loaded");
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Unparseable boolean values are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_HOST_URL).filter(|v| !v.trim().is_empty()) {
            self.host.base_url = url.trim().to_owned();
        }

        if let Some(list) = lookup(ENV_SKILLS) {
            self.skills = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();
        }

        if let Some(raw) = lookup(ENV_QUICK_START) {
            match parse_bool(&raw) {
                Some(value) => self.advertise_quick_start = value,
                None => tracing::warn!(
                    var = ENV_QUICK_START,
                    value = %raw,
                    "ignoring unparseable boolean override"
                ),
            }
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
