//! CLI entry point for agentbrowser.
//!
//! The `agentbrowser` command inspects the compiled-in skills, renders what
//! the plugin contributes to a system prompt, and can load a skill into a
//! live host session over HTTP.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use agentbrowser_host::{
    HttpSessionClient, InMemorySessionClient, Plugin, PluginContext, SystemPromptInput,
    SystemPromptOutput, ToolContext,
};
use agentbrowser_skills::{PluginConfig, SkillPlugin, SkillRegistry};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// agentbrowser — teach a chat agent to drive the agent-browser CLI.
#[derive(Parser)]
#[command(
    name = "agentbrowser",
    version,
    about = "Skill plugin for agent-browser automation",
    long_about = "Advertises the agent-browser skill in the system prompt and injects its \
                  instructions into a host session on request."
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a skill's full instructional template.
    Show {
        /// Skill name. Defaults to the first enabled skill.
        #[arg(long)]
        skill: Option<String>,
    },

    /// Print the block the plugin appends to the system prompt.
    Prompt,

    /// Print the plugin's tool definitions as JSON.
    Tools,

    /// Load a skill into a live host session.
    Activate {
        /// Target session identifier.
        #[arg(long)]
        session: String,

        /// Skill name. Defaults to the first enabled skill.
        #[arg(long)]
        skill: Option<String>,

        /// Host base URL, overriding the configuration.
        #[arg(long)]
        host: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Show { skill } => cmd_show(&config, skill.as_deref()),
        Commands::Prompt => cmd_prompt(&config),
        Commands::Tools => cmd_tools(&config),
        Commands::Activate {
            session,
            skill,
            host,
        } => cmd_activate(config, &session, skill.as_deref(), host).await,
    }
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

fn cmd_show(config: &PluginConfig, skill: Option<&str>) -> Result<()> {
    let plugin = offline_plugin(config)?;
    let descriptor = select_skill(&plugin, skill)?;
    println!("{}", descriptor.template);
    Ok(())
}

fn cmd_prompt(config: &PluginConfig) -> Result<()> {
    let plugin = offline_plugin(config)?;
    let mut output = SystemPromptOutput::default();
    plugin.transform_system_prompt(&SystemPromptInput::default(), &mut output);
    for segment in &output.system {
        print!("{segment}");
    }
    Ok(())
}

fn cmd_tools(config: &PluginConfig) -> Result<()> {
    let plugin = offline_plugin(config)?;
    let json = serde_json::to_string_pretty(&plugin.tools())
        .context("failed to serialize tool definitions")?;
    println!("{json}");
    Ok(())
}

async fn cmd_activate(
    mut config: PluginConfig,
    session: &str,
    skill: Option<&str>,
    host: Option<String>,
) -> Result<()> {
    if let Some(host) = host {
        config.host.base_url = host;
    }

    let timeout = config.host.request_timeout_secs.map(Duration::from_secs);
    let client = HttpSessionClient::with_timeout(&config.host.base_url, timeout)
        .with_context(|| format!("invalid host url `{}`", config.host.base_url))?;

    let plugin = SkillPlugin::new(
        PluginContext::new(Arc::new(client)),
        SkillRegistry::builtin(),
        &config,
    )
    .context("failed to initialize skill plugin")?;

    let descriptor = select_skill(&plugin, skill)?;
    info!(
        skill = %descriptor.name,
        session_id = %session,
        host = %config.host.base_url,
        "activating skill"
    );

    let reply = plugin
        .execute_tool(
            descriptor.tool_name,
            serde_json::json!({}),
            &ToolContext::new(session),
        )
        .await
        .with_context(|| {
            format!(
                "failed to load skill `{}` into session `{session}`",
                descriptor.name
            )
        })?;

    println!("{reply}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read the optional config file, then apply environment overrides.
fn load_config(path: Option<&Path>) -> Result<PluginConfig> {
    let mut config = match path {
        Some(path) => PluginConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PluginConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

/// A plugin whose session client never leaves the process.
fn offline_plugin(config: &PluginConfig) -> Result<SkillPlugin> {
    let client = Arc::new(InMemorySessionClient::new());
    SkillPlugin::new(PluginContext::new(client), SkillRegistry::builtin(), config)
        .context("failed to initialize skill plugin")
}

/// Pick an enabled skill by name, or the first enabled one.
fn select_skill(
    plugin: &SkillPlugin,
    name: Option<&str>,
) -> Result<&'static agentbrowser_skills::SkillDescriptor> {
    match name {
        Some(name) => match plugin.skills().get(name) {
            Some(skill) => Ok(skill),
            None => bail!("skill `{name}` is not enabled"),
        },
        None => match plugin.skills().iter().next() {
            Some(skill) => Ok(skill),
            None => bail!("no skills are enabled"),
        },
    }
}

/// Initialize the tracing subscriber. Logs go to stderr.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_activate() {
        let cli = Cli::try_parse_from([
            "agentbrowser",
            "--config",
            "plugin.toml",
            "activate",
            "--session",
            "s1",
            "--host",
            "http://localhost:9000",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("plugin.toml")));
        match cli.command {
            Commands::Activate {
                session,
                skill,
                host,
            } => {
                assert_eq!(session, "s1");
                assert!(skill.is_none());
                assert_eq!(host.as_deref(), Some("http://localhost:9000"));
            }
            _ => panic!("expected activate"),
        }
    }

    #[test]
    fn activate_requires_session() {
        assert!(Cli::try_parse_from(["agentbrowser", "activate"]).is_err());
    }

    #[test]
    fn load_config_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("plugin.toml");
        std::fs::write(&path, "id = \"browser\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.id, "browser");
    }

    #[test]
    fn load_config_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&tmp.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn select_skill_defaults_to_first() {
        let plugin = offline_plugin(&PluginConfig::default()).unwrap();
        assert_eq!(select_skill(&plugin, None).unwrap().name, "agent-browser");
        assert_eq!(
            select_skill(&plugin, Some("agent-browser")).unwrap().tool_name,
            "load_agent_browser_skill"
        );
        assert!(select_skill(&plugin, Some("other")).is_err());
    }
}
