//! Host plugin contract for agentbrowser.
//!
//! A host chat-agent runtime loads plugins that contribute callable tools
//! and system prompt hooks.  This crate defines that contract:
//!
//! - [`traits`] -- the [`Plugin`] and [`SessionClient`] traits, tool and
//!   prompt types.
//! - [`message`] -- the silent message model pushed into sessions.
//! - [`session`] -- in-memory and HTTP session clients.
//! - [`error`] -- host error types.

pub mod error;
pub mod message;
pub mod session;
pub mod traits;

pub use error::{HostError, Result};
pub use message::{MessagePart, OutboundMessage};
pub use session::{DEFAULT_HOST_URL, HttpSessionClient, InMemorySessionClient, RecordedMessage};
pub use traits::{
    Plugin, PluginContext, SessionClient, SystemPromptInput, SystemPromptOutput, ToolContext,
    ToolDefinition,
};
