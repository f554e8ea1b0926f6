//! Host error types.
//!
//! Everything that crosses the host boundary surfaces through [`HostError`].
//! Plugins propagate these unchanged so the host runtime decides how to
//! report them.

/// Unified error type for the host contract and its session clients.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The session identifier is unknown to the host.
    #[error("session not found: `{session_id}`")]
    SessionNotFound { session_id: String },

    /// The session exists but no longer accepts messages.
    #[error("session `{session_id}` is closed")]
    SessionClosed { session_id: String },

    /// The host answered with a non-success status.
    #[error("host rejected request: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request never reached the host, or the response was unreadable.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured host URL could not be parsed or extended.
    #[error("invalid host url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The requested tool does not exist on this plugin.
    #[error("tool not found: `{tool_name}` on plugin `{plugin_id}`")]
    ToolNotFound {
        plugin_id: String,
        tool_name: String,
    },
}

/// Convenience alias used throughout the host crate.
pub type Result<T> = std::result::Result<T, HostError>;
