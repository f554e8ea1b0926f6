//! HTTP session client for a running host server.
//!
//! Messages are delivered with `POST {base_url}/session/{id}/message` and a
//! JSON [`OutboundMessage`] body.  The client performs exactly one request
//! per call: no retries, and no timeout unless one is configured.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::error::{HostError, Result};
use crate::message::OutboundMessage;
use crate::traits::SessionClient;

/// Default base URL of a local host server.
pub const DEFAULT_HOST_URL: &str = "http://127.0.0.1:4096";

/// A [`SessionClient`] that talks to the host over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSessionClient {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpSessionClient {
    /// Create a client for the host at `base_url` without a request timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client with an optional per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(HostError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("agentbrowser/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            http: builder.build()?,
        })
    }

    /// Build the message endpoint for a session.
    ///
    /// The session id is pushed as a single percent-encoded path segment.
    /// Ids that cannot form one segment (`""`, `"."`, `".."`) name no
    /// session.
    pub fn message_url(&self, session_id: &str) -> Result<Url> {
        if matches!(session_id, "" | "." | "..") {
            return Err(HostError::SessionNotFound {
                session_id: session_id.to_owned(),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HostError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["session", session_id, "message"]);
        Ok(url)
    }
}

#[async_trait]
impl SessionClient for HttpSessionClient {
    async fn send_message(&self, session_id: &str, message: OutboundMessage) -> Result<()> {
        let url = self.message_url(session_id)?;
        debug!(session_id = %session_id, url = %url, "posting session message");

        let response = self.http.post(url).json(&message).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(HostError::SessionNotFound {
                session_id: session_id.to_owned(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HostError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
