//! In-memory session client.
//!
//! Records every message sent to a session so the history can be inspected.
//! Sessions must be opened before they accept messages, and stop accepting
//! them once closed.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{HostError, Result};
use crate::message::OutboundMessage;
use crate::traits::SessionClient;

/// A message as stored in a session's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMessage {
    /// Unique identifier (UUID v7).
    pub id: String,
    /// The session this message belongs to.
    pub session_id: String,
    /// The message as sent.
    pub message: OutboundMessage,
    /// Unix timestamp when the message was recorded.
    pub created_at: i64,
}

#[derive(Debug, Default)]
struct SessionLog {
    closed: bool,
    messages: Vec<RecordedMessage>,
}

/// A [`SessionClient`] that keeps session histories in memory.
#[derive(Debug, Default)]
pub struct InMemorySessionClient {
    sessions: RwLock<HashMap<String, SessionLog>>,
}

impl InMemorySessionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session. Re-opening an existing session keeps its history.
    pub async fn open_session(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        let log = sessions.entry(session_id.to_owned()).or_default();
        log.closed = false;
    }

    /// Mark a session closed. Returns `false` if it was never opened.
    pub async fn close_session(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(session_id) {
            Some(log) => {
                log.closed = true;
                true
            }
            None => false,
        }
    }

    /// The recorded history of a session, oldest first.
    pub async fn messages(&self, session_id: &str) -> Option<Vec<RecordedMessage>> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).map(|log| log.messages.clone())
    }
}

#[async_trait]
impl SessionClient for InMemorySessionClient {
    async fn send_message(&self, session_id: &str, message: OutboundMessage) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        let log = sessions
            .get_mut(session_id)
            .ok_or_else(|| HostError::SessionNotFound {
                session_id: session_id.to_owned(),
            })?;

        if log.closed {
            return Err(HostError::SessionClosed {
                session_id: session_id.to_owned(),
            });
        }

        log.messages.push(RecordedMessage {
            id: Uuid::now_v7().to_string(),
            session_id: session_id.to_owned(),
            message,
            created_at: Utc::now().timestamp(),
        });

        debug!(session_id = %session_id, count = log.messages.len(), "message recorded");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
