//! Outbound message model for the session messaging call.
//!
//! The host accepts a body of the form
//! `{"noReply": true, "parts": [{"type": "text", "text": "..."}]}`.
//! `noReply` marks the message as silent: it is appended to the session
//! history without provoking an assistant reply.

use serde::{Deserialize, Serialize};

/// A single content part of an outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePart {
    /// Plain text content.
    Text { text: String },
}

/// A message a plugin pushes into a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    /// When `true`, the host must not trigger an assistant reply.
    #[serde(default)]
    pub no_reply: bool,
    /// Ordered content parts.
    pub parts: Vec<MessagePart>,
}

impl OutboundMessage {
    /// Build a silent message with a single text part.
    pub fn silent_text(text: impl Into<String>) -> Self {
        Self {
            no_reply: true,
            parts: vec![MessagePart::Text { text: text.into() }],
        }
    }

    /// Whether this message suppresses the assistant reply.
    pub fn is_silent(&self) -> bool {
        self.no_reply
    }

    /// Concatenated text of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|part| match part {
                MessagePart::Text { text } => text.as_str(),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn silent_text_wire_shape() {
        let msg = OutboundMessage::silent_text("hello");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "noReply": true,
                "parts": [{ "type": "text", "text": "hello" }]
            })
        );
    }

    #[test]
    fn text_concatenates_parts() {
        let msg = OutboundMessage {
            no_reply: false,
            parts: vec![
                MessagePart::Text { text: "a".into() },
                MessagePart::Text { text: "b".into() },
            ],
        };
        assert_eq!(msg.text(), "ab");
        assert!(!msg.is_silent());
    }

    #[test]
    fn missing_no_reply_defaults_to_false() {
        let msg: OutboundMessage =
            serde_json::from_value(json!({ "parts": [{ "type": "text", "text": "x" }] }))
                .unwrap();
        assert!(!msg.is_silent());
    }
}
