//! Assistant chat seam.
//!
//! # Responsibility
//! - Define the message types and the transport-agnostic client trait
//!   the chat widget talks to.
//! - Degrade gracefully: a transport failure becomes a canned reply,
//!   never an error surfaced to the user.
//!
//! The crate ships no real transport; hosts provide one by implementing
//! [`AssistantClient`] over whatever HTTP stack they already carry.

use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Reply shown when the assistant backend is unreachable or errors.
pub const FALLBACK_REPLY: &str =
    "I can't reach the assistant right now. Your tools and notes keep working offline.";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the assistant conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Errors an assistant transport can report.
#[derive(Debug)]
pub enum AssistantError {
    /// The backend could not be reached at all.
    Unavailable(String),
    /// The backend answered with something unusable.
    BadResponse(String),
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(detail) => write!(f, "assistant unavailable: {detail}"),
            Self::BadResponse(detail) => write!(f, "assistant bad response: {detail}"),
        }
    }
}

impl Error for AssistantError {}

/// Transport seam for the assistant chat.
pub trait AssistantClient {
    /// Sends the conversation so far and returns the assistant's reply.
    fn send(&self, history: &[ChatMessage]) -> Result<String, AssistantError>;
}

/// Asks the client for a reply, substituting [`FALLBACK_REPLY`] on any
/// transport failure. Failures are logged, not propagated.
pub fn reply_or_fallback(client: &dyn AssistantClient, history: &[ChatMessage]) -> String {
    match client.send(history) {
        Ok(reply) => reply,
        Err(err) => {
            warn!("event=assistant_reply module=assistant status=fallback error={err}");
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        reply_or_fallback, AssistantClient, AssistantError, ChatMessage, FALLBACK_REPLY,
    };

    struct Echo;

    impl AssistantClient for Echo {
        fn send(&self, history: &[ChatMessage]) -> Result<String, AssistantError> {
            Ok(format!("echo: {}", history.last().map(|m| m.text.as_str()).unwrap_or("")))
        }
    }

    struct Down;

    impl AssistantClient for Down {
        fn send(&self, _history: &[ChatMessage]) -> Result<String, AssistantError> {
            Err(AssistantError::Unavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn working_client_reply_passes_through() {
        let history = [ChatMessage::user("hello")];
        assert_eq!(reply_or_fallback(&Echo, &history), "echo: hello");
    }

    #[test]
    fn transport_failure_yields_the_fallback_reply() {
        let history = [ChatMessage::user("hello")];
        assert_eq!(reply_or_fallback(&Down, &history), FALLBACK_REPLY);
    }
}
