//! Inbound event types for session interaction.

use serde::{Deserialize, Serialize};

/// Commands the transport recognizes independent of conversation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Reset the session and show the welcome menu.
    Start,
    /// Abandon the in-progress dialogue.
    Cancel,
}

/// An event delivered to a session by the messaging collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    /// Ordinary message text from the participant.
    Text { content: String },
    /// A command recognized by the transport (e.g. `/start`).
    Command { command: Command },
}

impl InboundEvent {
    /// Wraps message text.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Wraps a command.
    pub fn command(command: Command) -> Self {
        Self::Command { command }
    }
}
