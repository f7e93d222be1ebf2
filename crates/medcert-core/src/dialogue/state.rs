//! Conversation states for the collection protocol.

use serde::{Deserialize, Serialize};

/// Position of a session within the data-collection flow.
///
/// States advance strictly in the order listed. Every non-idle state accepts
/// exactly one answer plus the cancellation token; `Idle` waits for the
/// begin trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Parked at the main menu.
    Idle,
    AwaitingName,
    AwaitingAge,
    AwaitingGender,
    AwaitingTestDate,
    AwaitingReportDate,
    AwaitingReferringDoctor,
    AwaitingSigningDoctor,
}

impl ConversationState {
    pub fn is_idle(self) -> bool {
        self == ConversationState::Idle
    }

    /// True for every state that captures an answer.
    pub fn is_collecting(self) -> bool {
        !self.is_idle()
    }
}
