//! Per-participant session model.

use crate::dialogue::ConversationState;
use crate::field::FieldStore;
use serde::{Deserialize, Serialize};

/// The per-participant conversational state plus its in-progress answers.
///
/// A session is created on the participant's first inbound event, reset to
/// the initial state after completion or cancellation, and never destroyed;
/// an untouched session simply stays parked in its current state.
///
/// Sessions are owned exclusively by the dispatcher; the engine operates on
/// a borrowed reference for the duration of one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Participant identity this session belongs to.
    pub participant_id: String,
    /// Current position in the collection flow.
    pub state: ConversationState,
    /// Answers collected so far.
    pub fields: FieldStore,
    /// Timestamp when the session was created (ISO 8601 format).
    pub created_at: String,
    /// Timestamp when the session last processed an event (ISO 8601 format).
    pub updated_at: String,
}

impl Session {
    /// Creates a fresh session parked at the main menu.
    pub fn new(participant_id: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            participant_id: participant_id.into(),
            state: ConversationState::Idle,
            fields: FieldStore::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Returns the session to the initial state and discards every
    /// collected answer. Completion and cancellation both land here.
    pub fn reset(&mut self) {
        self.state = ConversationState::Idle;
        self.fields.clear();
        self.touch();
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = Session::new("participant-1");
        assert_eq!(session.participant_id, "participant-1");
        assert_eq!(session.state, ConversationState::Idle);
        assert!(session.fields.is_empty());
    }

    #[test]
    fn test_reset_discards_progress() {
        let mut session = Session::new("participant-1");
        session.state = ConversationState::AwaitingAge;
        session.fields.set(Field::PatientName, "Jane Doe");

        session.reset();

        assert_eq!(session.state, ConversationState::Idle);
        assert!(session.fields.is_empty());
    }
}
