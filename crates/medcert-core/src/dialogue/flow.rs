//! The collection flow as data.
//!
//! The protocol is a table, not control flow: each step names the state that
//! owns it, the field the answer lands in, and the prompt that asks for it.
//! Changing the dialogue means editing this table.

use super::prompt::{Prompt, ReplyKeyboard};
use super::state::ConversationState;
use crate::field::Field;

/// One step of the collection flow.
#[derive(Debug, Clone, Copy)]
pub struct CollectStep {
    /// State that waits for this step's answer.
    pub state: ConversationState,
    /// Field the answer is captured into.
    pub field: Field,
    /// Question asked when this step is entered.
    pub question: &'static str,
    /// Keyboard rendered with the question.
    pub keyboard: ReplyKeyboard,
}

impl CollectStep {
    /// The outbound prompt that enters this step.
    pub fn ask(&self) -> Prompt {
        Prompt::new(self.question, self.keyboard)
    }
}

/// The collection protocol in traversal order.
pub const FLOW: &[CollectStep] = &[
    CollectStep {
        state: ConversationState::AwaitingName,
        field: Field::PatientName,
        question: "👤 What's the patient's name?",
        keyboard: ReplyKeyboard::CancelOnly,
    },
    CollectStep {
        state: ConversationState::AwaitingAge,
        field: Field::PatientAge,
        question: "📅 Please enter the patient's age:",
        keyboard: ReplyKeyboard::CancelOnly,
    },
    CollectStep {
        state: ConversationState::AwaitingGender,
        field: Field::Gender,
        question: "⚧️ What is the patient's gender?",
        keyboard: ReplyKeyboard::Gender,
    },
    CollectStep {
        state: ConversationState::AwaitingTestDate,
        field: Field::TestDate,
        question: "🩺 Enter the test date (YYYY-MM-DD):",
        keyboard: ReplyKeyboard::CancelOnly,
    },
    CollectStep {
        state: ConversationState::AwaitingReportDate,
        field: Field::ReportDate,
        question: "📝 Enter the report date (YYYY-MM-DD):",
        keyboard: ReplyKeyboard::CancelOnly,
    },
    CollectStep {
        state: ConversationState::AwaitingReferringDoctor,
        field: Field::ReferringDoctor,
        question: "👨‍⚕️ Enter the referring doctor's name:",
        keyboard: ReplyKeyboard::CancelOnly,
    },
    CollectStep {
        state: ConversationState::AwaitingSigningDoctor,
        field: Field::SigningDoctor,
        question: "👩‍⚕️ Enter the signing doctor's name:",
        keyboard: ReplyKeyboard::CancelOnly,
    },
];

/// Index of `state` within the flow; `None` for `Idle`.
pub(crate) fn position(state: ConversationState) -> Option<usize> {
    FLOW.iter().position(|step| step.state == state)
}

/// The step owned by `state`, `None` for `Idle`.
pub fn step_for(state: ConversationState) -> Option<&'static CollectStep> {
    position(state).map(|index| &FLOW[index])
}
