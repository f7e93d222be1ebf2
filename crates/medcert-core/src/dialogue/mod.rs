//! Conversation flow: states, prompts, the transition table, and the engine.
//!
//! # Module Structure
//!
//! - `state`: position of a session within the collection protocol
//! - `prompt`: outbound copy and reply-keyboard affordances
//! - `flow`: the collection sequence as a static data table
//! - `engine`: the state machine consuming events against a session

mod engine;
mod flow;
mod prompt;
mod state;

pub use engine::{ConversationEngine, EngineAction};
pub use flow::{CollectStep, FLOW, step_for};
pub use prompt::{
    BEGIN_TRIGGER, CANCEL_BUTTON, DOCUMENT_CAPTION, DOCUMENT_FILE_NAME, FEMALE_BUTTON,
    GENERATING_NOTICE, MALE_BUTTON, OTHER_BUTTON, Prompt, ReplyKeyboard, START_BUTTON,
};
pub use state::ConversationState;
