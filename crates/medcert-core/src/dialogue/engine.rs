//! The conversational state machine.

use super::flow::{self, FLOW};
use super::prompt::{BEGIN_TRIGGER, CANCEL_BUTTON, Prompt};
use crate::event::{Command, InboundEvent};
use crate::field::{Field, FieldStore};
use crate::session::Session;

/// What the caller must do after an event has been applied to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineAction {
    /// Send this prompt; nothing else to do.
    Reply(Prompt),
    /// Every field is collected: render a certificate from this snapshot
    /// and deliver it. The session has already been reset, so a failed
    /// render leaves the participant at the menu rather than stranded.
    Generate { fields: FieldStore },
}

/// Finite state machine sequencing prompts and consuming answers.
///
/// Transitions are pure: the engine never performs I/O and never suspends.
/// The terminal render-and-send action belongs to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConversationEngine;

impl ConversationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Applies one inbound event to the session.
    ///
    /// Uniform across collecting states: the cancellation token abandons
    /// the dialogue and discards collected answers; anything else is
    /// captured into the current state's field.
    pub fn handle(&self, session: &mut Session, event: &InboundEvent) -> EngineAction {
        session.touch();
        match event {
            InboundEvent::Command {
                command: Command::Start,
            } => {
                session.reset();
                EngineAction::Reply(Prompt::welcome())
            }
            InboundEvent::Command {
                command: Command::Cancel,
            } => cancel(session),
            InboundEvent::Text { content } => self.handle_text(session, content),
        }
    }

    fn handle_text(&self, session: &mut Session, text: &str) -> EngineAction {
        if session.state.is_idle() {
            return handle_idle(session, text);
        }
        if text == CANCEL_BUTTON {
            return cancel(session);
        }

        let Some(position) = flow::position(session.state) else {
            // Idle was handled above; a state outside the flow falls back
            // to the menu.
            session.reset();
            return EngineAction::Reply(Prompt::menu_fallback());
        };

        let step = &FLOW[position];
        let value = match step.field {
            Field::Gender => normalize_gender(text),
            _ => text.to_string(),
        };
        session.fields.set(step.field, value);

        match FLOW.get(position + 1) {
            Some(next) => {
                session.state = next.state;
                EngineAction::Reply(next.ask())
            }
            None => {
                let fields = session.fields.snapshot();
                session.reset();
                EngineAction::Generate { fields }
            }
        }
    }
}

fn handle_idle(session: &mut Session, text: &str) -> EngineAction {
    if text.contains(BEGIN_TRIGGER) {
        let first = &FLOW[0];
        session.state = first.state;
        EngineAction::Reply(first.ask())
    } else {
        EngineAction::Reply(Prompt::menu_fallback())
    }
}

fn cancel(session: &mut Session) -> EngineAction {
    session.reset();
    EngineAction::Reply(Prompt::cancelled())
}

/// Collapses decorated gender button text into the canonical closed set;
/// unrecognized text passes through verbatim.
fn normalize_gender(text: &str) -> String {
    for canonical in ["Male", "Female", "Other"] {
        if text.contains(canonical) {
            return canonical.to_string();
        }
    }
    text.to_string()
}
