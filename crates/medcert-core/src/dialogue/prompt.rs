//! Outbound prompt copy and input affordances.

use serde::{Deserialize, Serialize};

/// Main-menu button label.
pub const START_BUTTON: &str = "🏥 Generate Medical Certificate";
/// Reserved cancellation token; matched exactly against inbound text.
pub const CANCEL_BUTTON: &str = "❌ Cancel";
/// Substring of the main-menu button that begins the flow. Matched by
/// containment so decorated button text still triggers.
pub const BEGIN_TRIGGER: &str = "Generate Medical Certificate";

pub const MALE_BUTTON: &str = "👨 Male";
pub const FEMALE_BUTTON: &str = "👩 Female";
pub const OTHER_BUTTON: &str = "⚧️ Other";

/// Progress notice sent before rendering starts.
pub const GENERATING_NOTICE: &str = "🔧 Generating your certificate... please wait!";
/// Caption attached to the delivered certificate.
pub const DOCUMENT_CAPTION: &str = "📄 Here's your medical certificate";
/// Suggested file name for the delivered certificate.
pub const DOCUMENT_FILE_NAME: &str = "medical_certificate.pdf";

/// The input affordance attached to a prompt: which reply keyboard the
/// transport should render with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKeyboard {
    /// The single begin button.
    MainMenu,
    /// Free-text input with a cancel button.
    CancelOnly,
    /// The closed gender choice set plus cancel.
    Gender,
}

impl ReplyKeyboard {
    /// Button labels, row by row, exactly as the transport should render
    /// them.
    pub fn rows(self) -> &'static [&'static [&'static str]] {
        match self {
            ReplyKeyboard::MainMenu => &[&[START_BUTTON]],
            ReplyKeyboard::CancelOnly => &[&[CANCEL_BUTTON]],
            ReplyKeyboard::Gender => &[
                &[MALE_BUTTON, FEMALE_BUTTON],
                &[OTHER_BUTTON, CANCEL_BUTTON],
            ],
        }
    }
}

/// A message for the participant plus the keyboard to render with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub text: String,
    pub keyboard: ReplyKeyboard,
}

impl Prompt {
    pub fn new(text: impl Into<String>, keyboard: ReplyKeyboard) -> Self {
        Self {
            text: text.into(),
            keyboard,
        }
    }

    /// Greeting shown on `/start`.
    pub fn welcome() -> Self {
        Prompt::new(
            "👋 Welcome to the Medical Certificate Generator Bot!\n\n\
             Use the buttons below to navigate.",
            ReplyKeyboard::MainMenu,
        )
    }

    /// Shown when idle text does not match the begin trigger.
    pub fn menu_fallback() -> Self {
        Prompt::new("Please use the available buttons.", ReplyKeyboard::MainMenu)
    }

    /// Acknowledgment after the participant abandons the dialogue.
    pub fn cancelled() -> Self {
        Prompt::new(
            "❌ Operation cancelled. What would you like to do?",
            ReplyKeyboard::MainMenu,
        )
    }

    /// Shown after a certificate was delivered.
    pub fn completed() -> Self {
        Prompt::new(
            "✅ Certificate generated successfully! What would you like to do next?",
            ReplyKeyboard::MainMenu,
        )
    }
}
