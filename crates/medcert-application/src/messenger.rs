//! Outbound messaging seam.

use std::path::Path;

use async_trait::async_trait;
use medcert_core::Result;
use medcert_core::dialogue::Prompt;

/// Outbound half of the messaging collaborator.
///
/// The transport behind this trait owns delivery mechanics (chat API calls,
/// keyboard rendering); the core hands it prompts, documents, and notices
/// and nothing else.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends a prompt together with its input affordance.
    async fn send_prompt(&self, participant_id: &str, prompt: &Prompt) -> Result<()>;

    /// Sends a rendered document with a caption and suggested file name.
    ///
    /// `path` is readable only until this call returns; the transport must
    /// read the bytes out before then.
    async fn send_document(
        &self,
        participant_id: &str,
        path: &Path,
        file_name: &str,
        caption: &str,
    ) -> Result<()>;

    /// Sends a bare text notice (progress or error), leaving whatever
    /// keyboard the participant already has in place.
    async fn send_text(&self, participant_id: &str, text: &str) -> Result<()>;
}
