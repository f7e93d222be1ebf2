//! Console implementation of the messenger.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use medcert_application::Messenger;
use medcert_core::dialogue::Prompt;
use medcert_core::{MedcertError, Result};

/// Prints prompts to stdout and copies delivered documents into a local
/// output directory — the reference transport for local runs.
pub struct ConsoleMessenger {
    output_dir: PathBuf,
}

impl ConsoleMessenger {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl Messenger for ConsoleMessenger {
    async fn send_prompt(&self, _participant_id: &str, prompt: &Prompt) -> Result<()> {
        println!("{}", prompt.text);
        for row in prompt.keyboard.rows() {
            println!("  [{}]", row.join("] ["));
        }
        Ok(())
    }

    async fn send_document(
        &self,
        _participant_id: &str,
        path: &Path,
        file_name: &str,
        caption: &str,
    ) -> Result<()> {
        // Copy the document out before the sink releases it.
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| MedcertError::messenger(format!("create output dir: {e}")))?;
        let target = self
            .output_dir
            .join(format!("{}-{}", uuid::Uuid::new_v4(), file_name));
        tokio::fs::copy(path, &target)
            .await
            .map_err(|e| MedcertError::messenger(format!("deliver document: {e}")))?;

        println!("{caption}");
        println!("  saved to {}", target.display());
        Ok(())
    }

    async fn send_text(&self, _participant_id: &str, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }
}
