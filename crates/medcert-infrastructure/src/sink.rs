//! Per-generation output sink.

use std::io::Write;
use std::path::Path;

use medcert_core::{MedcertError, Result};
use tempfile::NamedTempFile;

/// A uniquely named, exclusively owned temporary store for one rendered
/// document.
///
/// The backing file is removed when the sink drops — success, failure, and
/// unwinding all take the same path — so delivery code never cleans up by
/// hand.
pub struct DocumentSink {
    file: NamedTempFile,
}

impl DocumentSink {
    /// Creates the backing temp file.
    ///
    /// # Errors
    ///
    /// Returns `OutputSink` when the temp file cannot be created.
    pub fn create() -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("medcert-")
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| MedcertError::output_sink(format!("create temp file: {e}")))?;
        Ok(Self { file })
    }

    /// Writes the rendered bytes and flushes them, so a reader opening the
    /// path sees the complete document.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.file
            .write_all(bytes)
            .map_err(|e| MedcertError::output_sink(format!("write document: {e}")))?;
        self.file
            .flush()
            .map_err(|e| MedcertError::output_sink(format!("flush document: {e}")))?;
        Ok(())
    }

    /// Path the messaging collaborator reads the document back from.
    /// Valid only while the sink is alive.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
