//! Read-only handle to the loaded certificate template.

use std::path::{Path, PathBuf};

use lopdf::Document;
use medcert_core::{MedcertError, Result};

/// The certificate template, parsed once at startup and immutable for the
/// process lifetime.
///
/// Every fill works on a fresh clone; neither the parsed document nor the
/// file on disk is ever mutated.
#[derive(Debug, Clone)]
pub struct CertificateTemplate {
    path: PathBuf,
    document: Document,
}

impl CertificateTemplate {
    /// Loads and parses the template file.
    ///
    /// # Errors
    ///
    /// Returns `TemplateLoad` when the file is missing or not a parseable
    /// PDF. Callers at startup should treat that as fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let document = Document::load(&path).map_err(|e| {
            MedcertError::template_load(path.display().to_string(), e.to_string())
        })?;
        tracing::debug!(path = %path.display(), "certificate template parsed");
        Ok(Self { path, document })
    }

    /// Parses a template from an in-memory buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes)
            .map_err(|e| MedcertError::template_load("<memory>", e.to_string()))?;
        Ok(Self {
            path: PathBuf::from("<memory>"),
            document,
        })
    }

    /// Where the template was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fresh working copy for one fill operation.
    pub(crate) fn working_copy(&self) -> Document {
        self.document.clone()
    }
}
