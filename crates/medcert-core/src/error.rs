//! Error types for the medcert workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum MedcertError {
    /// An inbound event the current conversation state has no handler for.
    /// The defined recovery is "ignore and re-prompt from the menu".
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The certificate template could not be opened or parsed.
    ///
    /// Raised at startup, this is fatal: a process without a template
    /// cannot serve any session.
    #[error("Template load error: {path}: {message}")]
    TemplateLoad { path: String, message: String },

    /// Slot enumeration or serialization failed during one generation.
    /// Recovered locally; other sessions keep running.
    #[error("Template fill error: {0}")]
    TemplateFill(String),

    /// The per-generation output sink could not be created or written.
    #[error("Output sink error: {0}")]
    OutputSink(String),

    /// Outbound delivery to the participant failed.
    #[error("Messenger error: {0}")]
    Messenger(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MedcertError {
    /// Creates a Protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Creates a TemplateLoad error
    pub fn template_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TemplateLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a TemplateFill error
    pub fn template_fill(message: impl Into<String>) -> Self {
        Self::TemplateFill(message.into())
    }

    /// Creates an OutputSink error
    pub fn output_sink(message: impl Into<String>) -> Self {
        Self::OutputSink(message.into())
    }

    /// Creates a Messenger error
    pub fn messenger(message: impl Into<String>) -> Self {
        Self::Messenger(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a TemplateFill error
    pub fn is_template_fill(&self) -> bool {
        matches!(self, Self::TemplateFill(_))
    }

    /// Check if this is an OutputSink error
    pub fn is_output_sink(&self) -> bool {
        matches!(self, Self::OutputSink(_))
    }

    /// Check if this error must abort process start.
    ///
    /// Only a template that fails to load at startup is fatal; everything
    /// else is recovered per session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::TemplateLoad { .. })
    }
}

impl From<std::io::Error> for MedcertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, MedcertError>`.
pub type Result<T> = std::result::Result<T, MedcertError>;
