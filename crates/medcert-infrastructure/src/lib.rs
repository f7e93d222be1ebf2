//! Infrastructure layer: PDF template filling and the per-generation
//! output sink.

pub mod sink;
pub mod template;

pub use sink::DocumentSink;
pub use template::{CertificateTemplate, TemplateFiller};
