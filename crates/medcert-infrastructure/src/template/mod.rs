//! Certificate template loading and slot filling.

mod certificate;
mod filler;
pub mod slot_map;

pub use certificate::CertificateTemplate;
pub use filler::TemplateFiller;
