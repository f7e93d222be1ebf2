//! Optional TOML configuration for the console front end.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// On-disk configuration. Command-line flags override anything set here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Path to the certificate template PDF.
    pub template: Option<PathBuf>,
    /// Directory delivered certificates are copied into.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config =
            toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }
}
