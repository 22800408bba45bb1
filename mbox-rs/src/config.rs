//! Configuration for mbox-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SplitError};

/// Run configuration passed explicitly into the split manager
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SplitConfig {
    /// Report per-message progress at info level
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// Header token whose presence on a line marks the start of a new message
    #[serde(default = "default_boundary_marker")]
    pub boundary_marker: String,
    /// Extension of the written message files, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_verbose() -> bool {
    true
}

fn default_boundary_marker() -> String {
    "Delivered-To:".to_string()
}

fn default_extension() -> String {
    "eml".to_string()
}

impl SplitConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SplitError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| SplitError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.boundary_marker.is_empty() {
            return Err(SplitError::Config(
                "Boundary marker cannot be empty".to_string(),
            ));
        }

        if self.extension.is_empty() || self.extension.contains('/') {
            return Err(SplitError::Config(format!(
                "Invalid file extension '{}'",
                self.extension
            )));
        }

        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            verbose: default_verbose(),
            boundary_marker: default_boundary_marker(),
            extension: default_extension(),
        }
    }
}
