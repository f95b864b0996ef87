//! Configuration management for Agentc compilation.
//!
//! This module defines the `Config` struct and related functionality for
//! managing compilation settings. The configuration can be loaded from an
//! `agentc.yaml` file, created programmatically, or assembled from
//! command-line arguments.
//!
//! # Examples
//!
//! ```no_run
//! use agentc_core::config::Config;
//!
//! // Create a new config programmatically
//! let mut config = Config::new("entities", "output");
//! config.providers = vec!["claude".to_string(), "opencode".to_string()];
//!
//! // Or load from a config file
//! # let _ = async {
//! let config = Config::from_file("agentc.yaml").await.unwrap();
//! # };
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for Agentc compilation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing entity definition files
    #[serde(default = "default_entities_dir")]
    pub entities_dir: String,

    /// Output root the provider directories are created under
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Providers to compile for when none are given on the command line
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,

    /// Template kind to compile when none is given on the command line
    #[serde(default = "default_template_kind")]
    pub template_kind: String,

    /// Entity names to skip during directory compilation
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(entities_dir: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            entities_dir: entities_dir.into(),
            output_dir: output_dir.into(),
            providers: default_providers(),
            template_kind: default_template_kind(),
            exclude: Vec::new(),
        }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(default_entities_dir(), default_output_dir())
    }
}

fn default_entities_dir() -> String {
    "entities".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_providers() -> Vec<String> {
    vec!["claude".to_string()]
}

fn default_template_kind() -> String {
    "agents".to_string()
}
