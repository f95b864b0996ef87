//! Error handling for the Agentc compilation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! # Examples
//!
//! ```
//! use agentc_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type for Agentc compilation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Agentc compilation operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Value cannot be rendered as a front matter scalar
    #[error("Unsupported scalar type: {kind}")]
    UnsupportedScalar {
        /// JSON type name of the offending value
        kind: &'static str,
    },

    /// Entity has explicitly opted out of the requested provider
    #[error("Entity '{entity}' is disabled for provider '{provider}'")]
    ProviderDisabled {
        /// Name of the entity being compiled
        entity: String,
        /// Provider the caller asked for
        provider: String,
    },

    /// Provider name not in the supported catalog
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Template kind name not in the supported catalog
    #[error("Unknown template kind: {0}")]
    UnknownTemplateKind(String),

    /// Entity error
    #[error("Entity error: {0}")]
    Entity(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new entity error
    pub fn entity<S: Into<String>>(msg: S) -> Self {
        Self::Entity(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
