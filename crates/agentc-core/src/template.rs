//! Template kind definitions for Agentc.
//!
//! A template kind selects the front matter layout an entity is compiled
//! into. `agents` produces subagent definition files; `commands` produces
//! slash command files. Each provider maps a kind to its own output
//! directory, see [`crate::provider::Provider::output_dir`].
//!
//! # Examples
//!
//! ```
//! use agentc_core::template::TemplateKind;
//! use std::str::FromStr;
//!
//! let kind = TemplateKind::from_str("agents").unwrap();
//! assert_eq!(kind, TemplateKind::Agents);
//! assert_eq!(kind.as_str(), "agents");
//!
//! // You can also use the Display trait
//! assert_eq!(kind.to_string(), "agents");
//!
//! // The default kind is Agents
//! assert_eq!(TemplateKind::default(), TemplateKind::Agents);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported template kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum TemplateKind {
    /// Subagent definition files
    #[default]
    Agents,
    /// Slash command files
    Commands,
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "agents" => Ok(TemplateKind::Agents),
            "commands" => Ok(TemplateKind::Commands),
            _ => Err(Error::UnknownTemplateKind(s.to_string())),
        }
    }
}

impl TemplateKind {
    /// Returns the kind identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agents => "agents",
            Self::Commands => "commands",
        }
    }

    /// Returns an iterator over all available template kinds
    pub fn all() -> impl Iterator<Item = Self> {
        use TemplateKind::*;
        [Agents, Commands].iter().copied()
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
