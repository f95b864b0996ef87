//! Provider catalog for Agentc.
//!
//! A provider is a coding agent runtime that consumes compiled entity files
//! from a well-known directory, like `.claude/agents/` or `.opencode/agent/`.
//! This module defines the supported providers and where each one expects
//! its files.
//!
//! # Examples
//!
//! ```
//! use agentc_core::provider::Provider;
//! use agentc_core::template::TemplateKind;
//!
//! let provider: Provider = "claude".parse().unwrap();
//! assert_eq!(provider, Provider::Claude);
//! assert_eq!(provider.output_dir(TemplateKind::Agents), ".claude/agents");
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::template::TemplateKind;

/// Supported providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Provider {
    /// Claude Code
    #[default]
    Claude,
    /// OpenAI Codex CLI
    Codex,
    /// GitHub Copilot
    Copilot,
    /// Cursor
    Cursor,
    /// Gemini CLI
    Gemini,
    /// OpenCode
    Opencode,
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude" => Ok(Provider::Claude),
            "codex" => Ok(Provider::Codex),
            "copilot" => Ok(Provider::Copilot),
            "cursor" => Ok(Provider::Cursor),
            "gemini" => Ok(Provider::Gemini),
            "opencode" => Ok(Provider::Opencode),
            _ => Err(Error::UnknownProvider(s.to_string())),
        }
    }
}

impl Provider {
    /// Returns the provider identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Codex => "codex",
            Self::Copilot => "copilot",
            Self::Cursor => "cursor",
            Self::Gemini => "gemini",
            Self::Opencode => "opencode",
        }
    }

    /// Returns the directory (relative to the output root) this provider
    /// reads files of the given kind from.
    pub fn output_dir(&self, kind: TemplateKind) -> &'static str {
        match (self, kind) {
            (Self::Claude, TemplateKind::Agents) => ".claude/agents",
            (Self::Claude, TemplateKind::Commands) => ".claude/commands",
            (Self::Codex, TemplateKind::Agents) => ".codex/agents",
            (Self::Codex, TemplateKind::Commands) => ".codex/prompts",
            (Self::Copilot, TemplateKind::Agents) => ".github/agents",
            (Self::Copilot, TemplateKind::Commands) => ".github/prompts",
            (Self::Cursor, TemplateKind::Agents) => ".cursor/agents",
            (Self::Cursor, TemplateKind::Commands) => ".cursor/commands",
            (Self::Gemini, TemplateKind::Agents) => ".gemini/agents",
            (Self::Gemini, TemplateKind::Commands) => ".gemini/commands",
            (Self::Opencode, TemplateKind::Agents) => ".opencode/agent",
            (Self::Opencode, TemplateKind::Commands) => ".opencode/command",
        }
    }

    /// Returns an iterator over all supported providers
    pub fn all() -> impl Iterator<Item = Self> {
        use Provider::*;
        [Claude, Codex, Copilot, Cursor, Gemini, Opencode].iter().copied()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_as_str_round_trips_from_str() {
        for provider in Provider::all() {
            assert_eq!(provider.as_str().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("Claude".parse::<Provider>().unwrap(), Provider::Claude);
        assert_eq!("OPENCODE".parse::<Provider>().unwrap(), Provider::Opencode);
    }

    #[test]
    fn test_from_str_unknown() {
        assert!(matches!(
            "emacs".parse::<Provider>(),
            Err(Error::UnknownProvider(_))
        ));
        assert!("".parse::<Provider>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Provider::Claude), "claude");
        assert_eq!(format!("{}", Provider::Gemini), "gemini");
    }

    #[test]
    fn test_default() {
        assert_eq!(Provider::default(), Provider::Claude);
    }

    #[test]
    fn test_all_unique() {
        let all: Vec<_> = Provider::all().collect();
        assert_eq!(all.len(), 6);

        let unique: HashSet<_> = Provider::all().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_output_dirs() {
        assert_eq!(Provider::Claude.output_dir(TemplateKind::Agents), ".claude/agents");
        assert_eq!(Provider::Claude.output_dir(TemplateKind::Commands), ".claude/commands");
        assert_eq!(Provider::Codex.output_dir(TemplateKind::Commands), ".codex/prompts");
        assert_eq!(Provider::Copilot.output_dir(TemplateKind::Agents), ".github/agents");
        // OpenCode uses singular directory names
        assert_eq!(Provider::Opencode.output_dir(TemplateKind::Agents), ".opencode/agent");
        assert_eq!(Provider::Opencode.output_dir(TemplateKind::Commands), ".opencode/command");
    }

    #[test]
    fn test_output_dirs_distinct_per_provider() {
        let dirs: HashSet<_> = Provider::all()
            .map(|p| p.output_dir(TemplateKind::Agents))
            .collect();
        assert_eq!(dirs.len(), 6);
    }
}
