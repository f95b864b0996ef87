//! Entity definitions for Agentc.
//!
//! An entity is one agent or command described in a YAML, JSON, or TOML file.
//! The compiler reads entities from an entities directory (or a single file)
//! and renders one output document per requested provider.
//!
//! Unknown fields in a definition file are ignored so that entity files can
//! carry provider-specific extras without breaking compilation.
//!
//! # Examples
//!
//! ```
//! use agentc_core::entity::Entity;
//!
//! let entity = Entity::from_value(serde_json::json!({
//!     "name": "reviewer",
//!     "description": "Reviews pull requests",
//!     "prompt": "Review the diff and report issues.",
//!     "tools": ["git", "fs"],
//! })).unwrap();
//! assert_eq!(entity.tools, vec!["git", "fs"]);
//! ```

// Internal imports (std, crate)
use std::collections::HashMap;
use std::path::Path;

// External imports (alphabetized)
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_value::Value as SerdeValue;
use tokio::fs;

use crate::error::Error;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9][a-z0-9-]*$").expect("valid entity name regex"));

/// One agent or command definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name, lowercase alphanumeric with dashes
    pub name: String,

    /// Short description of what the entity does
    #[serde(default)]
    pub description: Option<String>,

    /// Prompt text rendered into the document body
    #[serde(default)]
    pub prompt: Option<String>,

    /// Model identifier to request from the provider
    #[serde(default)]
    pub model: Option<String>,

    /// Tool names the entity may use, in the order they should be emitted
    #[serde(default, deserialize_with = "deserialize_tools")]
    pub tools: Vec<String>,

    /// Per-provider opt-in/opt-out; absent means enabled
    #[serde(default)]
    pub providers: HashMap<String, bool>,

    /// Turn limit for the entity, if the provider supports one
    #[serde(default, rename = "max-turns")]
    pub max_turns: Option<u64>,

    /// Whether the entity runs as a background task
    #[serde(default)]
    pub background: Option<bool>,
}

impl Entity {
    /// Load an entity definition from a file.
    ///
    /// The format is chosen by extension: `.json` and `.toml` parse as JSON
    /// and TOML, anything else parses as YAML.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let entity: Entity = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        entity.validate()?;
        Ok(entity)
    }

    /// Build an entity from an in-memory JSON value.
    pub fn from_value(value: serde_json::Value) -> crate::Result<Self> {
        let entity: Entity = serde_json::from_value(value)?;
        entity.validate()?;
        Ok(entity)
    }

    /// Check structural constraints that serde cannot express.
    pub fn validate(&self) -> crate::Result<()> {
        if !NAME_RE.is_match(&self.name) {
            return Err(Error::entity(format!(
                "Invalid entity name '{}': use lowercase letters, digits, and dashes",
                self.name
            )));
        }
        if self.tools.iter().any(|tool| tool.is_empty()) {
            return Err(Error::entity(format!(
                "Entity '{}' has an empty tool name",
                self.name
            )));
        }
        Ok(())
    }

    /// Returns true unless the entity explicitly opts out of `provider`.
    pub fn enabled_for(&self, provider: &str) -> bool {
        self.providers.get(provider).copied() != Some(false)
    }
}

/// Helper function to deserialize tools from either a whitespace/comma
/// separated string or a list of strings.
fn deserialize_tools<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SerdeValue::deserialize(deserializer)?;

    match value {
        SerdeValue::String(s) => Ok(split_tool_list(&s)),
        SerdeValue::Seq(seq) => {
            let mut result = Vec::new();
            for item in seq {
                if let SerdeValue::String(s) = item {
                    result.push(s.to_owned());
                } else {
                    return Err(serde::de::Error::custom(
                        "Expected string or array of strings",
                    ));
                }
            }
            Ok(result)
        }
        _ => Err(serde::de::Error::custom(
            "Expected string or array of strings",
        )),
    }
}

fn split_tool_list(s: &str) -> Vec<String> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tool| !tool.is_empty())
        .map(String::from)
        .collect()
}
