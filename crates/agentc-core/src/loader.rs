//! Entity discovery and loading.
//!
//! Entities live as individual files under an entities directory. This module
//! finds that directory, walks it for definition files, and loads them into
//! [`Entity`] values with duplicate-name detection.
//!
//! # Entity Directory Resolution
//!
//! The directory is resolved by checking the following locations in order:
//! 1. Directory specified by the `AGENTC_ENTITIES_DIR` environment variable
//! 2. The configured path (defaults to `entities/`)
//! 3. `~/.agentc/entities/` in the user's home directory

// Internal imports (std, crate)
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tokio::task;

use crate::entity::Entity;
use crate::error::{Error, Result};

/// Returns true for files the loader treats as entity definitions.
pub fn is_entity_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml" | "json" | "toml")
    )
}

/// Resolve the entities directory from the configured path.
///
/// See the module docs for the probe order. Returns an error when no
/// candidate exists, so callers fail before compiling anything.
pub fn resolve_entities_dir(configured: &str) -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("AGENTC_ENTITIES_DIR") {
        let path = PathBuf::from(dir);
        if path.exists() {
            return Ok(path);
        }
    }

    let configured_path = PathBuf::from(configured);
    if configured_path.exists() {
        return Ok(configured_path);
    }

    if let Some(home_dir) = dirs::home_dir() {
        let fallback = home_dir.join(".agentc").join("entities");
        if fallback.exists() {
            return Ok(fallback);
        }
    }

    Err(Error::config(format!(
        "Entities directory not found: {}",
        configured
    )))
}

/// Discovers all entity files in the given directory and its subdirectories.
///
/// This function uses `spawn_blocking` to avoid blocking the async runtime
/// during filesystem operations. The returned paths are sorted so that
/// compilation order is stable across runs.
pub async fn discover_entity_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_buf = dir.to_path_buf();

    task::spawn_blocking(move || {
        let mut entities = Vec::new();

        fn walk_dir(dir: &Path, entities: &mut Vec<PathBuf>) -> std::io::Result<()> {
            for entry in std::fs::read_dir(dir)? {
                let entry = entry?;
                let path = entry.path();

                if path.is_dir() {
                    walk_dir(&path, entities)?;
                } else if is_entity_file(&path) {
                    entities.push(path);
                }
            }
            Ok(())
        }

        walk_dir(&dir_buf, &mut entities)?;
        entities.sort();
        Ok(entities)
    })
    .await
    .map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to join blocking task: {}", e),
        )
    })?
}

/// Load every entity under `dir`, sorted by name.
///
/// # Errors
///
/// Fails on the first file that does not parse or validate, and when two
/// files declare the same entity name.
pub async fn load_entities(dir: &Path) -> Result<Vec<Entity>> {
    let files = discover_entity_files(dir).await?;
    log::debug!("Discovered {} entity file(s) in {}", files.len(), dir.display());

    let mut entities = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for path in files {
        let entity = Entity::from_file(&path).await.map_err(|e| {
            Error::entity(format!("Failed to load entity {}: {}", path.display(), e))
        })?;
        if let Some(previous) = seen.insert(entity.name.clone(), path.clone()) {
            return Err(Error::entity(format!(
                "Duplicate entity name '{}' in {} and {}",
                entity.name,
                previous.display(),
                path.display()
            )));
        }
        entities.push(entity);
    }

    entities.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio::fs;

    #[tokio::test]
    async fn test_discover_entity_files() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("b.yaml"), "name: b\n").await?;
        fs::write(dir.path().join("notes.md"), "not an entity").await?;
        let nested = dir.path().join("team");
        fs::create_dir_all(&nested).await?;
        fs::write(nested.join("a.json"), r#"{"name": "a"}"#).await?;

        let files = discover_entity_files(dir.path()).await?;
        assert_eq!(files.len(), 2);
        // Sorted, so the top-level file comes before the nested one
        assert!(files[0].ends_with("b.yaml"));
        assert!(files[1].ends_with("team/a.json"));

        Ok(())
    }

    #[tokio::test]
    async fn test_load_entities_sorted_by_name() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("zz.yaml"), "name: zeta\n").await?;
        fs::write(dir.path().join("aa.yaml"), "name: alpha\n").await?;

        let entities = load_entities(dir.path()).await?;
        let names: Vec<_> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_entities_rejects_duplicates() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.yaml"), "name: same\n").await?;
        fs::write(dir.path().join("b.yaml"), "name: same\n").await?;

        let result = load_entities(dir.path()).await;
        match result {
            Err(Error::Entity(msg)) => assert!(msg.contains("Duplicate entity name 'same'")),
            other => panic!("expected duplicate error, got {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_load_entities_reports_file_in_parse_errors() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("bad.yaml"), "name: [not, a, string]\n").await?;

        match load_entities(dir.path()).await {
            Err(Error::Entity(msg)) => assert!(msg.contains("bad.yaml")),
            other => panic!("expected entity error, got {:?}", other),
        }

        Ok(())
    }

    #[test]
    fn test_resolve_entities_dir_prefers_configured_path() {
        let dir = tempdir().unwrap();
        let configured = dir.path().to_string_lossy().to_string();
        let resolved = resolve_entities_dir(&configured).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn test_resolve_entities_dir_missing() {
        let result = resolve_entities_dir("/nonexistent/agentc-entities");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_entity_file() {
        assert!(is_entity_file(Path::new("a.yaml")));
        assert!(is_entity_file(Path::new("a.yml")));
        assert!(is_entity_file(Path::new("a.json")));
        assert!(is_entity_file(Path::new("a.toml")));
        assert!(!is_entity_file(Path::new("a.md")));
        assert!(!is_entity_file(Path::new("yaml")));
    }
}
