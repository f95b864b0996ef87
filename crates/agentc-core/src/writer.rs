//! Output path layout and document writing.
//!
//! Compiled documents land under `<output_root>/<provider dir>/<name>.md`,
//! where the provider directory comes from
//! [`Provider::output_dir`](crate::provider::Provider::output_dir).
//! Parent directories are created on demand.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::provider::Provider;
use crate::template::TemplateKind;
use crate::utils::to_kebab_case;

/// Returns the path a compiled document is written to.
pub fn output_path(
    output_root: &Path,
    provider: Provider,
    kind: TemplateKind,
    entity_name: &str,
) -> PathBuf {
    let file_name = format!("{}.md", to_kebab_case(entity_name));
    output_root.join(provider.output_dir(kind)).join(file_name)
}

/// Write a compiled document, creating parent directories as needed.
pub async fn write_document(path: &Path, contents: &str) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    log::debug!("Writing compiled document to: {}", path.display());
    fs::write(path, contents).await?;
    Ok(())
}
