//! Batch compilation for Agentc.
//!
//! [`generate`] is the main entry point for directory compilation: it loads
//! every entity from the configured entities directory and compiles each one
//! for each requested provider. Entities that opt out of a provider are
//! skipped and counted, not treated as failures.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::compile::compile_entity_for_provider;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::loader;
use crate::provider::Provider;
use crate::template::TemplateKind;
use crate::writer;

/// Options that override config values for one run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Providers to compile for; empty means use the config's list
    pub providers: Vec<Provider>,
    /// Template kind to compile; `None` means use the config's kind
    pub template_kind: Option<TemplateKind>,
    /// Compile without writing any files
    pub dry_run: bool,
}

/// One compiled output document.
#[derive(Debug, Clone)]
pub struct CompiledDocument {
    /// Path the document was (or would be) written to
    pub path: PathBuf,
    /// Full document text
    pub contents: String,
}

/// Result of a [`generate`] run.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Documents produced, in compilation order
    pub documents: Vec<CompiledDocument>,
    /// Entity/provider pairs skipped because the entity opted out
    pub skipped: usize,
}

/// Main entry point for directory compilation
pub async fn generate(config: &Config, opts: &GenerateOptions) -> Result<GenerateSummary> {
    // 1. Resolve the entities directory and load everything in it
    let entities_dir = loader::resolve_entities_dir(&config.entities_dir)?;
    let entities = loader::load_entities(&entities_dir).await?;

    // 2. Work out the template kind and provider list for this run
    let kind = match opts.template_kind {
        Some(kind) => kind,
        None => TemplateKind::from_str(&config.template_kind)?,
    };
    let providers: Vec<Provider> = if opts.providers.is_empty() {
        config
            .providers
            .iter()
            .map(|name| name.parse::<Provider>())
            .collect::<Result<_>>()?
    } else {
        opts.providers.clone()
    };

    log::info!(
        "Compiling {} entities for {} providers as '{}'",
        entities.len(),
        providers.len(),
        kind
    );

    // 3. Compile every entity for every provider
    let output_root = Path::new(&config.output_dir);
    let mut summary = GenerateSummary::default();

    for entity in &entities {
        if config.exclude.contains(&entity.name) {
            log::debug!("Excluding entity '{}' per config", entity.name);
            continue;
        }
        for provider in &providers {
            match compile_entity_for_provider(entity, *provider, kind) {
                Ok(contents) => {
                    let path = writer::output_path(output_root, *provider, kind, &entity.name);
                    if !opts.dry_run {
                        writer::write_document(&path, &contents).await?;
                    }
                    summary.documents.push(CompiledDocument { path, contents });
                }
                Err(Error::ProviderDisabled { .. }) => {
                    log::info!(
                        "Skipping entity '{}': disabled for provider '{}'",
                        entity.name,
                        provider
                    );
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(summary)
}
