//! agentc CLI entrypoint
//! Parses command-line arguments and dispatches to the core compiler.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use agentc_core::{
    compile_entity_for_provider, generate, writer, Config, Entity, Error as CoreError,
    GenerateOptions, GenerateSummary, Provider, TemplateKind,
};
use anyhow::Context;
use clap::Parser;
use reqwest::Url;

#[derive(Parser)]
#[command(name = "agentc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    // TODO: Add a `validate` subcommand that checks entities without writing output
    /// Compile entity definitions into provider configuration files
    Compile {
        /// Path to an agentc.yaml config file
        ///
        /// When omitted, ./agentc.yaml is used if present, otherwise defaults apply.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory containing entity definition files
        #[arg(long)]
        entities: Option<PathBuf>,
        /// Single entity file to compile; may be repeated
        ///
        /// Can be a local file path or an HTTP/HTTPS URL
        /// Example: --entity entities/reviewer.yaml
        /// Example: --entity https://example.com/reviewer.yaml
        #[arg(long)]
        entity: Vec<String>,
        /// Provider to compile for; may be repeated (default: from config)
        #[arg(long, value_enum)]
        provider: Vec<Provider>,
        /// Template kind to compile (default: from config)
        #[arg(long, value_enum)]
        template_kind: Option<TemplateKind>,
        /// Output root the provider directories are created under
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Print compiled documents instead of writing files
        #[arg(long)]
        dry_run: bool,
        /// Watch the entities directory and recompile on changes
        #[arg(long)]
        watch: bool,
    },
    /// List supported providers and template kinds
    List {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(serde::Serialize)]
struct Catalog {
    providers: Vec<&'static str>,
    template_kinds: Vec<&'static str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Compile {
            config,
            entities,
            entity,
            provider,
            template_kind,
            output_dir,
            dry_run,
            watch,
        } => {
            let mut config = load_config(config).await?;
            if let Some(entities) = entities {
                config.entities_dir = entities.to_string_lossy().to_string();
            }
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir.to_string_lossy().to_string();
            }
            log::debug!(
                "Compiling from '{}' into '{}'",
                config.entities_dir,
                config.output_dir
            );

            if !entity.is_empty() {
                if *watch {
                    anyhow::bail!("--watch only applies to directory compilation, not --entity");
                }
                let providers = resolve_providers(provider, &config)?;
                let kind = match template_kind {
                    Some(kind) => *kind,
                    None => config.template_kind.parse()?,
                };
                compile_entity_args(entity, &config, &providers, kind, *dry_run).await?;
                return Ok(());
            }

            let opts = GenerateOptions {
                providers: provider.clone(),
                template_kind: *template_kind,
                dry_run: *dry_run,
            };
            let summary = generate(&config, &opts)
                .await
                .context("Compilation failed")?;
            print_summary(&summary, *dry_run);

            if *watch {
                watch_and_recompile(&config, &opts).await?;
            }
        }
        Commands::List { json } => {
            if *json {
                let catalog = Catalog {
                    providers: Provider::all().map(|p| p.as_str()).collect(),
                    template_kinds: TemplateKind::all().map(|k| k.as_str()).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                println!("Providers:");
                for provider in Provider::all() {
                    println!("  {}", provider.as_str());
                }
                println!("Template kinds:");
                for kind in TemplateKind::all() {
                    println!("  {}", kind.as_str());
                }
            }
        }
    }
    Ok(())
}

/// Load the config file, falling back to ./agentc.yaml and then to defaults.
async fn load_config(path: &Option<PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            Config::from_file(path)
                .await
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => {
            let default_path = Path::new("agentc.yaml");
            if default_path.exists() {
                tracing::debug!("Loading config from {}", default_path.display());
                Config::from_file(default_path)
                    .await
                    .context("Failed to load agentc.yaml")
            } else {
                tracing::debug!("No config file found, using built-in defaults");
                Ok(Config::default())
            }
        }
    }
}

/// Providers from the command line, or the config's list when none are given.
fn resolve_providers(cli_providers: &[Provider], config: &Config) -> anyhow::Result<Vec<Provider>> {
    if !cli_providers.is_empty() {
        return Ok(cli_providers.to_vec());
    }
    config
        .providers
        .iter()
        .map(|name| {
            name.parse::<Provider>()
                .map_err(|e| anyhow::anyhow!("Invalid provider in config: {}", e))
        })
        .collect()
}

/// Compile entities named on the command line, bypassing directory discovery.
async fn compile_entity_args(
    entity_args: &[String],
    config: &Config,
    providers: &[Provider],
    kind: TemplateKind,
    dry_run: bool,
) -> anyhow::Result<()> {
    let output_root = PathBuf::from(&config.output_dir);
    let mut written = 0usize;
    let mut skipped = 0usize;

    for arg in entity_args {
        let entity = load_entity_arg(arg).await?;
        for provider in providers {
            match compile_entity_for_provider(&entity, *provider, kind) {
                Ok(contents) => {
                    let path = writer::output_path(&output_root, *provider, kind, &entity.name);
                    if dry_run {
                        println!("----- {} -----", path.display());
                        print!("{}", contents);
                        println!();
                    } else {
                        writer::write_document(&path, &contents).await?;
                        println!("Wrote {}", path.display());
                    }
                    written += 1;
                }
                Err(CoreError::ProviderDisabled { .. }) => {
                    println!(
                        "Skipped '{}': disabled for provider '{}'",
                        entity.name, provider
                    );
                    skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    println!("✅ Compiled {} documents ({} skipped)", written, skipped);
    Ok(())
}

/// Load an entity from either a file path or an HTTP/HTTPS URL.
async fn load_entity_arg(arg: &str) -> anyhow::Result<Entity> {
    if arg.starts_with("http://") || arg.starts_with("https://") {
        let url = Url::parse(arg).with_context(|| format!("Invalid entity URL: {}", arg))?;

        tracing::debug!("Fetching entity from {}", url);
        let response = reqwest::get(url.clone())
            .await
            .with_context(|| format!("Failed to fetch entity from {}", arg))?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Failed to fetch entity from {}: HTTP {}",
                arg,
                response.status()
            ));
        }

        let content = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {}", arg))?;

        // Entity::from_file picks the parser by extension, so keep the file
        // name from the URL when staging the download.
        let file_name = url
            .path_segments()
            .and_then(|segments| segments.last())
            .filter(|name| !name.is_empty())
            .unwrap_or("entity.yaml")
            .to_string();
        let temp_dir = tempfile::tempdir()?;
        let temp_file = temp_dir.path().join(file_name);
        tokio::fs::write(&temp_file, &content).await?;

        Entity::from_file(&temp_file)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse entity from {}: {}", arg, e))
    } else {
        Entity::from_file(arg)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load entity {}: {}", arg, e))
    }
}

fn print_summary(summary: &GenerateSummary, dry_run: bool) {
    if dry_run {
        for doc in &summary.documents {
            println!("----- {} -----", doc.path.display());
            print!("{}", doc.contents);
            println!();
        }
    } else {
        for doc in &summary.documents {
            println!("Wrote {}", doc.path.display());
        }
    }
    println!(
        "✅ Compiled {} documents ({} skipped)",
        summary.documents.len(),
        summary.skipped
    );
}

/// Re-run directory compilation whenever an entity file changes.
async fn watch_and_recompile(config: &Config, opts: &GenerateOptions) -> anyhow::Result<()> {
    use notify::{Event, EventKind, RecursiveMode, Watcher};

    let entities_dir = agentc_core::loader::resolve_entities_dir(&config.entities_dir)?;
    let (tx, rx) = std::sync::mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx)?;
    watcher.watch(&entities_dir, RecursiveMode::Recursive)?;

    println!(
        "Watching {} for changes (Ctrl-C to stop)",
        entities_dir.display()
    );
    for event in rx {
        let event = event.context("Watch error")?;
        let touched_entity = matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) && event
            .paths
            .iter()
            .any(|path| agentc_core::loader::is_entity_file(path));
        if !touched_entity {
            continue;
        }

        tracing::debug!("Entity change detected: {:?}", event.paths);
        match generate(config, opts).await {
            Ok(summary) => print_summary(&summary, opts.dry_run),
            Err(e) => eprintln!("Compilation failed: {}", e),
        }
    }
    Ok(())
}
