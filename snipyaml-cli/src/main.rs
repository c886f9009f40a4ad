//! snipyaml CLI - edit snippet JSON files through a YAML representation
//!
//! Exposes the conversion engine to a shell-driven host: `list` shows the
//! available snippet targets, `edit` creates the YAML editing file, `sync`
//! mirrors a document-saved notification and `close` mirrors a
//! document-closed notification.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use snipyaml_core::config::Settings;
use snipyaml_core::listing::{self, HostContext, TargetKind};
use snipyaml_core::namespace::Namespace;
use snipyaml_core::{convert, hooks};

/// Command-line interface for editing snippet files through YAML
#[derive(Parser)]
#[command(name = "snipyaml")]
#[command(author, version, about = "Edit snippet JSON files through YAML")]
#[command(propagate_version = true)]
struct Cli {
    /// Per-language snippets directory (overrides the configured location)
    #[arg(short = 'd', long, global = true, value_name = "DIR")]
    snippets_dir: Option<PathBuf>,

    /// Operate on per-project .code-snippets files in the given directory
    #[arg(short = 'p', long, global = true, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// List snippet targets
    #[command(about = "List languages and snippet files available for editing")]
    List,

    /// Create or refresh the YAML editing file for a target
    #[command(about = "Convert a snippet file to YAML for editing")]
    Edit {
        /// Language identifier (the canonical file stem)
        language: String,
    },

    /// Write the canonical file back from a YAML editing file
    #[command(about = "Convert a YAML editing file back to its canonical form")]
    Sync {
        /// Path to the YAML editing file
        file: PathBuf,
    },

    /// Write back and remove a YAML editing file
    #[command(about = "Convert a YAML editing file back and remove it")]
    Close {
        /// Path to the YAML editing file
        file: PathBuf,
    },
}

/// CLI-specific error type
#[derive(Debug, Error)]
enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Conversion error
    #[error("{0}")]
    Convert(#[from] snipyaml_core::ConvertError),

    /// Path is not an editing file of the selected namespace
    #[error("Not a snippet editing file for this namespace: {0}")]
    NotManaged(PathBuf),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = Settings::load().map_err(|e| CliError::Config(e.to_string()))?;
    let namespace = resolve_namespace(cli, &settings)?;

    match &cli.command {
        Commands::List => cmd_list(&namespace, &settings),
        Commands::Edit { language } => cmd_edit(&namespace, language),
        Commands::Sync { file } => cmd_sync(&namespace, file),
        Commands::Close { file } => cmd_close(&namespace, file),
    }
}

/// Selects the namespace the command operates on: the project scope when
/// `--project-dir` is given, otherwise the per-language user scope.
fn resolve_namespace(cli: &Cli, settings: &Settings) -> Result<Namespace, CliError> {
    if let Some(dir) = &cli.project_dir {
        return Ok(Namespace::project_snippets(dir.clone()));
    }
    let dir = match &cli.snippets_dir {
        Some(dir) => dir.clone(),
        None => settings
            .snippets_dir()
            .map_err(|e| CliError::Config(e.to_string()))?,
    };
    Ok(Namespace::user_snippets(dir))
}

/// List command handler
fn cmd_list(namespace: &Namespace, settings: &Settings) -> Result<(), CliError> {
    let existing = listing::existing_snippet_stems(namespace);
    let ctx = HostContext {
        languages: settings.languages.clone(),
        active_language: None,
    };

    for target in listing::list_targets(namespace, &ctx, &existing) {
        let marker = match target.kind {
            TargetKind::Active => '*',
            TargetKind::Existing => '+',
            TargetKind::New => '-',
        };
        println!("{marker} {:<20} {}", target.language, target.path.display());
    }
    Ok(())
}

/// Edit command handler: writes the YAML editing file and prints its path
fn cmd_edit(namespace: &Namespace, language: &str) -> Result<(), CliError> {
    let source = namespace.canonical_path(language);
    let exists = source.exists();
    let editing = convert::to_editing_format(&source, exists)?;
    println!("{}", editing.display());
    Ok(())
}

/// Sync command handler: the document-saved reaction
fn cmd_sync(namespace: &Namespace, file: &Path) -> Result<(), CliError> {
    match hooks::on_editing_saved(file, namespace)? {
        Some(canonical) => {
            println!("{}", canonical.display());
            Ok(())
        }
        None => Err(CliError::NotManaged(file.to_path_buf())),
    }
}

/// Close command handler: the document-closed reaction
fn cmd_close(namespace: &Namespace, file: &Path) -> Result<(), CliError> {
    match hooks::on_editing_closed(file, namespace)? {
        Some(canonical) => {
            println!("{}", canonical.display());
            Ok(())
        }
        None => Err(CliError::NotManaged(file.to_path_buf())),
    }
}
