// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! docq - terminal client for a document-grounded Q&A backend.
//!
//! This is the binary entry point: it loads and validates configuration,
//! initializes logging, and dispatches to the chat REPL or the document
//! management subcommands.

mod chat;
mod docs;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use docq_config::DocqConfig;
use docq_core::{DocqError, PortalKey};
use tracing_subscriber::EnvFilter;

/// docq - ask questions against a portal's document knowledge base.
#[derive(Parser, Debug)]
#[command(name = "docq", version, about, long_about = None)]
struct Cli {
    /// Portal (knowledge-base partition) to operate on. Falls back to
    /// `app.portal` from the configuration.
    #[arg(long, global = true)]
    portal: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive chat session.
    Chat,
    /// Manage the portal's ingested documents.
    Docs {
        #[command(subcommand)]
        command: DocsCommands,
    },
    /// Inspect the effective configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DocsCommands {
    /// List ingested documents.
    List,
    /// Upload a document (.pdf, .docx, .md, .txt; max 10 MiB).
    Upload {
        /// Path of the file to ingest.
        file: PathBuf,
    },
    /// Delete a document by identifier (asks for confirmation).
    Delete {
        /// Document identifier as shown by `docs list`.
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the merged configuration as TOML.
    Show,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match docq_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            docq_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    let result = run(cli, &config).await;
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &DocqConfig) -> Result<(), DocqError> {
    match cli.command {
        Commands::Chat => {
            let portal = resolve_portal(cli.portal.as_deref(), config)?;
            chat::run_chat(config, portal).await
        }
        Commands::Docs { command } => {
            let portal = resolve_portal(cli.portal.as_deref(), config)?;
            match command {
                DocsCommands::List => docs::run_list(config, portal).await,
                DocsCommands::Upload { file } => docs::run_upload(config, portal, &file).await,
                DocsCommands::Delete { id } => docs::run_delete(config, portal, &id).await,
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let rendered = toml::to_string_pretty(config)
                    .map_err(|e| DocqError::Internal(format!("cannot render config: {e}")))?;
                print!("{rendered}");
                Ok(())
            }
        },
    }
}

/// Resolves the portal key: `--portal` flag first, then `app.portal` from
/// configuration. Either way the name goes through the one canonical
/// normalization.
fn resolve_portal(flag: Option<&str>, config: &DocqConfig) -> Result<PortalKey, DocqError> {
    let name = flag
        .or(config.app.portal.as_deref())
        .ok_or_else(|| {
            DocqError::Config(
                "no portal selected; pass --portal or set app.portal in docq.toml".into(),
            )
        })?;
    PortalKey::new(name)
}

/// Initializes the tracing subscriber from `app.log_level`, overridable via
/// `RUST_LOG`.
fn init_tracing(config: &DocqConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.app.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
