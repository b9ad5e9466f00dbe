// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Trie - Main entrypoint.
//!
//! Loads configuration and dictionaries, then runs a single query or an
//! interactive command session against the resulting trie.

use clap::{Parser, Subcommand};
use lau_trie_lib::config::{self, ConfigLoader, LauConfig, LogConfig, OutputFormat};
use lau_trie_lib::dictionary;
use lau_trie_lib::error::{
    report_error, set_error_reporter, ErrorContext, LauError, LauResult, TracingErrorReporter,
};
use lau_trie_lib::session::{Session, SessionCommand};
use lau_trie_lib::LauTrie;
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lau Trie.
#[derive(Parser, Debug)]
#[clap(name = "lau_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, may be repeated
    #[clap(short, long = "words", value_parser)]
    words: Vec<PathBuf>,

    /// Write results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a word is stored
    Exists {
        /// The word to look up
        word: String,
    },

    /// List stored words starting with a prefix
    Search {
        /// The prefix to search for
        prefix: String,
    },

    /// Print the level-order rendering of the trie
    Dump,

    /// Read session commands from standard input
    Shell,

    /// Validate the configuration and dictionaries
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    /// Name of the subcommand as typed on the command line.
    fn name(&self) -> &'static str {
        match self {
            Command::Exists { .. } => "exists",
            Command::Search { .. } => "search",
            Command::Dump => "dump",
            Command::Shell => "shell",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Initialize the logging system.
fn init_logging(config: &LogConfig) -> LauResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the trie from every configured dictionary.
fn build_trie(config: &LauConfig) -> LauResult<LauTrie> {
    let mut trie = LauTrie::new();
    dictionary::load_all(&mut trie, &config.dictionary)?;
    Ok(trie)
}

/// Runs a single session command against a freshly loaded trie.
fn run_once(config: &LauConfig, command: SessionCommand) -> LauResult<()> {
    let trie = build_trie(config)?;
    let name = command.name();
    let mut session = Session::new(trie, io::stdout().lock(), config.output.format);
    let executed = session.execute_all([command])?;
    debug!(command = name, executed, "single command finished");
    Ok(())
}

fn run(command: Command, config: &LauConfig) -> LauResult<()> {
    match command {
        Command::Exists { word } => run_once(config, SessionCommand::Exists(word)),
        Command::Search { prefix } => run_once(config, SessionCommand::Search(prefix)),
        Command::Dump => run_once(config, SessionCommand::Dump),
        Command::Shell => {
            let trie = build_trie(config)?;
            info!(words = trie.len(), "starting session");
            let mut session = Session::new(trie, io::stdout().lock(), config.output.format);
            let executed = session.run(io::stdin().lock())?;
            info!(commands = executed, "session finished");
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration and dictionaries");
            let trie = build_trie(config)?;
            info!(words = trie.len(), "Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let toml = LauConfig::default().to_toml()?;

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() -> LauResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let mut config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    config.dictionary.paths.extend(args.words);
    if args.json {
        config.output.format = OutputFormat::Json;
    }

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = args.command.unwrap_or(Command::Shell);
    let command_name = command.name();
    if let Err(e) = run(command, &config) {
        report_error(
            ErrorContext::new(e, "lau_trie").with_details(format!("while running '{command_name}'")),
        );
        process::exit(1);
    }

    Ok(())
}
