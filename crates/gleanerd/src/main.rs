//! Command line interface for the gleaner paper analysis library.
//!
//! This crate provides the `gleaner` binary, which analyzes the papers of a
//! directory with the `gleaner` library. It supports:
//! - Listing the supported papers of a directory
//! - Analyzing a single paper, as a report or as JSON
//! - Analyzing a whole directory with per-paper error isolation
//! - Exporting analyses as JSON files
//! - An interactive menu combining all of the above
//!
//! # Usage
//!
//! ```bash
//! # List the papers of ./DOCS
//! gleaner list
//!
//! # Analyze the second paper without consulting the model
//! gleaner analyze 2 --no-model
//!
//! # Analyze everything in another directory and print the report as JSON
//! gleaner batch --papers-dir ~/papers --json
//!
//! # Analyze and export the first paper
//! gleaner export 1 --output-dir results
//!
//! # Interactive menu
//! gleaner
//! ```
//!
//! Settings are read from `<config dir>/gleaner/config.toml` unless `--config`
//! points elsewhere, and the command line flags override them. Logging detail
//! is raised with repeated `-v` flags.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use clap::{builder::ArgAction, Parser, Subcommand};
use console::style;
use gleaner::{analysis::OverallStatus, prelude::*};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
static WARNING_PREFIX: &str = "⚠️ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
static PROMPT_PREFIX: &str = "❯ ";
/// Continuation line for tree structure
static CONTINUE_PREFIX: &str = "│  ";
/// Vertical line for tree structure
static TREE_VERT: &str = "│";
/// Branch character for tree structure
static TREE_BRANCH: &str = "├";
/// Leaf character for tree structure (end of branch)
static TREE_LEAF: &str = "└";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Extract structured metadata from academic papers")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default
  /// platform-specific configuration directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Directory to scan for papers, overriding the configuration
  #[arg(long, global = true)]
  papers_dir: Option<PathBuf>,

  /// Never consult the language model, use heuristic extraction only
  #[arg(long, global = true)]
  no_model: bool,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Option<Commands>,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// Loads the configuration file and applies the command line overrides.
  fn load_config(&self) -> Result<Config> {
    let path = self.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(&path)?;
    if let Some(papers_dir) = &self.papers_dir {
      config = config.with_papers_dir(papers_dir);
    }
    if self.no_model {
      config = config.with_model_enabled(false);
    }
    debug!("Using configuration {config:?}");
    Ok(config)
  }
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used (0-4)
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// Logs go to stderr so that `--json` output stays parseable.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Runs the requested command, defaulting to the interactive menu.
async fn run(cli: &Cli) -> Result<()> {
  let gleaner = Gleaner::builder().with_config(cli.load_config()?).build();
  trace!("Built {gleaner:?}");

  match cli.command.clone().unwrap_or(Commands::Menu) {
    Commands::List => list(cli, &gleaner).await.map(|_| ()),
    Commands::Analyze(args) => analyze(cli, &gleaner, args).await.map(|_| ()),
    Commands::Batch(args) => batch(cli, &gleaner, args).await.map(|_| ()),
    Commands::Export(args) => export(cli, &gleaner, args).await.map(|_| ()),
    Commands::Menu => menu(cli, &gleaner).await,
  }
}

/// Entry point for the gleaner CLI application
///
/// Handles command line argument parsing, sets up logging, and executes
/// the requested command. Failures are printed to stderr and the process
/// exits with status 1.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  if let Err(e) = run(&cli).await {
    eprintln!("{} {}", style(ERROR_PREFIX).red(), style(e).red());
    std::process::exit(1);
  }
}
