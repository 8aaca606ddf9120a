//! Command line interface for the campus course progress tracker.
//!
//! This crate provides a CLI for driving the `campus` library from a
//! terminal. It supports operations like:
//! - Local state initialization and cleanup
//! - Course and lesson inspection with progress display
//! - Marking lessons watched and tracking course completion
//! - Notes, favorites, saved courses, and ratings
//! - Subscription status checks and certificate requests
//!
//! # Usage
//!
//! ```bash
//! # Initialize local state and a default config
//! campus init
//!
//! # Show a course with per-lesson progress
//! campus course rust-101
//!
//! # Mark a lesson watched
//! campus watch rust-101 rust-101-ownership
//!
//! # Take a note on a lesson
//! campus note add rust-101 rust-101-ownership "ownership moves values"
//!
//! # Request a certificate once the course completed
//! campus certificate rust-101
//! ```
//!
//! The CLI provides colored output and interactive confirmations for
//! destructive operations, and supports verbosity levels for debugging
//! through the `-v` flag.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use campus::{access::SubscriptionStatus, Campus, Config};
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod errors;
pub mod interaction;

use crate::{commands::*, errors::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "CLI for the campus course progress tracker")]
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

  /// Path to the local state store. If not specified, uses the default
  /// platform-specific data directory.
  #[arg(long, short, global = true)]
  path: Option<PathBuf>,

  /// Viewer id used to resolve subscription status. Omitted means signed
  /// out, which gates all video content.
  #[arg(long, short, global = true)]
  user: Option<String>,

  /// Directory for rotating log files; logs go to stderr when omitted
  #[arg(long, global = true)]
  log_dir: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// Builds the campus handle this invocation operates on.
  async fn campus(&self) -> errors::Result<Campus> {
    let config_file = Config::default_path().join("config.toml");
    let mut config =
      if config_file.is_file() { Config::from_file(&config_file)? } else { Config::default() };
    if let Some(path) = &self.path {
      config = config.with_database_path(path);
    }
    tracing::debug!(path = %config.database_path.display(), "opening local state");
    Ok(Campus::builder().with_config(config).build().await?)
  }

  /// Resolves the viewer's subscription status for gating display.
  async fn subscription_status(&self, campus: &Campus) -> SubscriptionStatus {
    campus.resolve_viewer(self.user.as_deref()).await
  }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// When `log_dir` is given, output goes to a daily-rotating file instead of
/// stderr; the returned guard must stay alive for the process duration.
fn setup_logging(verbosity: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  match log_dir {
    Some(dir) => {
      let appender = tracing_appender::rolling::daily(dir, "campusd.log");
      let (writer, guard) = tracing_appender::non_blocking(appender);
      tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
      Some(guard)
    },
    None => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
      None
    },
  }
}

/// Entry point for the campusd CLI application
///
/// Handles command line argument parsing, sets up logging, and executes the
/// requested command.
#[tokio::main]
async fn main() -> errors::Result<()> {
  let cli = Cli::parse();
  let _guard = setup_logging(cli.verbose, cli.log_dir.as_deref());

  let campus = match cli.campus().await {
    Ok(campus) => campus,
    Err(e) => {
      eprintln!("{} Failed to open local state: {}", style(ERROR_PREFIX).red(), e);
      return Err(e);
    },
  };

  match &cli.command {
    Commands::Init => init(&cli, campus).await,
    Commands::Course { course_id } => course(&cli, campus, course_id).await,
    Commands::Watch(args) => watch(&cli, campus, args).await,
    Commands::Unwatch(args) => unwatch(&cli, campus, args).await,
    Commands::Progress { course_id } => progress(&cli, campus, course_id).await,
    Commands::Completed => completed(&cli, campus).await,
    Commands::Favorite { course_id, lesson_id } => favorite(&cli, campus, course_id, lesson_id).await,
    Commands::Favorites => favorites(&cli, campus).await,
    Commands::Note { cmd } => note(&cli, campus, cmd).await,
    Commands::Save { course_id } => save(&cli, campus, course_id).await,
    Commands::Rate { course_id, stars } => rate(&cli, campus, course_id, *stars).await,
    Commands::Subscription => subscription(&cli, campus).await,
    Commands::Certificate { course_id } => certificate(&cli, campus, course_id).await,
    Commands::Clean => clean(&cli, campus).await,
  }
}
