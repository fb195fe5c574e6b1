//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use super::commands;
use docref::config::Config;
use docref::output::OutputMode;

/// docref - Check fixer names and future imports mentioned in documentation
#[derive(Parser, Debug)]
#[command(
    name = "docref",
    version,
    about = "Check fixer names and future imports mentioned in documentation",
    long_about = "Scan reStructuredText documentation for references that can go stale.\n\n\
                  Fixer names (lib2to3.fixes.fix_print) are checked against the fixers the\n\
                  modernize tool lists. Statements like `from __future__ import division`\n\
                  are executed by the interpreter and must exit cleanly."
)]
pub struct Cli {
    /// Config file (default: ./docref.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Documentation root (overrides config)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Seconds an oracle process may run (overrides config)
    #[arg(short, long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that every mentioned fixer exists
    Fixers,

    /// Check that every mentioned `from __future__ import` runs
    FutureImports,

    /// Run every check
    All,

    /// List the documentation files that would be checked
    List,

    /// Show version
    Version,
}

/// Load config from `--config` or the working directory, then apply flags
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            Config::discover(&cwd)?
        },
    };

    if let Some(root) = &cli.root {
        config.corpus.root.clone_from(root);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    config.validate()?;
    Ok(config)
}

/// Run the CLI
///
/// Returns `Ok(false)` when a check found bad references.
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("docref v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(true)
        },
        Some(Command::Fixers) => commands::fixers(&load_config(&cli)?, output_mode),
        Some(Command::FutureImports) => commands::future_imports(&load_config(&cli)?, output_mode),
        Some(Command::All) => commands::all(&load_config(&cli)?, output_mode),
        Some(Command::List) => commands::list(&load_config(&cli)?, output_mode),
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("docref v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'docref --help' for usage");
                println!("Run 'docref all' to check the documentation");
            }
            Ok(true)
        },
    }
}
