//! Jobswitch CLI - offline front end for the job-switch engine.
//!
//! Resolves and searches catalogs, lists the commands a configuration
//! would register, dispatches commands against a simulated host, and
//! migrates settings files.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jobswitch_telemetry::{LogConfig, LogFormat};

mod commands;
mod context;
mod sim;
mod theme;

use commands::{config, dispatch, list, resolve, search};
use context::Context;

/// Jobswitch - switch class/job and Phantom Job by chat command
#[derive(Parser)]
#[command(name = "jobswitch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format: pretty, compact (default) or json
    #[arg(long, global = true, default_value = "compact")]
    log_format: String,

    /// Directory holding class_jobs and phantom_jobs catalogs
    #[arg(long, global = true, env = "JOBSWITCH_CATALOG_DIR", default_value = "data")]
    catalog_dir: PathBuf,

    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true, env = "JOBSWITCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a class/job command (e.g. /pld) to its entry
    Resolve {
        /// The command as typed
        command: String,
    },

    /// Fuzzy-search the Phantom Job catalog
    Search {
        /// Search query (e.g. knight)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List the commands the current settings would register
    Commands,

    /// Run a command against a simulated host
    Dispatch {
        /// TOML file with the simulated zone and gearset table
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// The command as typed (e.g. /pld or /pj)
        command: String,

        /// Command arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// View and migrate settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective settings
    Show {
        /// Output format: json or toml
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Migrate a settings file to the current version
    Migrate {
        /// Settings file to migrate
        path: PathBuf,

        /// Rewrite the file in place instead of printing it
        #[arg(short, long)]
        write: bool,

        /// Output format: json or toml (defaults to the file's own)
        #[arg(short, long)]
        format: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let log_config = LogConfig::new(level).with_format(cli.log_format.parse::<LogFormat>()?);
    if let Err(e) = jobswitch_telemetry::setup_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let ctx = Context::new(cli.catalog_dir, cli.config);

    match cli.command {
        Commands::Resolve { command } => resolve::run_resolve(&ctx, &command)?,
        Commands::Search { query } => search::run_search(&ctx, &query.join(" "))?,
        Commands::Commands => list::run_commands(&ctx)?,
        Commands::Dispatch {
            state,
            command,
            args,
        } => dispatch::run_dispatch(&ctx, state.as_deref(), &command, &args)?,
        Commands::Config { command } => handle_config(&ctx, command)?,
    }

    Ok(())
}

fn handle_config(ctx: &Context, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { format } => config::show_config(ctx, &format),
        ConfigCommands::Migrate {
            path,
            write,
            format,
        } => config::migrate_config(&path, write, format.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dispatch_args_collected() {
        let cli = Cli::try_parse_from(["jobswitch", "dispatch", "/pj", "time", "mage"]).unwrap();
        match cli.command {
            Commands::Dispatch { command, args, .. } => {
                assert_eq!(command, "/pj");
                assert_eq!(args, vec!["time", "mage"]);
            },
            _ => panic!("expected dispatch"),
        }
    }
}
