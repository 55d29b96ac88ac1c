//! Command-line interface for jsonconf
//!
//! Provides `show`, `get`, `set`, `merge` and `check` subcommands over JSON
//! config files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jsonconf::FatalError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod get;
mod merge;
mod set;
mod show;
mod utils;

/// Inspect, edit and validate JSON config files
#[derive(Parser)]
#[command(name = "jsonconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Exit status used when a config file cannot be read or parsed
    #[arg(
        long,
        global = true,
        value_name = "CODE",
        env = "JSONCONF_EXIT_CODE",
        default_value_t = 1
    )]
    exit_code: i32,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a config file as JSON
    Show(show::ShowArgs),

    /// Print the value at a dotted key path
    Get(get::GetArgs),

    /// Set the value at a dotted key path and write the file back
    Set(set::SetArgs),

    /// Merge overlay files into a config file
    Merge(merge::MergeArgs),

    /// Check that a config file parses and has the required keys
    Check(check::CheckArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Get(args) => get::run(args),
        Commands::Set(args) => set::run(args),
        Commands::Merge(args) => merge::run(args),
        Commands::Check(args) => check::run(args),
    };

    if let Err(err) = &result {
        if let Some(fatal) = err.downcast_ref::<FatalError>() {
            fatal.exit(cli.exit_code);
        }
    }
    result
}
