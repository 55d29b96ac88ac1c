//! Set command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{assign, empty_document, load_document, parse_value};

#[derive(Args)]
pub struct SetArgs {
    /// Config file to update
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Dotted key path, e.g. 'server.port'
    #[arg(value_name = "KEY")]
    pub key: String,

    /// New value; parsed as JSON, otherwise taken as a string
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Start from an empty object if FILE does not exist
    #[arg(long)]
    pub create: bool,

    /// Write indented JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: SetArgs) -> Result<()> {
    let mut document = empty_document();
    if args.create && !args.file.exists() {
        tracing::debug!(path = %args.file.display(), "creating new config file");
    } else {
        load_document(&args.file, &mut document)?;
    }

    assign(&mut document, &args.key, parse_value(&args.value))?;

    let stored = if args.pretty {
        jsonconf::store_pretty(&args.file, &document)
    } else {
        jsonconf::store(&args.file, &document)
    };
    stored.with_context(|| format!("Failed writing {}", args.file.display()))?;

    println!("Updated {}", args.file.display());
    Ok(())
}
