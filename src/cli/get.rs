//! Get command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{empty_document, load_document, lookup, render_value};

#[derive(Args)]
pub struct GetArgs {
    /// Config file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Dotted key path, e.g. 'server.port'
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Indent object and array values
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: GetArgs) -> Result<()> {
    let mut document = empty_document();
    load_document(&args.file, &mut document)?;

    let Some(value) = lookup(&document, &args.key)? else {
        bail!("Key '{}' not found in {}", args.key, args.file.display());
    };
    println!("{}", render_value(value, args.pretty)?);
    Ok(())
}
