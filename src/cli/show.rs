//! Show command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{empty_document, load_document, render_value};

#[derive(Args)]
pub struct ShowArgs {
    /// Config file to print
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Indent the output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let mut document = empty_document();
    load_document(&args.file, &mut document)?;
    println!("{}", render_value(&document, args.pretty)?);
    Ok(())
}
