//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{empty_document, load_document};

#[derive(Args)]
pub struct MergeArgs {
    /// Base config file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Files merged over the base, in order; later files win
    #[arg(value_name = "OVERLAY", required = true)]
    pub overlays: Vec<PathBuf>,

    /// Write the result here instead of back to FILE
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write indented JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let mut document = empty_document();
    load_document(&args.file, &mut document)?;
    for overlay in &args.overlays {
        load_document(overlay, &mut document)?;
        tracing::debug!(overlay = %overlay.display(), "merged overlay");
    }

    let target = args.output.as_ref().unwrap_or(&args.file);
    let stored = if args.pretty {
        jsonconf::store_pretty(target, &document)
    } else {
        jsonconf::store(target, &document)
    };
    stored.with_context(|| format!("Failed writing {}", target.display()))?;

    println!("Merged {} file(s) into {}", args.overlays.len(), target.display());
    Ok(())
}
