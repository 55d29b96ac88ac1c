//! Check command implementation

use anyhow::{bail, Result};
use clap::Args;
use jsonconf::ConfigRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::utils::{load_document, lookup};

#[derive(Args)]
pub struct CheckArgs {
    /// Config file to check
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Dotted key path that must be present (repeatable)
    #[arg(short, long = "require", value_name = "KEY")]
    pub required: Vec<String>,
}

/// A config document whose top level must be a JSON object.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct ConfigObject(Value);

impl ConfigRecord for ConfigObject {
    fn validate(&self, path: &Path) -> Result<()> {
        if !self.0.is_object() {
            bail!("{}: top-level value must be a JSON object", path.display());
        }
        Ok(())
    }
}

pub fn run(args: CheckArgs) -> Result<()> {
    let mut document = ConfigObject(Value::Object(Map::new()));
    load_document(&args.file, &mut document)?;

    let mut missing = Vec::new();
    for key in &args.required {
        if lookup(&document.0, key)?.is_none() {
            missing.push(key.as_str());
        }
    }
    if !missing.is_empty() {
        bail!("{} is missing required key(s): {}", args.file.display(), missing.join(", "));
    }

    println!("OK: {}", jsonconf::utils::absolute_path(&args.file).display());
    Ok(())
}
