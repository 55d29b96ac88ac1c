//! Config file loading
//!
//! Two conventions share one core: [`load`] returns every failure to the
//! caller, [`load_required`] marks read and decode failures as fatal so a
//! process entry point can refuse to start.

use super::error::{ConfigError, FatalError, RequiredLoadError};
use super::lenient::from_value_lenient;
use super::merge::{merge_json, strip_nulls};
use super::record::ConfigRecord;
use crate::utils::absolute_path;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load the JSON file at `path` into `record`, then run its validation hook.
///
/// Keys missing from the file leave the record's current values alone and
/// keys the record does not know are ignored. If reading or decoding fails
/// the record is not modified.
pub fn load<T: ConfigRecord>(path: impl AsRef<Path>, record: &mut T) -> Result<(), ConfigError> {
    let path = path.as_ref();
    decode_into(path, record)?;
    run_validation(path, record).map_err(ConfigError::Validation)
}

/// Like [`load`], for config the process cannot run without.
///
/// Read and decode failures come back as [`RequiredLoadError::Fatal`];
/// validation failures as [`RequiredLoadError::Invalid`] and a record that
/// cannot serialize its current state as [`RequiredLoadError::Encode`].
pub fn load_required<T: ConfigRecord>(
    path: impl AsRef<Path>,
    record: &mut T,
) -> Result<(), RequiredLoadError> {
    let path = path.as_ref();
    decode_into(path, record).map_err(|err| match err {
        ConfigError::Encode { .. } => RequiredLoadError::Encode(err),
        other => RequiredLoadError::Fatal(FatalError::new(other)),
    })?;
    run_validation(path, record).map_err(RequiredLoadError::Invalid)
}

/// Load `path` into a fresh `T::default()`.
pub fn load_or_default<T: ConfigRecord + Default>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let mut record = T::default();
    load(path, &mut record)?;
    Ok(record)
}

fn decode_into<T: ConfigRecord>(path: &Path, record: &mut T) -> Result<(), ConfigError> {
    let bytes = fs::read(path).map_err(|e| ConfigError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read config file");

    let document: Value = serde_json::from_slice(&bytes).map_err(|e| ConfigError::decode(path, e))?;

    // Decode over the record's current state so absent keys keep their values.
    let prior = serde_json::to_value(&*record).map_err(|source| ConfigError::Encode { source })?;
    let mut merged = prior.clone();
    merge_json(&mut merged, document.clone());

    let decoded: T = match serde_json::from_value(merged) {
        Ok(decoded) => decoded,
        Err(strict) => {
            // Fields the record did not serialize, and nulls aimed at
            // non-optional fields, fall back to the prior or empty value.
            let mut overlay = document;
            strip_nulls(&mut overlay, &prior);
            let mut merged = prior;
            merge_json(&mut merged, overlay);
            from_value_lenient(merged).map_err(|_| ConfigError::decode(path, strict))?
        }
    };

    let previous = std::mem::replace(record, decoded);
    record.carry_over(previous);
    Ok(())
}

fn run_validation<T: ConfigRecord>(path: &Path, record: &T) -> anyhow::Result<()> {
    let resolved = absolute_path(path);
    tracing::debug!(path = %resolved.display(), "validating config");
    record.validate(&resolved)
}
