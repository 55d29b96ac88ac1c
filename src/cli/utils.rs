//! Shared CLI utilities.

use anyhow::{bail, Result};
use jsonconf::{load_required, ConfigRecord, RequiredLoadError};
use serde_json::{Map, Value};
use std::path::Path;

/// Required-load a config file into `record`.
///
/// Unreadable or unparsable files surface as [`jsonconf::FatalError`] so the
/// entry point can exit with the configured status.
pub fn load_document<T: ConfigRecord>(path: &Path, record: &mut T) -> Result<()> {
    load_required(path, record).map_err(|err| match err {
        RequiredLoadError::Fatal(fatal) => anyhow::Error::new(fatal),
        RequiredLoadError::Invalid(inner) => inner,
        RequiredLoadError::Encode(err) => anyhow::Error::new(err),
    })
}

pub fn empty_document() -> Value {
    Value::Object(Map::new())
}

/// Split a dotted key path (`server.port`) into its segments.
pub fn split_key(key: &str) -> Result<Vec<&str>> {
    let segments: Vec<&str> = key.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        bail!("Invalid key path '{}'", key);
    }
    Ok(segments)
}

pub fn lookup<'a>(document: &'a Value, key: &str) -> Result<Option<&'a Value>> {
    let mut current = document;
    for segment in split_key(key)? {
        match current.get(segment) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Set `key` to `value`, creating intermediate objects as needed.
pub fn assign(document: &mut Value, key: &str, value: Value) -> Result<()> {
    let segments = split_key(key)?;
    let Some((last, parents)) = segments.split_last() else {
        bail!("Invalid key path '{}'", key);
    };

    let mut current = document;
    for (depth, segment) in parents.iter().enumerate() {
        let Some(map) = current.as_object_mut() else {
            bail!("Cannot set '{}': {}", key, not_an_object(&segments[..depth]));
        };
        current = map.entry(segment.to_string()).or_insert_with(empty_document);
    }

    let Some(map) = current.as_object_mut() else {
        bail!("Cannot set '{}': {}", key, not_an_object(parents));
    };
    map.insert(last.to_string(), value);
    Ok(())
}

fn not_an_object(segments: &[&str]) -> String {
    if segments.is_empty() {
        "top-level value is not an object".to_string()
    } else {
        format!("'{}' is not an object", segments.join("."))
    }
}

/// Parse a value given on the command line: JSON if it parses, otherwise a string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Render a value for the terminal; strings are printed without quotes.
pub fn render_value(value: &Value, pretty: bool) -> Result<String> {
    Ok(match value {
        Value::String(s) => s.clone(),
        other if pretty => jsonconf::to_json_string_pretty(other)?,
        other => jsonconf::to_json_string(other)?,
    })
}
