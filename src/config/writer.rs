//! Serializing records to JSON text and files

use super::error::ConfigError;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Serialize `record` as compact JSON, fields in declaration order.
pub fn to_json_string<T: Serialize + ?Sized>(record: &T) -> Result<String, ConfigError> {
    serde_json::to_string(record).map_err(|source| ConfigError::Encode { source })
}

/// Serialize `record` as indented JSON.
pub fn to_json_string_pretty<T: Serialize + ?Sized>(record: &T) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(record).map_err(|source| ConfigError::Encode { source })
}

/// Write `record` to `path` as compact JSON, creating or truncating the file.
///
/// Nothing is written if the record fails to serialize.
pub fn store<T: Serialize + ?Sized>(path: impl AsRef<Path>, record: &T) -> Result<(), ConfigError> {
    let text = to_json_string(record)?;
    write_file(path.as_ref(), text.as_bytes())
}

/// Write `record` to `path` as indented JSON with a trailing newline.
pub fn store_pretty<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    record: &T,
) -> Result<(), ConfigError> {
    let mut text = to_json_string_pretty(record)?;
    text.push('\n');
    write_file(path.as_ref(), text.as_bytes())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ConfigError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        // Before umask. Not suitable for secrets.
        options.mode(0o666);
    }

    let mut file = options.open(path).map_err(|e| ConfigError::io(path, e))?;
    file.write_all(bytes).map_err(|e| ConfigError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote config file");
    Ok(())
}
