//! Error types for config loading and storing

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a load, store or serialize call.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Failed accessing config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON, or does not fit the record's shape.
    #[error("Invalid JSON in config file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be serialized.
    #[error("Failed encoding config as JSON: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// Raised by the record's own validation hook, passed through untouched.
    #[error(transparent)]
    Validation(anyhow::Error),
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn decode(path: &Path, source: serde_json::Error) -> Self {
        Self::Decode { path: path.to_path_buf(), source }
    }

    /// The file this error concerns, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } => Some(path),
            Self::Encode { .. } | Self::Validation(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Outcome of a failed [`load_required`](crate::config::load_required).
#[derive(Error, Debug)]
pub enum RequiredLoadError {
    /// The config could not be read or decoded at all.
    #[error(transparent)]
    Fatal(#[from] FatalError),

    /// The config decoded but its validation hook rejected it.
    #[error(transparent)]
    Invalid(anyhow::Error),

    /// The record's current state could not be serialized to merge over.
    #[error(transparent)]
    Encode(ConfigError),
}

/// A config the process cannot start without was unreadable or undecodable.
#[derive(Error, Debug)]
#[error("{}", fatal_message(.cause))]
pub struct FatalError {
    #[source]
    cause: ConfigError,
}

impl FatalError {
    pub(crate) fn new(cause: ConfigError) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> &ConfigError {
        &self.cause
    }

    pub fn into_cause(self) -> ConfigError {
        self.cause
    }

    /// Operator-facing message naming the file and the underlying error.
    pub fn message(&self) -> String {
        fatal_message(&self.cause)
    }

    /// Report on stderr and terminate the process with `code`.
    pub fn exit(&self, code: i32) -> ! {
        eprintln!("{}", self.message());
        std::process::exit(code)
    }
}

fn fatal_message(cause: &ConfigError) -> String {
    match cause {
        ConfigError::Io { path, source } => {
            format!("File: [{}]. Error: {}", path.display(), source)
        }
        ConfigError::Decode { path, source } => format!(
            "Json content could not be parsed for file: [{}]. Error: {}",
            path.display(),
            source
        ),
        other => other.to_string(),
    }
}
