//! The record capability loaded into and stored from JSON

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// A structured value that can be loaded from a JSON config file.
///
/// Implementing the trait without overriding [`validate`](Self::validate)
/// opts out of validation:
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Default, Serialize, Deserialize)]
/// struct Settings {
///     name: String,
/// }
///
/// impl jsonconf::ConfigRecord for Settings {}
/// ```
///
/// Loading decodes the file over the record's serialized state, so fields
/// the file omits keep their values. A few serde attributes need care:
///
/// - `#[serde(skip)]` fields never reach JSON and come back as `Default`;
///   move them across in [`carry_over`](Self::carry_over).
/// - Fields left out by `skip_serializing_if` and not named in the file are
///   filled with their empty value (`""`, `0`, `[]`, ...), not their
///   `#[serde(default)]`.
/// - `null` clears `Option` fields and leaves other fields unchanged.
/// - Keys match field names exactly, case included.
pub trait ConfigRecord: Serialize + DeserializeOwned {
    /// Check domain rules after the record has been decoded.
    ///
    /// Receives the absolute path of the file the record was loaded from.
    /// Whatever error is returned reaches the caller unchanged.
    fn validate(&self, _path: &Path) -> anyhow::Result<()> {
        Ok(())
    }

    /// Take over state from the record this one replaces during a load.
    ///
    /// Runs before [`validate`](Self::validate).
    fn carry_over(&mut self, _previous: Self) {}
}

impl ConfigRecord for Value {}

impl ConfigRecord for Map<String, Value> {}
