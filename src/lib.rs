//! jsonconf: load, validate and persist JSON configuration records
//!
//! A record is any serde type implementing [`ConfigRecord`]. Loading decodes a
//! file over the record's current values, then runs the record's validation
//! hook; storing writes the record back as JSON.
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//! use std::path::Path;
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct Settings {
//!     name: String,
//!     port: u16,
//! }
//!
//! impl jsonconf::ConfigRecord for Settings {
//!     fn validate(&self, path: &Path) -> anyhow::Result<()> {
//!         anyhow::ensure!(self.port != 0, "{}: port must be set", path.display());
//!         Ok(())
//!     }
//! }
//!
//! let mut settings = Settings { port: 8080, ..Default::default() };
//! jsonconf::load("settings.json", &mut settings)?;
//! jsonconf::store("settings.json", &settings)?;
//! # Ok::<(), jsonconf::ConfigError>(())
//! ```

pub mod config;
pub mod utils;

pub use config::{
    load, load_or_default, load_required, merge_json, store, store_pretty, to_json_string,
    to_json_string_pretty, ConfigError, ConfigRecord, FatalError, RequiredLoadError,
};
