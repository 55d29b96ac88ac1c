//! Loading, validating and storing JSON config records
//!
//! A record is decoded over its current state: keys the file leaves out keep
//! their existing values. After decoding, the record's
//! [`ConfigRecord::validate`] hook runs with the file's absolute path.

pub mod error;
mod lenient;
pub mod loader;
pub mod merge;
pub mod record;
pub mod writer;

pub use error::{ConfigError, FatalError, RequiredLoadError};
pub use loader::{load, load_or_default, load_required};
pub use merge::{merge_json, strip_nulls};
pub use record::ConfigRecord;
pub use writer::{store, store_pretty, to_json_string, to_json_string_pretty};
