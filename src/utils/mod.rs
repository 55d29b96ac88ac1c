//! Shared helpers

pub mod paths;

pub use paths::absolute_path;
