//! Path resolution

use std::path::{Path, PathBuf};

/// Make `path` absolute against the current directory.
///
/// The file does not have to exist and symlinks are not resolved. If the
/// current directory cannot be determined the path is returned as given.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_becomes_absolute() {
        let resolved = absolute_path(Path::new("config/app.json"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("config/app.json"));
    }

    #[test]
    fn test_absolute_path_is_unchanged() {
        let tmp = tempfile::TempDir::new().expect("tmp");
        let path = tmp.path().join("app.json");
        assert_eq!(absolute_path(&path), path);
    }
}
