use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `contents` to `config.toml` in a fresh temporary directory.
///
/// Keep the returned directory alive for as long as the file is needed.
pub fn write_temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    (dir, path)
}
