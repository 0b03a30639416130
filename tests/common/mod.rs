#![allow(dead_code)]

use std::fs;

use tempfile::TempDir;

use grinder::config::CONFIG_FILE_NAME;

pub use grinder_test_utils::init_tracing;

/// Create a temporary directory holding `config.yml` with `contents`.
pub fn config_dir(contents: &str) -> TempDir {
    init_tracing();
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join(CONFIG_FILE_NAME), contents).expect("write config.yml");
    dir
}
