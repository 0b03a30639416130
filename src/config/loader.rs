// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::model::{Config, RawConfig};
use crate::config::validate::ValidationPolicy;
use crate::errors::{GrinderError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Path of the configuration file inside `dir`.
pub fn config_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(CONFIG_FILE_NAME)
}

/// Load `config.yml` from `dir` and return the raw `RawConfig`.
///
/// This only performs YAML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<RawConfig> {
    load_from_dir_with(&RealFileSystem, dir)
}

/// Same as [`load_from_dir`], reading through `fs`.
///
/// Nothing is created or repaired: a missing file is an `IoError`.
pub fn load_from_dir_with(fs: &dyn FileSystem, dir: impl AsRef<Path>) -> Result<RawConfig> {
    let path = config_path(dir);
    debug!(path = %path.display(), "loading config");

    let reader = fs.open_read(&path).map_err(|source| GrinderError::IoError {
        path: path.clone(),
        source,
    })?;

    let config: RawConfig =
        serde_yaml::from_reader(reader).map_err(|source| GrinderError::DecodeError {
            path: path.clone(),
            source,
        })?;

    Ok(config)
}

/// Load `config.yml` from `dir` and validate the top-level agent.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads YAML.
/// - Applies zero defaults for absent keys (handled by `serde`).
/// - Runs the ordered checks of [`validate_config`](crate::config::validate_config).
pub fn load_and_validate(dir: impl AsRef<Path>) -> Result<Config> {
    load_and_validate_with_policy(dir, ValidationPolicy::TopLevel)
}

/// Load `config.yml` from `dir` and validate it under `policy`.
pub fn load_and_validate_with_policy(
    dir: impl AsRef<Path>,
    policy: ValidationPolicy,
) -> Result<Config> {
    let raw = load_from_dir(&dir)?;
    let config = Config::from_raw(raw, policy)?;
    info!(
        dir = %dir.as_ref().display(),
        shifts = config.suspicion_avoidance.shifts.len(),
        instances = config.swarm.instances.len(),
        "config loaded"
    );
    Ok(config)
}
