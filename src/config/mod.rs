// src/config/mod.rs

//! Configuration loading and validation for grinder.
//!
//! Responsibilities:
//! - Define the YAML-backed data model (`model.rs`).
//! - Load `config.yml` from a directory (`loader.rs`).
//! - Validate the decoded document in a fixed order (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    CONFIG_FILE_NAME, config_path, load_and_validate, load_and_validate_with_policy,
    load_from_dir, load_from_dir_with,
};
pub use model::{
    AutoBuy, Commands, Compat, Config, Cooldown, CooldownAction, Credentials, Features, Instance,
    RawConfig, RawInstance, RawShift, RawSuspicionAvoidance, RawSwarm, SuspicionAvoidance, Swarm,
    Typing,
};
pub use validate::{ValidationPolicy, validate_config, validate_config_with_policy};
