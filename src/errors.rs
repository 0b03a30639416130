// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! Loading can fail in two ways (the file cannot be opened, or its contents
//! do not decode into the expected shape) and validation in exactly one.
//! All three are fatal at startup; nothing here is retried.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrinderError {
    #[error("error while opening config file {path:?}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error while decoding config {path:?}: {source}")]
    DecodeError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// First violated rule, reported as `<field path>: <reason>`.
    #[error("{field}: {reason}")]
    ValidationError { field: String, reason: String },
}

impl GrinderError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GrinderError::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The offending field path, for validation errors only.
    pub fn field(&self) -> Option<&str> {
        match self {
            GrinderError::ValidationError { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GrinderError>;
