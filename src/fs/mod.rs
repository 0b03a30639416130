// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub mod mock;

/// Abstract filesystem interface used by the config loader.
///
/// Errors are plain `io::Error`s so the loader can attach the path and report
/// them as `GrinderError::IoError`.
pub trait FileSystem: Send + Sync + Debug {
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let file = fs::File::open(path)?;
        Ok(Box::new(file))
    }
}
