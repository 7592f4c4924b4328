// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use crate::errors::Result;

pub mod mock;

/// Abstract filesystem interface.
///
/// Executable lookup and config loading go through this trait so they can
/// be exercised against [`mock::MockFileSystem`].
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
