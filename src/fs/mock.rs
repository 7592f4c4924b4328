// src/fs/mock.rs

use super::FileSystem;
use crate::errors::{CmmError, Result};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir,
}

/// In-memory filesystem. Paths are matched exactly as given.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.lock().unwrap();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                entries
                    .entry(parent.to_path_buf())
                    .or_insert(MockEntry::Dir);
            }
        }
        entries.insert(path, MockEntry::File(content.into()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(path.as_ref().to_path_buf(), MockEntry::Dir);
    }
}

fn not_found(path: &Path) -> CmmError {
    CmmError::IoError(io::Error::new(
        io::ErrorKind::NotFound,
        format!("File not found: {:?}", path),
    ))
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::File(content)) => String::from_utf8(content.clone())
                .map_err(|e| CmmError::IoError(io::Error::new(io::ErrorKind::InvalidData, e))),
            Some(MockEntry::Dir) => Err(CmmError::IoError(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Is a directory: {:?}", path),
            ))),
            None => Err(not_found(path)),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap();
        entries.contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap();
        matches!(entries.get(path), Some(MockEntry::File(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_file_exists_with_parent_dir() {
        let fs = MockFileSystem::new();
        fs.add_file("/opt/tools/ControlMyMonitor.exe", b"MZ".to_vec());

        assert!(fs.exists(Path::new("/opt/tools/ControlMyMonitor.exe")));
        assert!(fs.is_file(Path::new("/opt/tools/ControlMyMonitor.exe")));
        assert!(fs.exists(Path::new("/opt/tools")));
        assert!(!fs.is_file(Path::new("/opt/tools")));
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let fs = MockFileSystem::new();
        match fs.read_to_string(Path::new("Cmm.toml")) {
            Err(CmmError::IoError(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
