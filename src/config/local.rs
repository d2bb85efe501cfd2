use crate::core::FileStore;
use crate::utils::error::{InsertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `FileStore` backed by the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFileStore {
    fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let to_error = |source| InsertError::DirectoryError {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(to_error)? {
            entries.push(entry.map_err(to_error)?.path());
        }
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| InsertError::ReadError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|source| InsertError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}
