use crate::domain::model::{ErrorPolicy, InsertConfig};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem access used by the prepender. Implementations attach the
/// offending path to every error they return.
pub trait FileStore {
    /// Immediate entries of `dir`, files and directories alike. Not recursive.
    fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn base_directory(&self) -> &Path;
    fn suffix(&self) -> &str;
    fn inserted_line(&self) -> &str;

    fn error_policy(&self) -> ErrorPolicy {
        ErrorPolicy::Abort
    }

    fn dry_run(&self) -> bool {
        false
    }

    fn to_insert_config(&self) -> InsertConfig {
        InsertConfig::new(self.base_directory(), self.suffix(), self.inserted_line())
    }
}

impl ConfigProvider for InsertConfig {
    fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn inserted_line(&self) -> &str {
        &self.inserted_line
    }
}
