#[cfg(feature = "cli")]
pub mod cli;
pub mod local;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{ErrorPolicy, InsertConfig};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::Path;

/// Fully resolved settings for one run, whichever source they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub insert: InsertConfig,
    pub policy: ErrorPolicy,
    pub dry_run: bool,
}

impl ConfigProvider for RunSettings {
    fn base_directory(&self) -> &Path {
        &self.insert.base_directory
    }

    fn suffix(&self) -> &str {
        &self.insert.suffix
    }

    fn inserted_line(&self) -> &str {
        &self.insert.inserted_line
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.policy
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_insert_config(self)
    }
}

pub(crate) fn validate_insert_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validation::validate_path(
        "target.directory",
        &config.base_directory().to_string_lossy(),
    )?;
    validation::validate_suffix("target.suffix", config.suffix())?;
    validation::validate_single_line("insert.line", config.inserted_line())?;
    Ok(())
}
