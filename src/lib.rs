pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, ReportFormat};

pub use crate::config::{local::LocalFileStore, toml_config::TomlConfig, RunSettings};
pub use crate::core::prepender::{run, LinePrepender};
pub use crate::domain::model::{ErrorPolicy, FileFailure, FileOutcome, InsertConfig, RunReport};
pub use crate::utils::error::{InsertError, Result};
