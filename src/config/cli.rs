use crate::config::toml_config::TomlConfig;
use crate::config::RunSettings;
use crate::core::ConfigProvider;
use crate::domain::model::{ErrorPolicy, InsertConfig, DEFAULT_SUFFIX};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "line-insert")]
#[command(about = "Insert a line after the first line of every matching file in a directory")]
pub struct CliConfig {
    /// Directory to scan (not recursive) [default: .]
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Filename suffix filter [default: .py]
    #[arg(long)]
    pub suffix: Option<String>,

    /// Text inserted as the new second line; a missing line ending follows the file's
    #[arg(long)]
    pub line: Option<String>,

    /// Path to TOML configuration file; flags given here override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep processing the remaining files after one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Show what would be modified without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Summary format printed on stdout
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Merges the optional config file with the flags. Flags win.
    pub fn resolve(&self) -> Result<RunSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        let base_directory = self
            .dir
            .clone()
            .or_else(|| file.as_ref().map(|f| f.base_directory().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        let suffix = self
            .suffix
            .clone()
            .or_else(|| file.as_ref().map(|f| f.suffix().to_string()))
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());

        let inserted_line = match &file {
            Some(f) if self.line.is_none() => f.inserted_line().to_string(),
            _ => validate_required_field("--line", &self.line)?.clone(),
        };

        let policy = if self.keep_going {
            ErrorPolicy::Continue
        } else {
            file.as_ref().map(|f| f.error_policy()).unwrap_or_default()
        };

        let dry_run = self.dry_run || file.as_ref().is_some_and(|f| f.dry_run());

        Ok(RunSettings {
            insert: InsertConfig::new(base_directory, suffix, inserted_line),
            policy,
            dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::InsertError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_only() {
        let cli = CliConfig::try_parse_from([
            "line-insert",
            "--dir",
            "scripts",
            "--line",
            "from dodesign.show import show",
        ])
        .unwrap();

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.insert.base_directory, PathBuf::from("scripts"));
        assert_eq!(settings.insert.suffix, ".py");
        assert_eq!(settings.insert.inserted_line, "from dodesign.show import show");
        assert_eq!(settings.policy, ErrorPolicy::Abort);
        assert!(!settings.dry_run);
        assert_eq!(cli.report, ReportFormat::Text);
    }

    #[test]
    fn test_missing_line_is_an_error() {
        let cli = CliConfig::try_parse_from(["line-insert", "--dir", "scripts"]).unwrap();
        assert!(matches!(
            cli.resolve(),
            Err(InsertError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[target]
directory = "from-file"
suffix = ".rs"

[insert]
line = "// from file"

[run]
on_error = "abort"
dry_run = true
"#,
            )
            .unwrap();

        let path = temp_file.path().to_str().unwrap();
        let cli = CliConfig::try_parse_from([
            "line-insert",
            "--config",
            path,
            "--suffix",
            ".txt",
            "--keep-going",
            "--report",
            "json",
        ])
        .unwrap();

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.insert.base_directory, PathBuf::from("from-file"));
        assert_eq!(settings.insert.suffix, ".txt");
        assert_eq!(settings.insert.inserted_line, "// from file");
        assert_eq!(settings.policy, ErrorPolicy::Continue);
        assert!(settings.dry_run);
        assert_eq!(cli.report, ReportFormat::Json);
    }
}
