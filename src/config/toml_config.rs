use crate::config::validate_insert_config;
use crate::core::ConfigProvider;
use crate::domain::model::{ErrorPolicy, DEFAULT_SUFFIX};
use crate::utils::error::{InsertError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub target: TargetConfig,
    pub insert: InsertSection,
    pub run: Option<RunSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub directory: String,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertSection {
    pub line: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSection {
    pub on_error: Option<ErrorPolicy>,
    pub dry_run: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| InsertError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InsertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HEADER_LINE})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InsertError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn run_section(&self) -> RunSection {
        self.run.clone().unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn base_directory(&self) -> &Path {
        Path::new(&self.target.directory)
    }

    fn suffix(&self) -> &str {
        self.target.suffix.as_deref().unwrap_or(DEFAULT_SUFFIX)
    }

    fn inserted_line(&self) -> &str {
        &self.insert.line
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.run_section().on_error.unwrap_or_default()
    }

    fn dry_run(&self) -> bool {
        self.run_section().dry_run.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_insert_config(self)
    }
}
