use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsertError {
    #[error("Cannot list directory {}: {source}", .path.display())]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File has no lines: {}", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, InsertError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Directory,
    FileAccess,
    Content,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl InsertError {
    /// The file or directory the error is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            InsertError::DirectoryError { path, .. }
            | InsertError::ReadError { path, .. }
            | InsertError::WriteError { path, .. }
            | InsertError::EmptyFile { path } => Some(path),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            InsertError::ConfigError { .. }
            | InsertError::ConfigValidationError { .. }
            | InsertError::InvalidConfigValueError { .. }
            | InsertError::MissingConfigError { .. } => ErrorCategory::Configuration,
            InsertError::DirectoryError { .. } => ErrorCategory::Directory,
            InsertError::ReadError { .. } | InsertError::WriteError { .. } => {
                ErrorCategory::FileAccess
            }
            InsertError::EmptyFile { .. } => ErrorCategory::Content,
            InsertError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::FileAccess | ErrorCategory::Content | ErrorCategory::Output => {
                ErrorSeverity::High
            }
            ErrorCategory::Directory => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InsertError::DirectoryError { .. } => {
                "Check that --dir points to an existing, readable directory"
            }
            InsertError::ReadError { .. } => {
                "Check file permissions, and that the entry is a UTF-8 text file and not a directory"
            }
            InsertError::WriteError { .. } => {
                "Check file permissions and free disk space; files before this one were already modified"
            }
            InsertError::EmptyFile { .. } => {
                "Add a first line to the file, or rename it so it no longer matches the suffix"
            }
            InsertError::ConfigError { .. }
            | InsertError::ConfigValidationError { .. }
            | InsertError::InvalidConfigValueError { .. }
            | InsertError::MissingConfigError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
            InsertError::SerializationError(_) => "Retry with --report text",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InsertError::DirectoryError { path, .. } => {
                format!("Directory '{}' could not be listed", path.display())
            }
            InsertError::ReadError { path, .. } => {
                format!("File '{}' could not be read", path.display())
            }
            InsertError::WriteError { path, .. } => {
                format!("File '{}' could not be written", path.display())
            }
            InsertError::EmptyFile { path } => {
                format!("File '{}' is empty, there is no first line to insert after", path.display())
            }
            other => other.to_string(),
        }
    }
}
