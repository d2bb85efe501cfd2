use crate::utils::error::{InsertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InsertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InsertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A suffix is matched against bare file names, so it can never contain a
/// path separator.
pub fn validate_suffix(field_name: &str, suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(InsertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Suffix cannot be empty".to_string(),
        });
    }

    if suffix.contains('/') || suffix.contains('\\') || suffix.contains('\0') {
        return Err(InsertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Suffix must not contain path separators or null bytes".to_string(),
        });
    }

    Ok(())
}

/// The inserted text must be exactly one line: no terminator except, at most,
/// a trailing one.
pub fn validate_single_line(field_name: &str, line: &str) -> Result<()> {
    let body = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);

    if body.contains('\n') {
        return Err(InsertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: line.to_string(),
            reason: "Inserted text must be a single line".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| InsertError::MissingConfigError {
        field: field_name.to_string(),
    })
}
