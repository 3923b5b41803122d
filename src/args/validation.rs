use chrono::NaiveDate;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the path is not a directory
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() {
        return Err(format!("The data directory '{dir}' does not exist."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the parent directory is missing or read-only
pub fn check_parent_dir_is_writeable(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    match fs::metadata(&parent) {
        Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => Ok(path),
        _ => Err(format!(
            "The directory '{}' is not writeable.",
            parent.display()
        )),
    }
}

/// # Errors
///
/// Will return `Err` unless the value is a `YYYY-MM-DD` date
pub fn check_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("'{value}' is not a YYYY-MM-DD date: {e}"))
}

/// # Errors
///
/// Will return `Err` if the window is zero or not a number
pub fn check_window(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("The rolling window must be at least 1.".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("'{value}' is not a window size: {e}")),
    }
}
