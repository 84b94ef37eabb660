use relative_path::RelativePath;
use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Well-known content files, relative to the content directory.
pub const BLOG_FILE: &str = "blog.json";
pub const MEDIA_CATALOG_FILE: &str = "googleDriveMedia.json";

/// Read and deserialize a JSON content file
pub fn read_json<T: DeserializeOwned>(
    relative_path: &RelativePath,
    content_root: &Path,
) -> Result<T, IoError> {
    read_json_file(&relative_path.to_path(content_root))
}

/// Read and deserialize a JSON file at an absolute or working-dir path
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_json(&content, path)
}

/// Deserialize JSON text, attributing errors to `path`
pub fn parse_json<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, IoError> {
    serde_json::from_str(content).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON into a content file
pub fn write_json<T: Serialize>(
    relative_path: &RelativePath,
    content_root: &Path,
    value: &T,
) -> Result<PathBuf, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    write_json_file(&absolute_path, value)?;
    Ok(absolute_path)
}

/// Serialize a value as pretty JSON to `path`
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json)?;
    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
