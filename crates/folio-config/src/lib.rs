use folio_engine::StyleClasses;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SITE_URL: &str = "https://chandankp.com";
pub const DEFAULT_CONTENT_DIR: &str = "src/data";

/// Environment variables that override values from the config file.
pub const ENV_SITE_URL: &str = "SITE_URL";
pub const ENV_DRIVE_FOLDER_ID: &str = "GOOGLE_DRIVE_FOLDER_ID";
pub const ENV_DRIVE_API_KEY: &str = "GOOGLE_DRIVE_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Public base URL of the site, used for post and share links.
    pub site_url: String,
    /// Directory holding the site's JSON content files.
    pub content_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_api_key: Option<String>,
    pub classes: StyleClasses,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            drive_folder_id: None,
            drive_api_key: None,
            classes: StyleClasses::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the content directory
        config.content_dir = Self::expand_path(&config.content_dir).unwrap_or(config.content_dir);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file (explicit path or the default location), falling
    /// back to defaults when it does not exist, then applies environment
    /// overrides.
    pub fn resolve(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match explicit_path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load()?,
        };
        let mut config = loaded.unwrap_or_else(|| {
            log::debug!("No config file found, using defaults");
            Self::default()
        });
        config.apply_env_overrides();
        Ok(config)
    }

    /// Applies the `SITE_URL` and `GOOGLE_DRIVE_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from `lookup`; empty values count as unset.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(site_url) = get(ENV_SITE_URL) {
            self.site_url = site_url;
        }
        if let Some(folder_id) = get(ENV_DRIVE_FOLDER_ID) {
            self.drive_folder_id = Some(folder_id);
        }
        if let Some(api_key) = get(ENV_DRIVE_API_KEY) {
            self.drive_api_key = Some(api_key);
        }
    }

    /// Drive folder and API key, if both are configured.
    pub fn drive_credentials(&self) -> Option<(&str, &str)> {
        match (self.drive_folder_id.as_deref(), self.drive_api_key.as_deref()) {
            (Some(folder), Some(key)) if !folder.is_empty() && !key.is_empty() => Some((folder, key)),
            _ => None,
        }
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/folio");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/folio/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.site_url, "https://chandankp.com");
        assert_eq!(config.content_dir, PathBuf::from("src/data"));
        assert_eq!(config.classes, StyleClasses::default());
        assert!(config.drive_credentials().is_none());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            site_url: "https://site.test".to_string(),
            drive_folder_id: Some("folder".to_string()),
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
site_url = "https://site.test"

[classes]
bold = "font-bold"
"#,
        )
        .unwrap();

        assert_eq!(config.site_url, "https://site.test");
        assert_eq!(config.content_dir, PathBuf::from(DEFAULT_CONTENT_DIR));
        assert_eq!(config.classes.bold, "font-bold");
        assert_eq!(config.classes.code, StyleClasses::default().code);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/site/data");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("site/data"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("FOLIO_TEST_ROOT", "/test/env/path");
        }

        let path = PathBuf::from("$FOLIO_TEST_ROOT/data");
        let expanded = Config::expand_path(&path).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/data"));

        unsafe {
            env::remove_var("FOLIO_TEST_ROOT");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "site_url = [unterminated").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            r#"
site_url = "https://site.test"
content_dir = "/tmp/site-data"
drive_folder_id = "folder"
drive_api_key = "key"
"#,
        )
        .unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.content_dir, PathBuf::from("/tmp/site-data"));
        assert_eq!(loaded_config.drive_credentials(), Some(("folder", "key")));
        assert_eq!(loaded_config.classes, StyleClasses::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: Config = toml::from_str(r#"webhook_url = "https://hooks.test""#).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_missing_explicit_path_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        let config = Config::resolve(Some(missing.as_path())).unwrap();

        assert_eq!(config.content_dir, PathBuf::from(DEFAULT_CONTENT_DIR));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_SITE_URL, "https://override.test"),
            (ENV_DRIVE_FOLDER_ID, "folder-env"),
        ]);
        let mut config = Config {
            drive_api_key: Some("key-file".to_string()),
            ..Config::default()
        };

        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.site_url, "https://override.test");
        assert_eq!(config.drive_credentials(), Some(("folder-env", "key-file")));
    }

    #[test]
    fn test_empty_override_keeps_file_value() {
        let mut config = Config {
            drive_folder_id: Some("folder-file".to_string()),
            ..Config::default()
        };

        config.apply_overrides(|name| (name == ENV_DRIVE_FOLDER_ID).then(String::new));

        assert_eq!(config.drive_folder_id.as_deref(), Some("folder-file"));
    }
}
