//! Configuration management for Embuibe

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::Origin;
use crate::error::{ConfigError, Result};

/// Page origin assumed when none is configured (the frontend dev server)
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000/";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page URL the client behaves as if it were loaded from
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Explicit API base URL, used verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            api_url: None,
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".embuibe").join("config.yaml"))
    }

    /// Explicit path, or the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Directory holding the config file and the local storage database
    pub fn data_dir(path: Option<&str>) -> Result<PathBuf> {
        let config_path = Self::resolve_path(path)?;
        Ok(config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Parsed page origin
    pub fn origin(&self) -> Result<Origin> {
        Ok(Origin::parse(&self.origin)?)
    }

    /// Replace the origin after checking it parses
    pub fn set_origin(&mut self, origin: &str) -> Result<()> {
        Origin::parse(origin)?;
        self.origin = origin.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.origin, "http://localhost:3000/");
        assert!(config.api_url.is_none());
        assert!(config.preferences.format.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let config = Config::load_at(path.to_str()).unwrap();
        assert_eq!(config.origin, DEFAULT_ORIGIN);

        match Config::load_from(&path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => (),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let path_str = path.to_str().unwrap();

        let mut config = Config::default();
        config.set_origin("http://192.168.0.10:3000/index.html").unwrap();
        config.api_url = Some("https://api.embuibe.com.br/api/v1".to_string());
        config.save_at(Some(path_str)).unwrap();

        let loaded = Config::load_at(Some(path_str)).unwrap();
        assert_eq!(loaded.origin, "http://192.168.0.10:3000/index.html");
        assert_eq!(
            loaded.api_url.as_deref(),
            Some("https://api.embuibe.com.br/api/v1")
        );
        assert_eq!(loaded.origin().unwrap().port, Some(3000));
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        Config::default().save_to(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_url: http://10.0.0.5:8000/api/v1\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.origin, DEFAULT_ORIGIN);
        assert_eq!(config.api_url.as_deref(), Some("http://10.0.0.5:8000/api/v1"));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "origin: [unclosed").unwrap();

        match Config::load_from(&path) {
            Err(crate::error::Error::Config(ConfigError::ParseError(_))) => (),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_set_origin_rejects_garbage() {
        let mut config = Config::default();
        assert!(config.set_origin("not a url").is_err());
        assert_eq!(config.origin, DEFAULT_ORIGIN);
    }

    #[test]
    fn test_data_dir_is_config_parent() {
        let dir = Config::data_dir(Some("/tmp/embuibe-test/config.yaml")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/embuibe-test"));
    }
}
