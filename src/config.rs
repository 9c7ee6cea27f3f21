use crate::error::ConfigError;
use crate::io::DeleteMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub browser: BrowserConfig,
    pub pins: PinsConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Initial window geometry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Browser behavior
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Show dot-files
    pub show_hidden: bool,
    /// List folders only
    pub dirs_only: bool,
    /// First breadcrumb; the home directory when unset
    pub start_dir: Option<PathBuf>,
    /// Ask before deleting
    pub confirm_delete: bool,
    /// Move to the trash instead of removing permanently
    pub delete_to_trash: bool,
}

/// Pin file location
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PinsConfig {
    /// Overrides the `pin.json` beside the executable
    pub file: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            dirs_only: false,
            start_dir: None,
            confirm_delete: true,
            delete_to_trash: false,
        }
    }
}

impl BrowserConfig {
    pub fn delete_mode(&self) -> DeleteMode {
        if self.delete_to_trash {
            DeleteMode::Trash
        } else {
            DeleteMode::Permanent
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "axiom")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
                tracing::info!(path = %path.display(), "wrote default config");
            }
        }
        Ok(())
    }

    /// Directory the breadcrumb trail starts from.
    pub fn start_dir(&self) -> PathBuf {
        self.browser
            .start_dir
            .clone()
            .filter(|p| p.is_dir())
            .unwrap_or_else(home_dir)
    }

    pub fn pin_file(&self) -> PathBuf {
        self.pins
            .file
            .clone()
            .or_else(crate::pins::default_pin_path)
            .unwrap_or_else(|| PathBuf::from(crate::pins::PIN_FILE_NAME))
    }
}

/// The user's home directory, or the working directory when unknown.
pub fn home_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|ud| ud.home_dir().to_path_buf())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert!(config.browser.confirm_delete);
        assert!(!config.browser.delete_to_trash);
        assert_eq!(config.browser.delete_mode(), DeleteMode::Permanent);
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("axiom").join("config.toml");
        let mut config = Config::default();
        config.browser.dirs_only = true;
        config.pins.file = Some(PathBuf::from("/tmp/pins.json"));

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[browser]\nshow_hidden = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.browser.show_hidden);
        assert!(config.browser.confirm_delete);
        assert_eq!(config.theme.mode, "dark");
    }

    #[test]
    fn test_malformed_config_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[browser\nshow_hidden = ").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_start_dir_falls_back_when_missing() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.browser.start_dir = Some(dir.path().to_path_buf());
        assert_eq!(config.start_dir(), dir.path());

        config.browser.start_dir = Some(dir.path().join("missing"));
        assert_eq!(config.start_dir(), home_dir());
    }
}
