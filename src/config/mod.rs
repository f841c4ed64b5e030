//! Startup configuration.
//!
//! Read once from `$XDG_CONFIG_HOME/zcalc/config.toml`; every field is
//! optional. The values never change while the app runs.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Light or dark rendering, or whatever the desktop uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    System,
    Light,
    Dark,
}

/// Accent color used for operator and equals buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    #[default]
    Blue,
    Green,
    DarkBlue,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 650.0,
            resizable: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceMode,
    pub accent: Accent,
    pub window: WindowConfig,
}

impl Config {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Default location of the config file, if a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
}

/// Load the configuration.
///
/// An explicit `path` must exist. The default file is optional; when it is
/// absent the defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => {
                tracing::warn!("No config directory found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            tracing::info!(path = %path.display(), "Loaded config");
            Config::from_toml(&path, &contents)
        }
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Config::default())
        }
        Err(source) => Err(ConfigError::Read { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<Config, ConfigError> {
        Config::from_toml(Path::new("config.toml"), contents)
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.appearance, AppearanceMode::System);
        assert_eq!(config.accent, Accent::Blue);
        assert_eq!(config.window.width, 400.0);
        assert_eq!(config.window.height, 650.0);
        assert!(!config.window.resizable);
    }

    #[test]
    fn test_full_file() {
        let config = parse(
            r#"
            appearance = "dark"
            accent = "dark-blue"

            [window]
            width = 320.0
            resizable = true
            "#,
        )
        .unwrap();

        assert_eq!(config.appearance, AppearanceMode::Dark);
        assert_eq!(config.accent, Accent::DarkBlue);
        assert_eq!(config.window.width, 320.0);
        assert_eq!(config.window.height, 650.0);
        assert!(config.window.resizable);
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = parse(r#"appearance = "sepia""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = Path::new("/nonexistent/zcalc/config.toml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
