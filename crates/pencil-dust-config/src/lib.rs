//! Configuration for pencil-dust.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file means defaults; every key in the file is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use log::{debug, info};
use pencil_dust_core::ThemePreference;
use serde::Deserialize;

/// Lowest accepted frame rate.
pub const MIN_FRAME_RATE: u32 = 1;
/// Highest accepted frame rate.
pub const MAX_FRAME_RATE: u32 = 240;

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "pencil-dust.log";

/// User settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial presentation mode.
    pub theme: ThemePreference,
    /// Animation ticks per second.
    pub frame_rate: u32,
    /// Fixed seed for the particle RNG; OS entropy when absent.
    pub seed: Option<u64>,
    /// Title shown above the particle layer.
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            frame_rate: 60,
            seed: None,
            title: "Pencil Dust".to_string(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when there is
    /// no config file or no config directory.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .wrap_err_with(|| format!("invalid config {}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Spacing between animation ticks.
    pub fn frame_interval(&self) -> Duration {
        let rate = self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
        Duration::from_secs_f64(1.0 / rate as f64)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "pencil-dust")
}

/// Path of the config file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Path of the log file, if the platform has a local data directory.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, ThemePreference::System);
        assert_eq!(config.frame_rate, 60);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml_str("theme = \"dark\"\nseed = 42\n").unwrap();
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.title, "Pencil Dust");
    }

    #[test]
    fn test_malformed_file() {
        assert!(Config::from_toml_str("theme = \"sepia\"").is_err());
        assert!(Config::from_toml_str("frame_rate = ").is_err());
    }

    #[test]
    fn test_frame_interval_clamped() {
        let mut config = Config::default();
        assert_eq!(config.frame_interval(), Duration::from_secs_f64(1.0 / 60.0));

        config.frame_rate = 0;
        assert_eq!(config.frame_interval(), Duration::from_secs(1));

        config.frame_rate = 10_000;
        assert_eq!(config.frame_interval(), Duration::from_secs_f64(1.0 / 240.0));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("pencil-dust-missing-config.toml");
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_paths_named() {
        if let Some(path) = config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
        if let Some(path) = log_path() {
            assert!(path.ends_with(LOG_FILE));
        }
    }
}
