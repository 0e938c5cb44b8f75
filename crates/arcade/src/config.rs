//! User configuration.
//!
//! Stored as YAML at `<config_dir>/arcade/config.yaml` unless `--config`
//! points elsewhere:
//!
//! ```yaml
//! theme: ocean
//! theme_dirs:
//!   - /home/me/arcade-themes
//! color_mode: auto   # auto, light or dark
//! ```
//!
//! Every field is optional and a missing file means all defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use arcade_theme::{detect_color_mode, ColorMode};
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "arcade";
const CONFIG_FILE: &str = "config.yaml";
const THEMES_DIR: &str = "themes";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to write config {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// How adaptive colors pick their half.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorModeSetting {
    /// Ask the OS.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ColorModeSetting {
    pub fn resolve(self) -> Option<ColorMode> {
        match self {
            ColorModeSetting::Auto => detect_color_mode(),
            ColorModeSetting::Light => Some(ColorMode::Light),
            ColorModeSetting::Dark => Some(ColorMode::Dark),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme selected at startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Extra theme directories, lowest priority first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub theme_dirs: Vec<PathBuf>,
    pub color_mode: ColorModeSetting,
}

impl Config {
    /// `<config_dir>/arcade/config.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
    }

    /// `<config_dir>/arcade/themes`.
    pub fn user_themes_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(THEMES_DIR))
    }

    /// Reads the config file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Config::load`], but logs problems and falls back to defaults.
    pub fn load_or_default(path: &Path) -> Config {
        Config::load(path).unwrap_or_else(|err| {
            tracing::warn!("{}; using default settings", err);
            Config::default()
        })
    }

    /// Writes the config, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Theme directories in ascending priority:
    ///
    /// 1. `themes/` next to the executable
    /// 2. `./themes`
    /// 3. `<config_dir>/arcade/themes`
    /// 4. `theme_dirs` from this config
    /// 5. `extra` (from the command line)
    ///
    /// A directory listed twice is kept at its first position.
    pub fn theme_search_path(&self, extra: &[PathBuf]) -> Vec<PathBuf> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|d| d.join(THEMES_DIR)));

        let candidates = exe_dir
            .into_iter()
            .chain(Some(PathBuf::from(THEMES_DIR)))
            .chain(Config::user_themes_dir())
            .chain(self.theme_dirs.iter().cloned())
            .chain(extra.iter().cloned());

        let mut dirs: Vec<PathBuf> = Vec::new();
        for dir in candidates {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        dirs
    }
}
