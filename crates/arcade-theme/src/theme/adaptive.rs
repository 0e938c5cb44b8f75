//! Light/dark color mode for adaptive colors.
//!
//! Adaptive slot colors carry a dark and a light half. Which one is shown is
//! decided when rendering, from the [`ColorMode`] the caller passes in. The
//! caller normally gets it from [`detect_color_mode`], or from configuration
//! when the user forces a mode.

use std::fmt;
use std::str::FromStr;

use dark_light::Mode as OsThemeMode;
use serde::{Deserialize, Serialize};

/// The terminal background the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("unknown color mode '{}' (expected light or dark)", other)),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

/// Asks the OS whether it prefers a light or dark appearance.
///
/// Returns `None` when the platform does not say; adaptive colors then
/// render their dark half.
pub fn detect_color_mode() -> Option<ColorMode> {
    match dark_light::detect() {
        Ok(OsThemeMode::Dark) => Some(ColorMode::Dark),
        Ok(OsThemeMode::Light) => Some(ColorMode::Light),
        Ok(OsThemeMode::Unspecified) => None,
        Err(err) => {
            tracing::debug!("color mode detection failed: {}", err);
            None
        }
    }
}
