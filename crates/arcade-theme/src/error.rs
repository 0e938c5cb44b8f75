//! Error types for theme loading and registry lookups.
//!
//! Every failure that can happen while turning a theme file into a
//! [`Theme`](crate::Theme) is a [`ThemeError`]. During a directory scan these
//! errors are collected as warnings and the offending file is skipped; when a
//! single file is loaded directly they are returned to the caller.

use std::path::{Path, PathBuf};

/// Convenience alias for results carrying a [`ThemeError`].
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Error type for theme loading, resolution and lookup.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read theme file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a well-formed theme definition.
    #[error("failed to parse theme{}: {message}", location(.path))]
    Parse {
        /// Source file, when the content came from disk.
        path: Option<PathBuf>,
        /// Message from the JSON/YAML parser or the definition validator.
        message: String,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported theme file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A slot names a palette entry that does not exist.
    #[error(
        "theme '{theme}': slot '{slot}' references undefined palette entry '{reference}'{}",
        location(.path)
    )]
    BrokenReference {
        theme: String,
        slot: String,
        reference: String,
        path: Option<PathBuf>,
    },

    /// A color value is not a usable color.
    #[error("theme '{theme}': invalid color '{value}' for slot '{slot}'{}: {reason}", location(.path))]
    InvalidColor {
        theme: String,
        slot: String,
        value: String,
        reason: String,
        path: Option<PathBuf>,
    },

    /// No theme with this name is registered.
    #[error("theme '{0}' not found")]
    ThemeNotFound(String),
}

impl ThemeError {
    /// Attaches the source file to errors that carry an optional path.
    ///
    /// The resolver works on in-memory definitions and does not know where
    /// they came from; the loader calls this to name the file.
    pub fn with_path(mut self, file: &Path) -> Self {
        match &mut self {
            ThemeError::Parse { path, .. }
            | ThemeError::BrokenReference { path, .. }
            | ThemeError::InvalidColor { path, .. } => {
                if path.is_none() {
                    *path = Some(file.to_path_buf());
                }
            }
            ThemeError::FileRead { .. }
            | ThemeError::UnsupportedFormat { .. }
            | ThemeError::ThemeNotFound(_) => {}
        }
        self
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        ThemeError::Parse {
            path: None,
            message: message.into(),
        }
    }

    /// Returns true for errors that come from a theme file's content or
    /// location rather than from a registry lookup.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, ThemeError::ThemeNotFound(_))
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_reference_display_names_everything() {
        let err = ThemeError::BrokenReference {
            theme: "ocean".to_string(),
            slot: "accent".to_string(),
            reference: "brand".to_string(),
            path: None,
        }
        .with_path(Path::new("/themes/ocean.json"));

        let msg = err.to_string();
        assert!(msg.contains("ocean"));
        assert!(msg.contains("accent"));
        assert!(msg.contains("brand"));
        assert!(msg.contains("/themes/ocean.json"));
    }

    #[test]
    fn test_with_path_keeps_existing_path() {
        let err = ThemeError::Parse {
            path: Some(PathBuf::from("first.yaml")),
            message: "bad".to_string(),
        }
        .with_path(Path::new("second.yaml"));

        match err {
            ThemeError::Parse { path, .. } => assert_eq!(path, Some(PathBuf::from("first.yaml"))),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_theme_not_found_display() {
        let err = ThemeError::ThemeNotFound("nope".to_string());
        assert_eq!(err.to_string(), "theme 'nope' not found");
        assert!(!err.is_load_error());
    }

    #[test]
    fn test_parse_without_path_has_no_location() {
        let err = ThemeError::parse("expected a mapping");
        assert_eq!(err.to_string(), "failed to parse theme: expected a mapping");
        assert!(err.is_load_error());
    }
}
