//! Directory scanning for theme files.
//!
//! Scans are plain I/O: they return resolved [`Theme`]s and collected
//! warnings, and never touch a [`ThemeManager`](super::ThemeManager). The
//! manager registers the results afterwards, so no file is read while its
//! lock is held.

use std::fs;
use std::path::{Path, PathBuf};

use crate::definition::{ThemeDefinition, ThemeFormat};
use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;

/// Outcome of scanning one or more directories.
#[derive(Debug, Default)]
pub struct DirScan {
    /// Successfully loaded themes, in scan order.
    pub themes: Vec<Theme>,
    /// One entry per skipped file.
    pub warnings: Vec<ThemeError>,
}

impl DirScan {
    fn extend(&mut self, other: DirScan) {
        self.themes.extend(other.themes);
        self.warnings.extend(other.warnings);
    }
}

/// Loads and resolves one theme file. Every failure is returned.
pub fn load_file(path: &Path, fallback: &Theme) -> ThemeResult<Theme> {
    let def = ThemeDefinition::from_path(path)?;
    let theme = def.build(fallback).map_err(|e| e.with_path(path))?;
    Ok(theme.with_source_path(path))
}

/// Loads every theme file directly inside `dir`, in file-name order.
///
/// A missing directory contributes nothing. Sub-directories and files
/// without a `.json`, `.yaml` or `.yml` extension are ignored. A file that
/// fails to load is logged, recorded in [`DirScan::warnings`], and skipped.
pub fn load_dir(dir: &Path, fallback: &Theme) -> DirScan {
    let mut scan = DirScan::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "theme directory does not exist");
            return scan;
        }
        Err(source) => {
            tracing::warn!(dir = %dir.display(), "cannot read theme directory: {}", source);
            scan.warnings.push(ThemeError::FileRead {
                path: dir.to_path_buf(),
                source,
            });
            return scan;
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && ThemeFormat::from_path(path).is_some())
        .collect();
    files.sort();

    tracing::debug!(dir = %dir.display(), files = files.len(), "scanning theme directory");

    for path in files {
        match load_file(&path, fallback) {
            Ok(theme) => {
                tracing::debug!(theme = theme.name(), path = %path.display(), "loaded theme");
                scan.themes.push(theme);
            }
            Err(err) => {
                tracing::warn!("skipping theme file {}: {}", path.display(), err);
                scan.warnings.push(err);
            }
        }
    }

    scan
}

/// Scans directories in ascending priority order.
///
/// Themes from later directories come later in the result, so registering
/// them in order lets later directories override earlier ones by name.
pub fn load_dirs<I, P>(dirs: I, fallback: &Theme) -> DirScan
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut scan = DirScan::default();
    for dir in dirs {
        scan.extend(load_dir(dir.as_ref(), fallback));
    }
    scan
}
