//! The theme registry and its current-theme pointer.
//!
//! [`ThemeManager`] is an explicit handle: the binary creates one at startup
//! and passes it to the menu and commands, and tests create their own.
//! There is no process-wide instance.
//!
//! All state sits behind one [`RwLock`]. Lookups from the render loop take
//! the read side and run concurrently; registration and theme switches take
//! the write side. Directory scans in [`ThemeManager::initialize`] read files
//! before taking the lock and only hold it to insert the results.
//!
//! # Example
//!
//! ```rust
//! use arcade_theme::ThemeManager;
//!
//! let manager = ThemeManager::with_builtins();
//! assert_eq!(manager.list_themes(), vec!["default", "system"]);
//!
//! manager.set_current_theme("system").unwrap();
//! assert_eq!(manager.current_theme().name(), "system");
//! assert_eq!(manager.styles().theme_name(), "system");
//!
//! assert!(manager.set_current_theme("nope").is_err());
//! assert_eq!(manager.current_theme().name(), "system");
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::loader::load_dirs;
use crate::error::{ThemeError, ThemeResult};
use crate::style::StyleSet;
use crate::theme::Theme;

/// What [`ThemeManager::initialize`] did.
#[derive(Debug, Default)]
pub struct InitReport {
    /// Names registered, in registration order; built-ins first.
    pub registered: Vec<String>,
    /// Theme files that were skipped.
    pub warnings: Vec<ThemeError>,
}

#[derive(Debug, Default)]
struct Inner {
    themes: HashMap<String, Arc<Theme>>,
    current: Option<String>,
    default: Option<String>,
    styles: Option<Arc<StyleSet>>,
}

impl Inner {
    fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    /// The name `current_theme` reports: current, else default.
    fn active_name(&self) -> Option<&str> {
        self.current.as_deref().or(self.default.as_deref())
    }

    fn refresh_styles(&mut self) {
        self.styles = self
            .active_name()
            .and_then(|name| self.themes.get(name))
            .map(|theme| Arc::new(StyleSet::derive(theme)));
    }

    fn select(&mut self, name: String) {
        tracing::info!(theme = %name, "current theme changed");
        self.current = Some(name);
        self.refresh_styles();
    }
}

/// Registry of themes by name, with a current and a default theme.
#[derive(Debug, Default)]
pub struct ThemeManager {
    inner: RwLock<Inner>,
}

impl ThemeManager {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the two built-ins, with `default` current.
    pub fn with_builtins() -> Self {
        let manager = Self::new();
        for theme in Theme::builtins() {
            manager.register_theme(theme);
        }
        manager
    }

    // The guarded data is replaced in whole values only, so a panic in
    // another holder cannot leave it inconsistent.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts a theme, replacing any theme with the same name.
    ///
    /// The first theme ever registered becomes both default and current. If
    /// the replaced theme is the active one, the active styles are rebuilt.
    pub fn register_theme(&self, theme: Theme) {
        let name = theme.name().to_string();
        let mut inner = self.write();

        let replaced = inner
            .themes
            .insert(name.clone(), Arc::new(theme))
            .is_some();
        tracing::debug!(theme = %name, replaced, "registered theme");

        if inner.default.is_none() {
            inner.default = Some(name.clone());
        }
        if inner.current.is_none() {
            inner.current = Some(name.clone());
        }
        if inner.active_name() == Some(name.as_str()) {
            inner.refresh_styles();
        }
    }

    /// Makes `name` the current theme.
    ///
    /// # Errors
    ///
    /// [`ThemeError::ThemeNotFound`] if no such theme is registered; the
    /// current theme is left as it was.
    pub fn set_current_theme(&self, name: &str) -> ThemeResult<()> {
        let mut inner = self.write();
        if !inner.themes.contains_key(name) {
            return Err(ThemeError::ThemeNotFound(name.to_string()));
        }
        inner.select(name.to_string());
        Ok(())
    }

    /// The current theme, or the default if none is current.
    ///
    /// Before anything is registered this returns a fresh built-in
    /// `default`, so rendering never has to handle a missing theme.
    pub fn current_theme(&self) -> Arc<Theme> {
        self.try_current_theme()
            .unwrap_or_else(|| Arc::new(Theme::builtin_default()))
    }

    /// The current theme, or `None` before the first registration.
    pub fn try_current_theme(&self) -> Option<Arc<Theme>> {
        let inner = self.read();
        inner
            .active_name()
            .and_then(|name| inner.themes.get(name))
            .cloned()
    }

    /// Looks up a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<Arc<Theme>> {
        self.read().themes.get(name).cloned()
    }

    /// All registered names, sorted.
    pub fn list_themes(&self) -> Vec<String> {
        self.read().sorted_names()
    }

    pub fn current_name(&self) -> Option<String> {
        self.read().active_name().map(str::to_string)
    }

    pub fn default_name(&self) -> Option<String> {
        self.read().default.clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().themes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.read().themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().themes.is_empty()
    }

    /// Styles for the current theme.
    ///
    /// The returned set is never modified; after a theme change, fetch again
    /// to see the new styles.
    pub fn styles(&self) -> Arc<StyleSet> {
        if let Some(styles) = self.read().styles.clone() {
            return styles;
        }
        Arc::new(StyleSet::derive(&Theme::builtin_default()))
    }

    /// Moves to the next theme in sorted order, wrapping at the end.
    ///
    /// Returns the new current name, or `None` if the registry is empty.
    pub fn cycle_next(&self) -> Option<String> {
        self.cycle(|pos, len| match pos {
            Some(i) => (i + 1) % len,
            None => 0,
        })
    }

    /// Moves to the previous theme in sorted order, wrapping at the start.
    pub fn cycle_previous(&self) -> Option<String> {
        self.cycle(|pos, len| match pos {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        })
    }

    fn cycle(&self, step: impl Fn(Option<usize>, usize) -> usize) -> Option<String> {
        let mut inner = self.write();
        let names = inner.sorted_names();
        if names.is_empty() {
            return None;
        }
        let pos = inner
            .active_name()
            .and_then(|current| names.iter().position(|n| n == current));
        let next = names[step(pos, names.len())].clone();
        inner.select(next.clone());
        Some(next)
    }

    /// Registers the built-ins, then every theme found in `dirs`.
    ///
    /// Directories are given lowest priority first; a theme from a later
    /// directory replaces an earlier theme or built-in of the same name.
    /// Missing directories and bad files never fail the call: bad files are
    /// logged and returned in [`InitReport::warnings`]. Calling it again
    /// re-registers everything, so the result is the same.
    pub fn initialize<I, P>(&self, dirs: I) -> InitReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = InitReport::default();

        for theme in Theme::builtins() {
            report.registered.push(theme.name().to_string());
            self.register_theme(theme);
        }

        let fallback = Theme::builtin_default();
        let scan = load_dirs(dirs, &fallback);
        for theme in scan.themes {
            report.registered.push(theme.name().to_string());
            self.register_theme(theme);
        }
        report.warnings = scan.warnings;

        tracing::debug!(
            themes = self.len(),
            skipped = report.warnings.len(),
            "theme registry initialized"
        );
        report
    }
}
