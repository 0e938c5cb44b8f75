//! The resolved theme record.
//!
//! A [`Theme`] holds one [`ThemeColor`] for every [`SlotId`]; there are no
//! gaps and no palette references. Themes are built by the resolver from a
//! [`ThemeDefinition`](crate::ThemeDefinition), or in-process for the
//! built-ins, and are never mutated once registered. Reloading a theme of the
//! same name replaces it wholesale.
//!
//! # Example
//!
//! ```rust
//! use arcade_theme::{SlotId, Theme, ThemeColor};
//!
//! let theme = Theme::builtin_default();
//! assert_eq!(theme.name(), "default");
//! assert_eq!(theme.get(SlotId::Accent).to_string(), "#0066cc");
//! assert_eq!(theme.get(SlotId::BoardBackground), ThemeColor::None);
//! ```

use std::path::{Path, PathBuf};

use super::slot::{Category, SlotId};
use crate::error::ThemeResult;
use crate::style::ThemeColor;

/// A fully populated, immutable set of slot colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    slots: [ThemeColor; SlotId::COUNT],
    /// Background painted behind the whole screen; `None` leaves the
    /// terminal's own background visible.
    terminal_background: ThemeColor,
    /// File the theme was loaded from, if any.
    source_path: Option<PathBuf>,
}

impl Theme {
    pub(crate) fn from_parts(
        name: impl Into<String>,
        slots: [ThemeColor; SlotId::COUNT],
        terminal_background: ThemeColor,
    ) -> Self {
        Self {
            name: name.into(),
            slots,
            terminal_background,
            source_path: None,
        }
    }

    /// Loads and resolves a single theme file.
    ///
    /// Unset slots are filled from the theme's own UI colors where a
    /// category default exists, and from `fallback` otherwise. Every error is
    /// returned; nothing is skipped.
    pub fn from_file<P: AsRef<Path>>(path: P, fallback: &Theme) -> ThemeResult<Theme> {
        crate::registry::load_file(path.as_ref(), fallback)
    }

    /// Returns a copy with a different name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns a copy with one slot replaced.
    pub fn with_slot(mut self, slot: SlotId, color: ThemeColor) -> Self {
        self.slots[slot.index()] = color;
        self
    }

    /// Returns a copy with a different frame background.
    pub fn with_terminal_background(mut self, color: ThemeColor) -> Self {
        self.terminal_background = color;
        self
    }

    pub(crate) fn with_source_path(mut self, path: &Path) -> Self {
        self.source_path = Some(path.to_path_buf());
        self
    }

    /// The theme's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color of one slot.
    pub fn get(&self, slot: SlotId) -> ThemeColor {
        self.slots[slot.index()]
    }

    /// Every slot with its color, in resolution order.
    pub fn slots(&self) -> impl Iterator<Item = (SlotId, ThemeColor)> + '_ {
        SlotId::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// The slots of one category, in declaration order.
    pub fn category(&self, category: Category) -> impl Iterator<Item = (SlotId, ThemeColor)> + '_ {
        category.slots().map(move |s| (s, self.get(s)))
    }

    /// Background painted behind the whole screen.
    pub fn terminal_background(&self) -> ThemeColor {
        self.terminal_background
    }

    /// Whether the theme paints its own screen background.
    pub fn uses_terminal_background(&self) -> bool {
        !self.terminal_background.is_none()
    }

    /// Source file path, if this theme was loaded from disk.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn primary(&self) -> ThemeColor {
        self.get(SlotId::Primary)
    }

    pub fn secondary(&self) -> ThemeColor {
        self.get(SlotId::Secondary)
    }

    pub fn accent(&self) -> ThemeColor {
        self.get(SlotId::Accent)
    }

    pub fn success(&self) -> ThemeColor {
        self.get(SlotId::Success)
    }

    pub fn warning(&self) -> ThemeColor {
        self.get(SlotId::Warning)
    }

    pub fn error(&self) -> ThemeColor {
        self.get(SlotId::Error)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgb;

    #[test]
    fn test_default_trait_is_builtin_default() {
        assert_eq!(Theme::default(), Theme::builtin_default());
    }

    #[test]
    fn test_with_slot_replaces_one_slot() {
        let base = Theme::builtin_default();
        let changed = base
            .clone()
            .with_slot(SlotId::Accent, ThemeColor::Fixed(Rgb(1, 2, 3)));

        assert_eq!(changed.accent(), ThemeColor::Fixed(Rgb(1, 2, 3)));
        for slot in SlotId::ALL.into_iter().filter(|s| *s != SlotId::Accent) {
            assert_eq!(changed.get(slot), base.get(slot));
        }
    }

    #[test]
    fn test_slots_yields_every_slot_once() {
        let theme = Theme::builtin_system();
        let slots: Vec<SlotId> = theme.slots().map(|(s, _)| s).collect();
        assert_eq!(slots, SlotId::ALL.to_vec());
    }

    #[test]
    fn test_category_iterates_only_that_category() {
        let theme = Theme::builtin_default();
        let chess: Vec<SlotId> = theme.category(Category::Chess).map(|(s, _)| s).collect();
        assert_eq!(chess, vec![SlotId::WhitePiece, SlotId::BlackPiece]);
    }

    #[test]
    fn test_with_name() {
        let theme = Theme::builtin_default().with_name("copy");
        assert_eq!(theme.name(), "copy");
        assert_eq!(theme.source_path(), None);
    }

    #[test]
    fn test_terminal_background_flags() {
        assert!(Theme::builtin_default().uses_terminal_background());
        assert!(!Theme::builtin_system().uses_terminal_background());
        let cleared = Theme::builtin_default().with_terminal_background(ThemeColor::None);
        assert!(!cleared.uses_terminal_background());
    }
}
