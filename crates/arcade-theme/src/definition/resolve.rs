//! Turning a [`ThemeDefinition`] into a complete [`Theme`].
//!
//! Slots are resolved in [`SlotId::ALL`] order. An explicit entry is resolved
//! against the definition's palette. A missing entry takes, in order:
//!
//! 1. the category default, read from the theme's own already-resolved UI
//!    slots (`board_border` and `cell_border` follow `secondary`,
//!    `selected_cell` and `snake_head` follow `accent`, `snake_body` follows
//!    `success`)
//! 2. the fallback theme's value for that slot
//!
//! The first bad value aborts the build with an error naming the theme,
//! slot and offending value.

use super::{ColorRef, ColorSpec, ThemeDefinition};
use crate::error::{ThemeError, ThemeResult};
use crate::style::{Rgb, ThemeColor};
use crate::theme::{SlotId, Theme};

const TERMINAL_BACKGROUND: &str = "terminal_background";

/// The UI slot an unset slot defaults to, before the fallback theme.
fn category_default(slot: SlotId) -> Option<SlotId> {
    match slot {
        SlotId::BoardBorder | SlotId::CellBorder => Some(SlotId::Secondary),
        SlotId::SelectedCell | SlotId::SnakeHead => Some(SlotId::Accent),
        SlotId::SnakeBody => Some(SlotId::Success),
        _ => None,
    }
}

impl ThemeDefinition {
    /// Resolves every slot, filling gaps from category defaults and then
    /// from `fallback`.
    ///
    /// Palette references are followed one level; the resulting theme holds
    /// no references. Adaptive pairs stay adaptive.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::BrokenReference`] when a name is not in the palette,
    ///   or a palette entry itself is a name
    /// - [`ThemeError::InvalidColor`] for malformed hex, or an adaptive
    ///   pair with an empty half
    pub fn build(&self, fallback: &Theme) -> ThemeResult<Theme> {
        let mut slots = [ThemeColor::None; SlotId::COUNT];

        for slot in SlotId::ALL {
            slots[slot.index()] = match self.slot(slot) {
                Some(spec) => self.resolve(slot.key(), spec)?,
                None => match category_default(slot) {
                    Some(parent) => slots[parent.index()],
                    None => fallback.get(slot),
                },
            };
        }

        let terminal_background = match self.terminal_background() {
            Some(spec) => self.resolve(TERMINAL_BACKGROUND, spec)?,
            None => ThemeColor::None,
        };

        Ok(Theme::from_parts(self.name(), slots, terminal_background))
    }

    fn resolve(&self, slot: &str, spec: &ColorSpec) -> ThemeResult<ThemeColor> {
        match spec {
            ColorSpec::None => Ok(ThemeColor::None),
            ColorSpec::Literal(hex) => self.hex(slot, hex).map(ThemeColor::Fixed),
            ColorSpec::Variant { dark, light } => Ok(ThemeColor::Adaptive {
                dark: self.resolve_half(slot, dark)?,
                light: self.resolve_half(slot, light)?,
            }),
            ColorSpec::Reference(name) => {
                let entry = self
                    .palette()
                    .get(name)
                    .ok_or_else(|| self.broken(slot, name))?;
                self.resolve_entry(slot, entry)
            }
        }
    }

    /// Resolves a palette entry reached from `slot`. Entries cannot name
    /// other entries.
    fn resolve_entry(&self, slot: &str, entry: &ColorSpec) -> ThemeResult<ThemeColor> {
        match entry {
            ColorSpec::None => Ok(ThemeColor::None),
            ColorSpec::Literal(hex) => self.hex(slot, hex).map(ThemeColor::Fixed),
            ColorSpec::Variant { dark, light } => Ok(ThemeColor::Adaptive {
                dark: self.entry_half(slot, dark)?,
                light: self.entry_half(slot, light)?,
            }),
            ColorSpec::Reference(name) => Err(self.broken(slot, name)),
        }
    }

    fn resolve_half(&self, slot: &str, half: &ColorRef) -> ThemeResult<Rgb> {
        match half {
            ColorRef::Literal(hex) => self.hex(slot, hex),
            ColorRef::Reference(name) => {
                let entry = self
                    .palette()
                    .get(name)
                    .ok_or_else(|| self.broken(slot, name))?;
                match entry {
                    ColorSpec::Literal(hex) => self.hex(slot, hex),
                    ColorSpec::Reference(inner) => Err(self.broken(slot, inner)),
                    ColorSpec::None => Err(self.invalid(slot, name, "pair halves cannot be empty")),
                    ColorSpec::Variant { .. } => {
                        Err(self.invalid(slot, name, "pair halves cannot be pairs"))
                    }
                }
            }
            ColorRef::None => Err(self.invalid(slot, "none", "pair halves cannot be empty")),
        }
    }

    fn entry_half(&self, slot: &str, half: &ColorRef) -> ThemeResult<Rgb> {
        match half {
            ColorRef::Literal(hex) => self.hex(slot, hex),
            ColorRef::Reference(name) => Err(self.broken(slot, name)),
            ColorRef::None => Err(self.invalid(slot, "none", "pair halves cannot be empty")),
        }
    }

    fn hex(&self, slot: &str, value: &str) -> ThemeResult<Rgb> {
        Rgb::parse_hex(value).map_err(|reason| self.invalid(slot, value, &reason))
    }

    fn broken(&self, slot: &str, reference: &str) -> ThemeError {
        ThemeError::BrokenReference {
            theme: self.name().to_string(),
            slot: slot.to_string(),
            reference: reference.to_string(),
            path: None,
        }
    }

    fn invalid(&self, slot: &str, value: &str, reason: &str) -> ThemeError {
        ThemeError::InvalidColor {
            theme: self.name().to_string(),
            slot: slot.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            path: None,
        }
    }
}
