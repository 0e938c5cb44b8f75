//! Authored theme definitions, before resolution.
//!
//! A [`ThemeDefinition`] is what a theme file says, with nothing filled in:
//! a name, a [`Palette`] of named colors, and [`ColorSpec`]s for the slots
//! the author chose to set. [`ThemeDefinition::build`] turns it into a
//! complete [`Theme`](crate::Theme).
//!
//! # File format
//!
//! JSON and YAML are both accepted and have the same shape:
//!
//! ```yaml
//! name: ocean
//! palette:            # `defs` is accepted as well
//!   brand: "#0077be"
//!   foam: { dark: "#e0f7fa", light: "#006064" }
//! ui:
//!   primary: foam
//!   accent: brand
//! board:
//!   border: "#335577"
//!   selected_cell: { dark: brand, light: "#003f66" }
//! tetris:
//!   i: "#00bcd4"
//! theme:              # flat slot keys, as older theme files use them
//!   food: "#ff7043"
//! terminal_background: "#001a2c"
//! ```
//!
//! A leaf value is one of:
//!
//! - `"#rgb"` / `"#rrggbb"`: a literal color
//! - `""` or `"none"`: no color
//! - any other string: the name of a palette entry
//! - `{ dark, light }`: an adaptive pair whose halves are literals or
//!   palette names; a pair with one half uses it for both modes
//!
//! Palette entries take the same shapes, except that they cannot name other
//! palette entries.

mod resolve;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::{Category, SlotId};

/// Serialization format of a theme file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Json,
    Yaml,
}

impl ThemeFormat {
    /// Extensions recognized as theme files.
    pub const EXTENSIONS: [&'static str; 3] = ["json", "yaml", "yml"];

    /// Picks the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<ThemeFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(ThemeFormat::Json),
            "yaml" | "yml" => Some(ThemeFormat::Yaml),
            _ => None,
        }
    }
}

/// One half of an adaptive pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorRef {
    /// `""` or `"none"`; rejected when resolved.
    None,
    Literal(String),
    Reference(String),
}

impl ColorRef {
    fn parse(value: &str) -> ColorRef {
        let value = value.trim();
        if value.is_empty() || value == "none" {
            ColorRef::None
        } else if value.starts_with('#') {
            ColorRef::Literal(value.to_string())
        } else {
            ColorRef::Reference(value.to_string())
        }
    }
}

/// An authored color value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// No color.
    None,
    /// A `#`-prefixed hex color, validated at resolution.
    Literal(String),
    /// A dark/light pair, kept adaptive through resolution.
    Variant { dark: ColorRef, light: ColorRef },
    /// The name of a palette entry.
    Reference(String),
}

impl ColorSpec {
    /// Classifies a string leaf.
    ///
    /// Only a leading `#` makes a literal; every other non-empty string is a
    /// palette name, even if it looks like a color.
    pub fn parse(value: &str) -> ColorSpec {
        match ColorRef::parse(value) {
            ColorRef::None => ColorSpec::None,
            ColorRef::Literal(hex) => ColorSpec::Literal(hex),
            ColorRef::Reference(name) => ColorSpec::Reference(name),
        }
    }

    /// Builds an adaptive pair from two string leaves.
    pub fn variant(dark: &str, light: &str) -> ColorSpec {
        ColorSpec::Variant {
            dark: ColorRef::parse(dark),
            light: ColorRef::parse(light),
        }
    }
}

/// Theme-local table of named colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: BTreeMap<String, ColorSpec>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, name: impl Into<String>, spec: ColorSpec) {
        self.entries.insert(name.into(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&ColorSpec> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A theme as authored: name, palette and the slots that were set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDefinition {
    name: String,
    palette: Palette,
    slots: BTreeMap<SlotId, ColorSpec>,
    terminal_background: Option<ColorSpec>,
}

impl ThemeDefinition {
    /// An empty definition; every slot falls back when built.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            palette: Palette::new(),
            slots: BTreeMap::new(),
            terminal_background: None,
        }
    }

    /// Adds a palette entry.
    pub fn with_palette_entry(mut self, name: impl Into<String>, spec: ColorSpec) -> Self {
        self.palette.insert(name, spec);
        self
    }

    /// Sets one slot.
    pub fn with_slot(mut self, slot: SlotId, spec: ColorSpec) -> Self {
        self.slots.insert(slot, spec);
        self
    }

    /// Sets the frame background.
    pub fn with_terminal_background(mut self, spec: ColorSpec) -> Self {
        self.terminal_background = Some(spec);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The explicit entry for a slot, if the author set one.
    pub fn slot(&self, slot: SlotId) -> Option<&ColorSpec> {
        self.slots.get(&slot)
    }

    pub fn terminal_background(&self) -> Option<&ColorSpec> {
        self.terminal_background.as_ref()
    }

    /// Parses a JSON theme document.
    pub fn from_json(content: &str) -> ThemeResult<Self> {
        let raw: RawThemeFile =
            serde_json::from_str(content).map_err(|e| ThemeError::parse(e.to_string()))?;
        raw.into_definition()
    }

    /// Parses a YAML theme document.
    pub fn from_yaml(content: &str) -> ThemeResult<Self> {
        let raw: RawThemeFile =
            serde_yaml::from_str(content).map_err(|e| ThemeError::parse(e.to_string()))?;
        raw.into_definition()
    }

    /// Parses a document in the given format.
    pub fn from_str_as(content: &str, format: ThemeFormat) -> ThemeResult<Self> {
        match format {
            ThemeFormat::Json => Self::from_json(content),
            ThemeFormat::Yaml => Self::from_yaml(content),
        }
    }

    /// Reads and parses a theme file, choosing the format by extension.
    pub fn from_path(path: &Path) -> ThemeResult<Self> {
        let format = ThemeFormat::from_path(path).ok_or_else(|| ThemeError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let content = fs::read_to_string(path).map_err(|source| ThemeError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_as(&content, format).map_err(|e| e.with_path(path))
    }
}

// =============================================================================
// Raw document shape
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawColor {
    Plain(String),
    Pair {
        #[serde(default)]
        dark: Option<String>,
        #[serde(default)]
        light: Option<String>,
    },
}

impl RawColor {
    fn into_spec(self, key: &str) -> ThemeResult<ColorSpec> {
        match self {
            RawColor::Plain(s) => Ok(ColorSpec::parse(&s)),
            RawColor::Pair { dark, light } => match (dark, light) {
                (Some(dark), Some(light)) => Ok(ColorSpec::variant(&dark, &light)),
                (Some(one), None) | (None, Some(one)) => Ok(ColorSpec::variant(&one, &one)),
                (None, None) => Err(ThemeError::parse(format!(
                    "'{}': a color pair needs a 'dark' or 'light' value",
                    key
                ))),
            },
        }
    }
}

type RawSection = BTreeMap<String, RawColor>;

#[derive(Debug, Deserialize)]
struct RawThemeFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "defs")]
    palette: RawSection,
    #[serde(default)]
    ui: RawSection,
    #[serde(default)]
    board: RawSection,
    #[serde(default)]
    pieces: RawSection,
    #[serde(default)]
    chess: RawSection,
    #[serde(default)]
    tetris: RawSection,
    /// Flat slot keys.
    #[serde(default)]
    theme: RawSection,
    #[serde(default)]
    terminal_background: Option<RawColor>,
}

impl RawThemeFile {
    fn into_definition(self) -> ThemeResult<ThemeDefinition> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ThemeError::parse("missing theme 'name'"))?;

        let mut def = ThemeDefinition::new(name);

        for (key, raw) in self.palette {
            let spec = raw.into_spec(&key)?;
            def.palette.insert(key, spec);
        }

        // Flat entries first so category entries overwrite them.
        for (key, raw) in self.theme {
            let slot = SlotId::from_key(&key)
                .ok_or_else(|| ThemeError::parse(format!("unknown slot 'theme.{}'", key)))?;
            def.slots.insert(slot, raw.into_spec(&key)?);
        }

        let sections = [
            (Category::Ui, self.ui),
            (Category::Board, self.board),
            (Category::Pieces, self.pieces),
            (Category::Chess, self.chess),
            (Category::Tetris, self.tetris),
        ];
        for (category, section) in sections {
            for (key, raw) in section {
                let slot = SlotId::from_category_key(category, &key).ok_or_else(|| {
                    ThemeError::parse(format!("unknown slot '{}.{}'", category.key(), key))
                })?;
                def.slots.insert(slot, raw.into_spec(&key)?);
            }
        }

        if let Some(raw) = self.terminal_background {
            def.terminal_background = Some(raw.into_spec("terminal_background")?);
        }

        Ok(def)
    }
}
