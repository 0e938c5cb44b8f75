//! # Arcade Theme - Color Themes for Terminal Games
//!
//! `arcade-theme` loads, resolves and manages the color themes used by the
//! `arcade` terminal game launcher. It can be used by any text-mode program
//! that wants named, swappable color schemes with light/dark adaptation.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: an immutable record with one color for each of the 25
//!   [`SlotId`]s (UI, board, pieces, chess and tetromino colors)
//! - [`ThemeDefinition`]: a theme as written in a JSON or YAML file, with a
//!   [`Palette`] of named colors and only the slots the author set
//! - [`ThemeColor`]: a resolved color, either fixed or an adaptive
//!   dark/light pair chosen at render time via [`ColorMode`]
//! - [`ThemeManager`]: the registry that owns the current theme
//! - [`StyleSet`]: renderable styles derived from the current theme
//!
//! ## Quick Start
//!
//! ```rust
//! use arcade_theme::{ThemeDefinition, ThemeManager, SlotId};
//!
//! let manager = ThemeManager::with_builtins();
//!
//! let def = ThemeDefinition::from_yaml(r##"
//! name: ocean
//! palette:
//!   brand: "#0077be"
//! ui:
//!   accent: brand
//! "##).unwrap();
//!
//! let theme = def.build(&manager.current_theme()).unwrap();
//! manager.register_theme(theme);
//! manager.set_current_theme("ocean").unwrap();
//!
//! let current = manager.current_theme();
//! assert_eq!(current.get(SlotId::Accent).to_string(), "#0077be");
//! // Unset selected_cell follows the theme's own accent
//! assert_eq!(current.get(SlotId::SelectedCell).to_string(), "#0077be");
//! ```
//!
//! ## Loading From Directories
//!
//! [`ThemeManager::initialize`] registers the built-in `default` and
//! `system` themes and then every `.json`, `.yaml` and `.yml` file in the
//! given directories. Files that fail to load are skipped and reported; they
//! never stop the others from loading.
//!
//! ```rust,no_run
//! use arcade_theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let report = manager.initialize(["/usr/share/arcade/themes", "./themes"]);
//! for warning in &report.warnings {
//!     eprintln!("warning: {}", warning);
//! }
//! ```

pub mod definition;
pub mod error;
pub mod registry;
pub mod style;
pub mod theme;

pub use definition::{ColorRef, ColorSpec, Palette, ThemeDefinition, ThemeFormat};
pub use error::{ThemeError, ThemeResult};
pub use registry::{load_dir, load_dirs, load_file, DirScan, InitReport, ThemeManager};
pub use style::{BorderKind, Rgb, StyleDescriptor, StyleSet, ThemeColor};
pub use theme::{
    detect_color_mode, Category, ColorMode, SlotId, Theme, DEFAULT_THEME, SYSTEM_THEME,
};
