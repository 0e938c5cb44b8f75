//! Resolved themes, their slots and the built-ins.
//!
//! A [`Theme`] is a record of exactly one color per [`SlotId`]. Slots are
//! grouped into [`Category`]s that mirror the sections of a theme file:
//!
//! | Category | Slots |
//! |----------|-------|
//! | `ui`     | primary, secondary, accent, success, warning, error |
//! | `board`  | border, background, cell_border, cell_background, selected_cell |
//! | `pieces` | player1, player2, snake_body, snake_head, food |
//! | `chess`  | white_piece, black_piece |
//! | `tetris` | i, o, t, s, z, j, l |
//!
//! ## Adaptive colors
//!
//! A slot may hold a dark/light pair instead of a single color. The pair is
//! kept as is in the theme; the half that gets shown is picked when a style
//! is rendered, using the [`ColorMode`] reported by [`detect_color_mode`] or
//! forced by the user.
//!
//! ## Built-ins
//!
//! Two themes always exist: [`DEFAULT_THEME`] with fixed colors and a dark
//! frame background, and [`SYSTEM_THEME`] whose colors are all adaptive.

mod adaptive;
mod builtin;
mod slot;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, ColorMode};
pub use builtin::{DEFAULT_THEME, SYSTEM_THEME};
pub use slot::{Category, SlotId};
pub use theme::Theme;
