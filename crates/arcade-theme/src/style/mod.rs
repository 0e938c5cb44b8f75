//! Colors and derived styles.
//!
//! - [`Rgb`] and [`ThemeColor`]: resolved color values held by theme slots
//! - [`StyleSet`] and [`StyleDescriptor`]: the named, renderable styles
//!   derived from a theme

mod color;
mod style_set;

pub use color::{Rgb, ThemeColor};
pub use style_set::{BorderKind, StyleDescriptor, StyleSet};
