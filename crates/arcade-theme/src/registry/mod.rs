//! Loading theme files and keeping track of the current theme.

mod loader;
mod manager;

pub use loader::{load_dir, load_dirs, load_file, DirScan};
pub use manager::{InitReport, ThemeManager};
