use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arcade_theme::{ColorMode, SlotId, StyleDescriptor, StyleSet, Theme, ThemeManager};

use crate::app::App;
use crate::screen::join_horizontal;

pub fn list_themes(themes: &ThemeManager, out: &mut impl Write) -> Result<()> {
    let current = themes.current_name();
    writeln!(out, "Available themes:")?;
    for name in themes.list_themes() {
        if current.as_deref() == Some(name.as_str()) {
            writeln!(out, "* {} (current)", name)?;
        } else {
            writeln!(out, "  {}", name)?;
        }
    }
    Ok(())
}

/// Switches the current theme and stores the choice in the config file.
pub fn set_theme(app: &mut App, name: &str, out: &mut impl Write) -> Result<()> {
    app.themes
        .set_current_theme(name)
        .context("Error setting theme")?;

    app.config.theme = Some(name.to_string());
    match &app.config_path {
        Some(path) => app
            .config
            .save(path)
            .context("Error setting theme")?,
        None => tracing::warn!("no config location; the theme choice will not be remembered"),
    }

    writeln!(out, "Theme set to: {}", name)?;
    Ok(())
}

fn sample(
    out: &mut impl Write,
    label: &str,
    style: &StyleDescriptor,
    text: &str,
    mode: Option<ColorMode>,
) -> Result<()> {
    sample_line(out, label, &style.paint(text, mode))
}

fn sample_line(out: &mut impl Write, label: &str, rendered: &str) -> Result<()> {
    writeln!(out, "  {:<12} {}", format!("{label}:"), rendered)?;
    Ok(())
}

/// Board slots shown in the preview; `true` marks a background color.
const BOARD_SWATCHES: [(&str, SlotId, bool); 5] = [
    ("Border", SlotId::BoardBorder, false),
    ("Background", SlotId::BoardBackground, true),
    ("Cell Border", SlotId::CellBorder, false),
    ("Cell Fill", SlotId::CellBackground, true),
    ("Selected", SlotId::SelectedCell, false),
];

/// Board color swatches, then an empty and a selected cell.
fn board(
    out: &mut impl Write,
    theme: &Theme,
    styles: &StyleSet,
    mode: Option<ColorMode>,
) -> Result<()> {
    writeln!(out, "Board Colors:")?;
    for (label, slot, fill) in BOARD_SWATCHES {
        let color = theme.get(slot);
        let swatch = if fill {
            StyleDescriptor {
                bg: color,
                ..StyleDescriptor::default()
            }
            .paint("      ", mode)
        } else {
            StyleDescriptor {
                fg: color,
                ..StyleDescriptor::default()
            }
            .paint("━━━━━━", mode)
        };
        sample_line(out, label, &format!("{} {} ({})", swatch, color, slot.key()))?;
    }

    let cells = join_horizontal(&[
        styles.cell.frame(" ", mode),
        vec![" ".to_string()],
        styles.selected_cell.frame(" ", mode),
    ]);
    for line in cells {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

fn pieces(styles: &StyleSet, letters: &[(char, &str)], mode: Option<ColorMode>) -> String {
    letters
        .iter()
        .map(|(letter, block)| {
            format!("{}: {}", letter, styles.tetris_piece(*letter).paint(block, mode))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Prints color samples for a theme without making it current.
pub fn preview_theme(
    themes: &ThemeManager,
    name: &str,
    mode: Option<ColorMode>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(theme) = themes.get_theme(name) else {
        bail!("Theme '{}' not found", name);
    };
    let styles = StyleSet::derive(&theme);

    writeln!(out, "Theme: {}", theme.name())?;
    writeln!(out)?;

    writeln!(out, "UI Colors:")?;
    sample(out, "Primary", &styles.title, "Sample Primary Text", mode)?;
    sample(out, "Secondary", &styles.menu_item, "Sample Secondary Text", mode)?;
    sample(out, "Accent", &styles.selected_item, "Sample Accent Text", mode)?;
    sample(out, "Success", &styles.success, "Sample Success Text", mode)?;
    sample(out, "Warning", &styles.warning, "Sample Warning Text", mode)?;
    sample(out, "Error", &styles.error, "Sample Error Text", mode)?;
    writeln!(out)?;

    board(out, &theme, &styles, mode)?;
    writeln!(out)?;

    writeln!(out, "Game Colors:")?;
    sample(out, "Player 1", &styles.player1, "Player 1", mode)?;
    sample(out, "Player 2", &styles.player2, "Player 2", mode)?;
    sample(out, "Snake Body", &styles.snake, "●", mode)?;
    sample(out, "Snake Head", &styles.snake_head, "◉", mode)?;
    sample(out, "Food", &styles.food, "◆", mode)?;
    writeln!(out)?;

    writeln!(out, "Chess Pieces:")?;
    sample(out, "White", &styles.white_piece, "♔ ♕ ♖ ♗ ♘ ♙", mode)?;
    sample(out, "Black", &styles.black_piece, "♚ ♛ ♜ ♝ ♞ ♟", mode)?;
    writeln!(out)?;

    writeln!(out, "Tetris Pieces:")?;
    writeln!(
        out,
        "  {}",
        pieces(&styles, &[('I', "████"), ('O', "██"), ('T', "███"), ('S', "██")], mode)
    )?;
    writeln!(
        out,
        "  {}",
        pieces(&styles, &[('Z', "██"), ('J', "███"), ('L', "███")], mode)
    )?;

    if theme.uses_terminal_background() {
        writeln!(out)?;
        writeln!(out, "Terminal Background: {}", theme.terminal_background())?;
    }
    Ok(())
}

/// Loads one theme file on its own and prints every resolved slot.
pub fn check_theme(path: &Path, out: &mut impl Write) -> Result<()> {
    let theme = Theme::from_file(path, &Theme::builtin_default())?;

    writeln!(out, "{}: theme '{}' is valid", path.display(), theme.name())?;
    writeln!(out)?;
    for (slot, color) in theme.slots() {
        writeln!(out, "  {:<18} {}", slot.key(), color)?;
    }
    writeln!(out, "  {:<18} {}", "terminal_background", theme.terminal_background())?;
    Ok(())
}
