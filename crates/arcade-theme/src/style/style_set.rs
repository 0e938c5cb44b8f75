//! Renderable styles derived from a theme.
//!
//! [`StyleSet::derive`] maps a [`Theme`]'s slots onto the named styles the
//! menu and game views draw with. It is a pure function; the
//! [`ThemeManager`](crate::ThemeManager) keeps one `Arc<StyleSet>` for the
//! current theme and swaps it whole whenever the current theme changes, so a
//! view never sees half of one theme and half of another.
//!
//! Descriptors hold [`ThemeColor`]s, not terminal colors. Adaptive colors
//! are settled only when a descriptor is turned into a [`console::Style`],
//! with the [`ColorMode`] supplied by the caller.

use console::{measure_text_width, Style};

use super::color::ThemeColor;
use crate::theme::{ColorMode, SlotId, Theme};

/// Box-drawing set used around a bordered style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    /// `╭─╮` corners.
    Rounded,
    /// `┏━┓` heavy lines.
    Thick,
}

impl BorderKind {
    /// `[top_left, top_right, bottom_left, bottom_right, horizontal, vertical]`
    pub fn glyphs(self) -> [char; 6] {
        match self {
            BorderKind::Rounded => ['╭', '╮', '╰', '╯', '─', '│'],
            BorderKind::Thick => ['┏', '┓', '┗', '┛', '━', '┃'],
        }
    }
}

/// One named style: colors, emphasis and layout hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleDescriptor {
    pub fg: ThemeColor,
    pub bg: ThemeColor,
    pub bold: bool,
    pub border: Option<BorderKind>,
    pub border_color: ThemeColor,
    pub margin_top: u16,
    pub margin_bottom: u16,
    /// Blank cells on every side inside the border.
    pub padding: u16,
    /// Minimum inner width, padding included.
    pub width: Option<u16>,
    /// Minimum inner height, padding included.
    pub height: Option<u16>,
    pub center: bool,
}

impl StyleDescriptor {
    fn fg(color: ThemeColor) -> Self {
        Self {
            fg: color,
            ..Self::default()
        }
    }

    fn bold(color: ThemeColor) -> Self {
        Self {
            fg: color,
            bold: true,
            ..Self::default()
        }
    }

    /// Builds the `console` style for the text itself.
    pub fn to_style(&self, mode: Option<ColorMode>) -> Style {
        let mut style = Style::new();
        if let Some(color) = self.fg.to_console_color(mode) {
            style = style.fg(color);
        }
        if let Some(color) = self.bg.to_console_color(mode) {
            style = style.bg(color);
        }
        if self.bold {
            style = style.bold();
        }
        style
    }

    /// Styles a string. Whether escape codes are emitted follows `console`'s
    /// terminal detection.
    pub fn paint(&self, text: &str, mode: Option<ColorMode>) -> String {
        self.to_style(mode).apply_to(text).to_string()
    }

    /// Lays out `content` with this style's padding, size, border and
    /// margins, and returns the resulting lines.
    pub fn frame(&self, content: &str, mode: Option<ColorMode>) -> Vec<String> {
        let text = self.to_style(mode);
        let edge = StyleDescriptor::fg(self.border_color).to_style(mode);
        let pad = self.padding as usize;

        let body: Vec<&str> = content.lines().collect();
        let content_width = body.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
        let inner_width = (content_width + 2 * pad).max(self.width.unwrap_or(0) as usize);
        let inner_height = (body.len() + 2 * pad).max(self.height.unwrap_or(0) as usize);

        let mut rows: Vec<String> = Vec::with_capacity(inner_height);
        let blank = " ".repeat(inner_width);
        for _ in 0..pad {
            rows.push(blank.clone());
        }
        for line in &body {
            let width = measure_text_width(line);
            let slack = inner_width - width - 2 * pad;
            let left = if self.center { pad + slack / 2 } else { pad };
            let right = inner_width - width - left;
            rows.push(format!(
                "{}{}{}",
                " ".repeat(left),
                text.apply_to(line),
                " ".repeat(right)
            ));
        }
        while rows.len() < inner_height {
            rows.push(blank.clone());
        }

        let mut out = Vec::new();
        out.extend((0..self.margin_top).map(|_| String::new()));
        match self.border {
            Some(kind) => {
                let [tl, tr, bl, br, h, v] = kind.glyphs();
                let rule: String = std::iter::repeat(h).take(inner_width).collect();
                out.push(edge.apply_to(format!("{tl}{rule}{tr}")).to_string());
                for row in rows {
                    out.push(format!("{}{}{}", edge.apply_to(v), row, edge.apply_to(v)));
                }
                out.push(edge.apply_to(format!("{bl}{rule}{br}")).to_string());
            }
            None => out.extend(rows),
        }
        out.extend((0..self.margin_bottom).map(|_| String::new()));
        out
    }
}

/// Every named style for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    theme_name: String,

    pub title: StyleDescriptor,
    pub menu_item: StyleDescriptor,
    pub selected_item: StyleDescriptor,
    pub help: StyleDescriptor,

    pub cell: StyleDescriptor,
    pub selected_cell: StyleDescriptor,
    pub border: StyleDescriptor,
    pub game_over: StyleDescriptor,
    pub sidebar: StyleDescriptor,

    pub white_piece: StyleDescriptor,
    pub black_piece: StyleDescriptor,
    pub snake: StyleDescriptor,
    pub snake_head: StyleDescriptor,
    pub food: StyleDescriptor,
    pub player1: StyleDescriptor,
    pub player2: StyleDescriptor,

    pub success: StyleDescriptor,
    pub warning: StyleDescriptor,
    pub error: StyleDescriptor,

    tetris: [StyleDescriptor; 7],
    primary: StyleDescriptor,

    /// Screen background, `None` when the theme leaves it to the terminal.
    pub terminal_background: ThemeColor,
}

impl StyleSet {
    /// Derives the full style catalogue from a theme.
    pub fn derive(theme: &Theme) -> StyleSet {
        let c = |slot: SlotId| theme.get(slot);

        let cell = StyleDescriptor {
            border: Some(BorderKind::Rounded),
            border_color: c(SlotId::CellBorder),
            bg: c(SlotId::CellBackground),
            width: Some(3),
            height: Some(1),
            center: true,
            ..StyleDescriptor::default()
        };

        StyleSet {
            theme_name: theme.name().to_string(),

            title: StyleDescriptor {
                margin_bottom: 1,
                ..StyleDescriptor::bold(c(SlotId::Primary))
            },
            menu_item: StyleDescriptor::fg(c(SlotId::Secondary)),
            selected_item: StyleDescriptor::bold(c(SlotId::Accent)),
            help: StyleDescriptor {
                margin_top: 1,
                ..StyleDescriptor::fg(c(SlotId::Secondary))
            },

            cell,
            selected_cell: StyleDescriptor {
                border: Some(BorderKind::Thick),
                border_color: c(SlotId::SelectedCell),
                ..cell
            },
            border: StyleDescriptor::bold(c(SlotId::BoardBorder)),
            game_over: StyleDescriptor::bold(c(SlotId::Error)),
            sidebar: StyleDescriptor {
                border: Some(BorderKind::Rounded),
                border_color: c(SlotId::BoardBorder),
                bg: c(SlotId::BoardBackground),
                padding: 1,
                width: Some(15),
                ..StyleDescriptor::default()
            },

            white_piece: StyleDescriptor::bold(c(SlotId::WhitePiece)),
            black_piece: StyleDescriptor::bold(c(SlotId::BlackPiece)),
            snake: StyleDescriptor::bold(c(SlotId::SnakeBody)),
            snake_head: StyleDescriptor::bold(c(SlotId::SnakeHead)),
            food: StyleDescriptor::bold(c(SlotId::Food)),
            player1: StyleDescriptor::bold(c(SlotId::Player1)),
            player2: StyleDescriptor::bold(c(SlotId::Player2)),

            success: StyleDescriptor::bold(c(SlotId::Success)),
            warning: StyleDescriptor::bold(c(SlotId::Warning)),
            error: StyleDescriptor::bold(c(SlotId::Error)),

            tetris: [
                StyleDescriptor::bold(c(SlotId::TetrisI)),
                StyleDescriptor::bold(c(SlotId::TetrisO)),
                StyleDescriptor::bold(c(SlotId::TetrisT)),
                StyleDescriptor::bold(c(SlotId::TetrisS)),
                StyleDescriptor::bold(c(SlotId::TetrisZ)),
                StyleDescriptor::bold(c(SlotId::TetrisJ)),
                StyleDescriptor::bold(c(SlotId::TetrisL)),
            ],
            primary: StyleDescriptor::bold(c(SlotId::Primary)),

            terminal_background: theme.terminal_background(),
        }
    }

    /// Name of the theme this set was derived from.
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Style for a tetromino letter; unknown letters get the primary color.
    pub fn tetris_piece(&self, letter: char) -> &StyleDescriptor {
        match SlotId::tetromino(letter) {
            Some(slot) => &self.tetris[slot.index() - SlotId::TetrisI.index()],
            None => &self.primary,
        }
    }
}
