//! Built-in themes.
//!
//! These are constructed in-process and cannot fail. `default` is also the
//! baseline the resolver falls back to for slots a theme file leaves unset.

use super::slot::SlotId;
use super::theme::Theme;
use crate::style::ThemeColor;

/// Name of the built-in default theme.
pub const DEFAULT_THEME: &str = "default";

/// Name of the built-in adaptive theme.
pub const SYSTEM_THEME: &str = "system";

fn table(entries: &[(SlotId, ThemeColor)]) -> [ThemeColor; SlotId::COUNT] {
    let mut slots = [ThemeColor::None; SlotId::COUNT];
    for (slot, color) in entries {
        slots[slot.index()] = *color;
    }
    slots
}

impl Theme {
    /// The `default` theme: fixed colors on a dark frame background.
    pub fn builtin_default() -> Theme {
        use ThemeColor as C;
        let slots = table(&[
            (SlotId::Primary, C::hex("#ffffff")),
            (SlotId::Secondary, C::hex("#888888")),
            (SlotId::Accent, C::hex("#0066cc")),
            (SlotId::Success, C::hex("#22c55e")),
            (SlotId::Warning, C::hex("#f59e0b")),
            (SlotId::Error, C::hex("#ef4444")),
            (SlotId::BoardBorder, C::hex("#888888")),
            (SlotId::BoardBackground, C::None),
            (SlotId::CellBorder, C::hex("#888888")),
            (SlotId::CellBackground, C::None),
            (SlotId::SelectedCell, C::hex("#0066cc")),
            (SlotId::Player1, C::hex("#22c55e")),
            (SlotId::Player2, C::hex("#ef4444")),
            (SlotId::SnakeBody, C::hex("#22c55e")),
            (SlotId::SnakeHead, C::hex("#0066cc")),
            (SlotId::Food, C::hex("#ef4444")),
            (SlotId::WhitePiece, C::hex("#ffffff")),
            (SlotId::BlackPiece, C::hex("#444444")),
            (SlotId::TetrisI, C::hex("#00f5ff")),
            (SlotId::TetrisO, C::hex("#ffff00")),
            (SlotId::TetrisT, C::hex("#800080")),
            (SlotId::TetrisS, C::hex("#00ff00")),
            (SlotId::TetrisZ, C::hex("#ff0000")),
            (SlotId::TetrisJ, C::hex("#0000ff")),
            (SlotId::TetrisL, C::hex("#ffa500")),
        ]);
        Theme::from_parts(DEFAULT_THEME, slots, C::hex("#1a1a1a"))
    }

    /// The `system` theme: every color adapts to the terminal background and
    /// no frame background is painted.
    pub fn builtin_system() -> Theme {
        use ThemeColor as C;
        // (light, dark)
        let slots = table(&[
            (SlotId::Primary, C::adaptive("#1a1a1a", "#dddddd")),
            (SlotId::Secondary, C::adaptive("#585858", "#a8a8a8")),
            (SlotId::Accent, C::adaptive("#0066cc", "#66b3ff")),
            (SlotId::Success, C::adaptive("#22c55e", "#4ade80")),
            (SlotId::Warning, C::adaptive("#f59e0b", "#fbbf24")),
            (SlotId::Error, C::adaptive("#ef4444", "#f87171")),
            (SlotId::BoardBorder, C::adaptive("#585858", "#a8a8a8")),
            (SlotId::BoardBackground, C::None),
            (SlotId::CellBorder, C::adaptive("#585858", "#a8a8a8")),
            (SlotId::CellBackground, C::None),
            (SlotId::SelectedCell, C::adaptive("#0066cc", "#66b3ff")),
            (SlotId::Player1, C::adaptive("#22c55e", "#4ade80")),
            (SlotId::Player2, C::adaptive("#ef4444", "#f87171")),
            (SlotId::SnakeBody, C::adaptive("#22c55e", "#4ade80")),
            (SlotId::SnakeHead, C::adaptive("#0066cc", "#66b3ff")),
            (SlotId::Food, C::adaptive("#ef4444", "#f87171")),
            (SlotId::WhitePiece, C::adaptive("#1a1a1a", "#ffffff")),
            (SlotId::BlackPiece, C::adaptive("#666666", "#444444")),
            (SlotId::TetrisI, C::adaptive("#0891b2", "#00f5ff")),
            (SlotId::TetrisO, C::adaptive("#eab308", "#ffff00")),
            (SlotId::TetrisT, C::adaptive("#7c3aed", "#a855f7")),
            (SlotId::TetrisS, C::adaptive("#16a34a", "#22c55e")),
            (SlotId::TetrisZ, C::adaptive("#dc2626", "#ef4444")),
            (SlotId::TetrisJ, C::adaptive("#2563eb", "#3b82f6")),
            (SlotId::TetrisL, C::adaptive("#ea580c", "#f97316")),
        ]);
        Theme::from_parts(SYSTEM_THEME, slots, C::None)
    }

    /// Both built-ins, `default` first.
    pub fn builtins() -> [Theme; 2] {
        [Theme::builtin_default(), Theme::builtin_system()]
    }
}
