//! The fixed set of color slots every theme provides.

use std::fmt;

/// Grouping of slots in theme files and previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ui,
    Board,
    Pieces,
    Chess,
    Tetris,
}

impl Category {
    /// All categories, in file and preview order.
    pub const ALL: [Category; 5] = [
        Category::Ui,
        Category::Board,
        Category::Pieces,
        Category::Chess,
        Category::Tetris,
    ];

    /// Key of the category object in a theme file.
    pub fn key(self) -> &'static str {
        match self {
            Category::Ui => "ui",
            Category::Board => "board",
            Category::Pieces => "pieces",
            Category::Chess => "chess",
            Category::Tetris => "tetris",
        }
    }

    /// Slots belonging to this category, in declaration order.
    pub fn slots(self) -> impl Iterator<Item = SlotId> {
        SlotId::ALL.into_iter().filter(move |s| s.category() == self)
    }
}

/// One named color purpose within a theme.
///
/// The declaration order is the resolution order: UI slots come first
/// because board and piece slots fall back to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotId {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,

    BoardBorder,
    BoardBackground,
    CellBorder,
    CellBackground,
    SelectedCell,

    Player1,
    Player2,
    SnakeBody,
    SnakeHead,
    Food,

    WhitePiece,
    BlackPiece,

    TetrisI,
    TetrisO,
    TetrisT,
    TetrisS,
    TetrisZ,
    TetrisJ,
    TetrisL,
}

impl SlotId {
    /// Number of slots.
    pub const COUNT: usize = 25;

    /// Every slot, in resolution order.
    pub const ALL: [SlotId; SlotId::COUNT] = [
        SlotId::Primary,
        SlotId::Secondary,
        SlotId::Accent,
        SlotId::Success,
        SlotId::Warning,
        SlotId::Error,
        SlotId::BoardBorder,
        SlotId::BoardBackground,
        SlotId::CellBorder,
        SlotId::CellBackground,
        SlotId::SelectedCell,
        SlotId::Player1,
        SlotId::Player2,
        SlotId::SnakeBody,
        SlotId::SnakeHead,
        SlotId::Food,
        SlotId::WhitePiece,
        SlotId::BlackPiece,
        SlotId::TetrisI,
        SlotId::TetrisO,
        SlotId::TetrisT,
        SlotId::TetrisS,
        SlotId::TetrisZ,
        SlotId::TetrisJ,
        SlotId::TetrisL,
    ];

    /// Position in [`SlotId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Key used in the flat `theme` map of a theme file, e.g. `board_border`.
    pub fn key(self) -> &'static str {
        match self {
            SlotId::Primary => "primary",
            SlotId::Secondary => "secondary",
            SlotId::Accent => "accent",
            SlotId::Success => "success",
            SlotId::Warning => "warning",
            SlotId::Error => "error",
            SlotId::BoardBorder => "board_border",
            SlotId::BoardBackground => "board_background",
            SlotId::CellBorder => "cell_border",
            SlotId::CellBackground => "cell_background",
            SlotId::SelectedCell => "selected_cell",
            SlotId::Player1 => "player1",
            SlotId::Player2 => "player2",
            SlotId::SnakeBody => "snake_body",
            SlotId::SnakeHead => "snake_head",
            SlotId::Food => "food",
            SlotId::WhitePiece => "white_piece",
            SlotId::BlackPiece => "black_piece",
            SlotId::TetrisI => "tetris_i",
            SlotId::TetrisO => "tetris_o",
            SlotId::TetrisT => "tetris_t",
            SlotId::TetrisS => "tetris_s",
            SlotId::TetrisZ => "tetris_z",
            SlotId::TetrisJ => "tetris_j",
            SlotId::TetrisL => "tetris_l",
        }
    }

    /// Category the slot is grouped under.
    pub fn category(self) -> Category {
        match self {
            SlotId::Primary
            | SlotId::Secondary
            | SlotId::Accent
            | SlotId::Success
            | SlotId::Warning
            | SlotId::Error => Category::Ui,
            SlotId::BoardBorder
            | SlotId::BoardBackground
            | SlotId::CellBorder
            | SlotId::CellBackground
            | SlotId::SelectedCell => Category::Board,
            SlotId::Player1
            | SlotId::Player2
            | SlotId::SnakeBody
            | SlotId::SnakeHead
            | SlotId::Food => Category::Pieces,
            SlotId::WhitePiece | SlotId::BlackPiece => Category::Chess,
            SlotId::TetrisI
            | SlotId::TetrisO
            | SlotId::TetrisT
            | SlotId::TetrisS
            | SlotId::TetrisZ
            | SlotId::TetrisJ
            | SlotId::TetrisL => Category::Tetris,
        }
    }

    /// Key inside the category object, e.g. `border` for `board_border`.
    pub fn category_key(self) -> &'static str {
        match self {
            SlotId::BoardBorder => "border",
            SlotId::BoardBackground => "background",
            SlotId::TetrisI => "i",
            SlotId::TetrisO => "o",
            SlotId::TetrisT => "t",
            SlotId::TetrisS => "s",
            SlotId::TetrisZ => "z",
            SlotId::TetrisJ => "j",
            SlotId::TetrisL => "l",
            other => other.key(),
        }
    }

    /// Looks up a slot by its flat key.
    pub fn from_key(key: &str) -> Option<SlotId> {
        SlotId::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Looks up a slot by category and in-category key.
    ///
    /// Flat keys are accepted too, so `board: { board_border: ... }` works.
    pub fn from_category_key(category: Category, key: &str) -> Option<SlotId> {
        category
            .slots()
            .find(|s| s.category_key() == key || s.key() == key)
    }

    /// The tetromino slot for a piece letter (`I O T S Z J L`, any case).
    pub fn tetromino(letter: char) -> Option<SlotId> {
        match letter.to_ascii_uppercase() {
            'I' => Some(SlotId::TetrisI),
            'O' => Some(SlotId::TetrisO),
            'T' => Some(SlotId::TetrisT),
            'S' => Some(SlotId::TetrisS),
            'Z' => Some(SlotId::TetrisZ),
            'J' => Some(SlotId::TetrisJ),
            'L' => Some(SlotId::TetrisL),
            _ => None,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, slot) in SlotId::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_ui_slots_come_first() {
        let first_non_ui = SlotId::ALL
            .iter()
            .position(|s| s.category() != Category::Ui)
            .unwrap();
        assert!(SlotId::ALL[first_non_ui..]
            .iter()
            .all(|s| s.category() != Category::Ui));
    }

    #[test]
    fn test_key_roundtrip() {
        for slot in SlotId::ALL {
            assert_eq!(SlotId::from_key(slot.key()), Some(slot));
            assert_eq!(
                SlotId::from_category_key(slot.category(), slot.category_key()),
                Some(slot)
            );
        }
    }

    #[test]
    fn test_category_key_accepts_flat_key() {
        assert_eq!(
            SlotId::from_category_key(Category::Board, "board_border"),
            Some(SlotId::BoardBorder)
        );
        assert_eq!(
            SlotId::from_category_key(Category::Tetris, "tetris_l"),
            Some(SlotId::TetrisL)
        );
    }

    #[test]
    fn test_category_key_rejects_other_category() {
        assert_eq!(SlotId::from_category_key(Category::Ui, "border"), None);
        assert_eq!(SlotId::from_category_key(Category::Chess, "food"), None);
    }

    #[test]
    fn test_tetromino_letters() {
        assert_eq!(SlotId::tetromino('I'), Some(SlotId::TetrisI));
        assert_eq!(SlotId::tetromino('l'), Some(SlotId::TetrisL));
        assert_eq!(SlotId::tetromino('X'), None);
    }

    #[test]
    fn test_category_counts() {
        assert_eq!(Category::Ui.slots().count(), 6);
        assert_eq!(Category::Board.slots().count(), 5);
        assert_eq!(Category::Pieces.slots().count(), 5);
        assert_eq!(Category::Chess.slots().count(), 2);
        assert_eq!(Category::Tetris.slots().count(), 7);
    }
}
