//! Game catalogue and the game screen loop.
//!
//! Each game currently shows a static sample board drawn with the active
//! theme; any quit key returns to the caller.

mod boards;

use std::io;

use arcade_theme::{ColorMode, StyleSet, ThemeManager};
use console::Key;

use crate::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Chess,
    Snake,
    Tetris,
    TicTacToe,
}

impl GameKind {
    /// Renders the game screen (title, board, status and help).
    pub fn render(self, styles: &StyleSet, mode: Option<ColorMode>) -> Vec<String> {
        match self {
            GameKind::Chess => boards::chess(styles, mode),
            GameKind::Snake => boards::snake(styles, mode),
            GameKind::Tetris => boards::tetris(styles, mode),
            GameKind::TicTacToe => boards::tictactoe(styles, mode),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: GameKind,
}

/// All games, sorted by id.
pub const GAMES: [GameInfo; 4] = [
    GameInfo {
        id: "chess",
        name: "Chess",
        description: "Strategic board game",
        kind: GameKind::Chess,
    },
    GameInfo {
        id: "snake",
        name: "Snake",
        description: "Classic Snake game",
        kind: GameKind::Snake,
    },
    GameInfo {
        id: "tetris",
        name: "Tetris",
        description: "Block puzzle game",
        kind: GameKind::Tetris,
    },
    GameInfo {
        id: "tictactoe",
        name: "Tic-Tac-Toe",
        description: "We all know it",
        kind: GameKind::TicTacToe,
    },
];

pub fn find(id: &str) -> Option<&'static GameInfo> {
    GAMES.iter().find(|g| g.id == id)
}

/// Esc, q and Ctrl-C leave a game.
pub fn is_quit_key(key: &Key) -> bool {
    matches!(key, Key::Escape | Key::Char('q') | Key::CtrlC)
}

/// Shows `game` until a quit key is pressed.
///
/// Styles are fetched on every redraw, so the screen follows theme changes.
pub fn play(game: &GameInfo, screen: &Screen, themes: &ThemeManager) -> io::Result<()> {
    tracing::debug!(game = game.id, "starting game");
    loop {
        let styles = themes.styles();
        screen.draw(
            &game.kind.render(&styles, screen.mode()),
            styles.terminal_background,
        )?;
        if is_quit_key(&screen.read_key()?) {
            return Ok(());
        }
    }
}
