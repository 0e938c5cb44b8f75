use arcade_theme::{ColorMode, StyleDescriptor, StyleSet};

use crate::screen::{join_horizontal, join_vertical};

type Mode = Option<ColorMode>;

/// Title on top, then the board, the status line and the key help.
fn layout(
    styles: &StyleSet,
    mode: Mode,
    title: &str,
    board: Vec<String>,
    status: &str,
    help: &str,
) -> Vec<String> {
    join_vertical(&[
        styles.title.frame(title, mode),
        board,
        vec![String::new()],
        vec![styles.selected_item.paint(status, mode)],
        styles.help.frame(help, mode),
    ])
}

/// A plain box drawn with the board border style around pre-styled rows.
fn boxed(styles: &StyleSet, mode: Mode, inner_width: usize, rows: Vec<String>) -> Vec<String> {
    let edge = |s: &str| styles.border.paint(s, mode);
    let rule = "─".repeat(inner_width);

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(edge(&format!("┌{rule}┐")));
    out.extend(rows.into_iter().map(|row| format!("{}{}{}", edge("│"), row, edge("│"))));
    out.push(edge(&format!("└{rule}┘")));
    out
}

const SNAKE_WIDTH: usize = 15;
const SNAKE_HEIGHT: usize = 10;
const SNAKE_BODY: [(usize, usize); 5] = [(3, 4), (4, 4), (5, 4), (6, 4), (6, 5)];
const SNAKE_HEAD: (usize, usize) = (7, 5);
const FOOD: (usize, usize) = (11, 2);

pub(super) fn snake(styles: &StyleSet, mode: Mode) -> Vec<String> {
    let rows: Vec<String> = (0..SNAKE_HEIGHT)
        .map(|y| {
            (0..SNAKE_WIDTH)
                .map(|x| {
                    if (x, y) == SNAKE_HEAD {
                        format!("{} ", styles.snake_head.paint("◉", mode))
                    } else if SNAKE_BODY.contains(&(x, y)) {
                        format!("{} ", styles.snake.paint("●", mode))
                    } else if (x, y) == FOOD {
                        format!("{} ", styles.food.paint("◆", mode))
                    } else {
                        "  ".to_string()
                    }
                })
                .collect::<String>()
        })
        .collect();

    layout(
        styles,
        mode,
        "Snake",
        boxed(styles, mode, SNAKE_WIDTH * 2, rows),
        &format!("Score: {}", SNAKE_BODY.len() - 1),
        "↑ ↓ ← → to move, Space to pause, ESC to return to menu",
    )
}

const WELL: [&str; 12] = [
    "....I.....",
    "....I.....",
    "....I.....",
    "....I.....",
    "..........",
    "..........",
    "..........",
    "..........",
    "T.........",
    "TTS...ZZ.L",
    "TSSOOJJZZL",
    "ISOOJJJLLL",
];

fn cells(row: &str, styles: &StyleSet, mode: Mode) -> String {
    row.chars()
        .map(|c| match c {
            '.' => "  ".to_string(),
            letter => styles.tetris_piece(letter).paint("██", mode),
        })
        .collect()
}

pub(super) fn tetris(styles: &StyleSet, mode: Mode) -> Vec<String> {
    let well = boxed(
        styles,
        mode,
        20,
        WELL.iter().map(|row| cells(row, styles, mode)).collect(),
    );

    let sidebar = sidebar(styles, mode);
    let board = join_horizontal(&[well, vec![" ".to_string()], sidebar]);

    layout(
        styles,
        mode,
        "Tetris",
        board,
        "Playing...",
        "← → to move, ↓ to drop, ↑ to rotate, Space to hard drop, ESC to return to menu",
    )
}

fn sidebar(styles: &StyleSet, mode: Mode) -> Vec<String> {
    let content = [
        "Score: 1200".to_string(),
        String::new(),
        "Level: 3".to_string(),
        String::new(),
        "Lines: 14".to_string(),
        String::new(),
        styles.selected_item.paint("Next:", mode),
        cells("TTT", styles, mode),
        cells(".T.", styles, mode),
    ]
    .join("\n");
    styles.sidebar.frame(&content, mode)
}

const BACK_RANK_WHITE: [char; 8] = ['♖', '♘', '♗', '♕', '♔', '♗', '♘', '♖'];
const BACK_RANK_BLACK: [char; 8] = ['♜', '♞', '♝', '♛', '♚', '♝', '♞', '♜'];
const CHESS_CURSOR: (usize, usize) = (4, 6);

fn chess_piece(x: usize, y: usize) -> Option<(char, bool)> {
    match y {
        0 => Some((BACK_RANK_BLACK[x], false)),
        1 => Some(('♟', false)),
        6 => Some(('♙', true)),
        7 => Some((BACK_RANK_WHITE[x], true)),
        _ => None,
    }
}

fn cell_style(styles: &StyleSet, selected: bool) -> &StyleDescriptor {
    if selected {
        &styles.selected_cell
    } else {
        &styles.cell
    }
}

pub(super) fn chess(styles: &StyleSet, mode: Mode) -> Vec<String> {
    let board: Vec<String> = (0..8)
        .flat_map(|y| {
            let row: Vec<Vec<String>> = (0..8)
                .map(|x| {
                    let content = match chess_piece(x, y) {
                        Some((piece, true)) => styles.white_piece.paint(&piece.to_string(), mode),
                        Some((piece, false)) => styles.black_piece.paint(&piece.to_string(), mode),
                        None => " ".to_string(),
                    };
                    cell_style(styles, (x, y) == CHESS_CURSOR).frame(&content, mode)
                })
                .collect();
            join_horizontal(&row)
        })
        .collect();

    layout(
        styles,
        mode,
        "Chess",
        board,
        "Current Player: White",
        "↑ ↓ ← → to move, Enter to select, ESC to return to menu",
    )
}

const TICTACTOE: [&str; 3] = ["X.O", ".X.", "O.."];
const TICTACTOE_CURSOR: (usize, usize) = (2, 2);

pub(super) fn tictactoe(styles: &StyleSet, mode: Mode) -> Vec<String> {
    let board: Vec<String> = TICTACTOE
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            let marks: Vec<Vec<String>> = row
                .chars()
                .enumerate()
                .map(|(x, mark)| {
                    let content = match mark {
                        'X' => styles.player1.paint("✕", mode),
                        'O' => styles.player2.paint("○", mode),
                        _ => " ".to_string(),
                    };
                    cell_style(styles, (x, y) == TICTACTOE_CURSOR).frame(&content, mode)
                })
                .collect();
            join_horizontal(&marks)
        })
        .collect();

    layout(
        styles,
        mode,
        "Tic-Tac-Toe",
        board,
        "Current Player: X",
        "↑ ↓ ← → to move, Enter to place, ESC to return to menu",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_theme::Theme;
    use console::measure_text_width;

    fn plain(lines: &[String]) -> Vec<String> {
        lines.iter().map(|l| console::strip_ansi_codes(l).into_owned()).collect()
    }

    fn styles() -> StyleSet {
        StyleSet::derive(&Theme::builtin_default())
    }

    #[test]
    fn test_snake_board() {
        let lines = plain(&snake(&styles(), None));
        let text = lines.join("\n");
        assert!(lines[0].contains("Snake"));
        assert_eq!(text.matches('◉').count(), 1);
        assert_eq!(text.matches('●').count(), SNAKE_BODY.len());
        assert_eq!(text.matches('◆').count(), 1);
        assert!(text.contains(&format!("┌{}┐", "─".repeat(30))));
        assert!(text.contains("Score: 4"));
    }

    #[test]
    fn test_tetris_has_every_piece() {
        let lines = plain(&tetris(&styles(), None));
        let text = lines.join("\n");
        assert!(text.contains("Next:"));
        assert!(text.contains("Lines: 14"));
        assert!(text.contains('╭'));
        for letter in ['I', 'O', 'T', 'S', 'Z', 'J', 'L'] {
            assert!(WELL.iter().any(|row| row.contains(letter)), "{letter}");
        }
    }

    #[test]
    fn test_chess_board_is_eight_cells_wide() {
        let lines = plain(&chess(&styles(), None));
        let text = lines.join("\n");
        assert!(text.contains("♔") && text.contains("♚"));
        assert_eq!(text.matches('♙').count(), 8);
        assert_eq!(text.matches('♟').count(), 8);
        // one thick cell for the cursor
        assert_eq!(text.matches('┏').count(), 1);
        assert_eq!(text.matches('╭').count(), 63);
    }

    #[test]
    fn test_tictactoe_rows_align() {
        let lines = plain(&tictactoe(&styles(), None));
        let board: Vec<&String> = lines.iter().filter(|l| l.contains('│') || l.contains('┃')).collect();
        assert_eq!(board.len(), 3);
        let width = measure_text_width(board[0]);
        assert!(lines.iter().all(|l| measure_text_width(l) == width));
        assert!(lines.join("\n").contains("Current Player: X"));
    }
}
