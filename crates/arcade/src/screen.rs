//! Full-screen drawing on top of `console::Term`.
//!
//! Views hand over a list of already-styled lines; the screen centers the
//! block and fills the rest of the terminal with the theme's background.

use std::io;

use arcade_theme::{ColorMode, ThemeColor};
use console::{measure_text_width, Key, Style, Term};

/// Pads every line of a block to the block's widest line.
fn pad_block(block: &[String]) -> (usize, Vec<String>) {
    let width = block.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
    let lines = block
        .iter()
        .map(|l| format!("{}{}", l, " ".repeat(width - measure_text_width(l))))
        .collect();
    (width, lines)
}

/// Places blocks side by side, top-aligned.
pub fn join_horizontal(blocks: &[Vec<String>]) -> Vec<String> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let padded: Vec<(usize, Vec<String>)> = blocks.iter().map(|b| pad_block(b)).collect();

    (0..height)
        .map(|row| {
            padded
                .iter()
                .map(|(width, lines)| match lines.get(row) {
                    Some(line) => line.clone(),
                    None => " ".repeat(*width),
                })
                .collect::<String>()
        })
        .collect()
}

/// Stacks blocks vertically, centering each line within the widest one.
pub fn join_vertical(blocks: &[Vec<String>]) -> Vec<String> {
    let width = blocks
        .iter()
        .flatten()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0);

    blocks
        .iter()
        .flatten()
        .map(|line| {
            let slack = width - measure_text_width(line);
            let left = slack / 2;
            format!("{}{}{}", " ".repeat(left), line, " ".repeat(slack - left))
        })
        .collect()
}

/// Centers `content` in a `width` x `height` area, painting the margins with
/// `background`.
pub fn place(
    content: &[String],
    width: usize,
    height: usize,
    background: ThemeColor,
    mode: Option<ColorMode>,
) -> Vec<String> {
    let fill = match background.to_console_color(mode) {
        Some(color) => Style::new().bg(color),
        None => Style::new(),
    };
    let (block_width, block) = pad_block(content);
    let left = width.saturating_sub(block_width) / 2;
    let right = width.saturating_sub(block_width + left);
    let top = height.saturating_sub(block.len()) / 2;
    let bottom = height.saturating_sub(block.len() + top);
    let blank = fill.apply_to(" ".repeat(width)).to_string();

    let mut out = Vec::with_capacity(top + block.len() + bottom);
    out.extend((0..top).map(|_| blank.clone()));
    for line in block {
        out.push(format!(
            "{}{}{}",
            fill.apply_to(" ".repeat(left)),
            line,
            fill.apply_to(" ".repeat(right))
        ));
    }
    out.extend((0..bottom).map(|_| blank.clone()));
    out
}

/// The interactive terminal.
pub struct Screen {
    term: Term,
    mode: Option<ColorMode>,
}

impl Screen {
    pub fn new(mode: Option<ColorMode>) -> Self {
        Screen {
            term: Term::stdout(),
            mode,
        }
    }

    pub fn mode(&self) -> Option<ColorMode> {
        self.mode
    }

    /// True when stdout is a terminal a user can type into.
    pub fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    pub fn enter(&self) -> io::Result<()> {
        self.term.hide_cursor()?;
        self.term.clear_screen()
    }

    pub fn leave(&self) -> io::Result<()> {
        self.term.clear_screen()?;
        self.term.show_cursor()
    }

    /// Redraws the whole screen with `content` centered on `background`.
    pub fn draw(&self, content: &[String], background: ThemeColor) -> io::Result<()> {
        let (rows, cols) = self.term.size();
        // The last row stays free so the terminal does not scroll.
        let height = (rows as usize).saturating_sub(1);
        let lines = place(content, cols as usize, height, background, self.mode);
        self.term.move_cursor_to(0, 0)?;
        self.term.write_str(&lines.join("\n"))?;
        self.term.flush()
    }

    /// Blocks for one key. Ctrl-C arrives as [`Key::CtrlC`].
    pub fn read_key(&self) -> io::Result<Key> {
        match self.term.read_key() {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Key::CtrlC),
            other => other,
        }
    }
}
