//! The interactive game menu.

use anyhow::{bail, Result};
use arcade_theme::{ColorMode, StyleSet, ThemeManager};
use console::Key;

use crate::games::{self, GameInfo, GAMES};
use crate::screen::{join_vertical, Screen};

const LOGO: &str = concat!(
    "                             _      \n",
    "     /\\                     | |     \n",
    "    /  \\   _ __ ___ __ _  __| | ___ \n",
    "   / /\\ \\ | '__/ __/ _` |/ _` |/ _ \\\n",
    "  / ____ \\| | | (_| (_| | (_| |  __/\n",
    " /_/    \\_\\_|  \\___\\__,_|\\__,_|\\___|",
);

const SEPARATOR: &str = "──────────────────────────────────────";
const HELP: &str = "↑/↓ to move, ←/→ to change theme, Enter to select, q to quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Nothing changed.
    None,
    Redraw,
    Start(&'static GameInfo),
    Quit,
}

#[derive(Debug, Default)]
pub struct Menu {
    cursor: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &'static GameInfo {
        &GAMES[self.cursor]
    }

    /// Applies one key press. Theme keys switch the manager's current theme.
    pub fn handle_key(&mut self, key: &Key, themes: &ThemeManager) -> MenuAction {
        match key {
            Key::ArrowUp | Key::Char('k') => {
                self.cursor = (self.cursor + GAMES.len() - 1) % GAMES.len();
                MenuAction::Redraw
            }
            Key::ArrowDown | Key::Char('j') => {
                self.cursor = (self.cursor + 1) % GAMES.len();
                MenuAction::Redraw
            }
            Key::ArrowLeft | Key::Char('h') => match themes.cycle_previous() {
                Some(_) => MenuAction::Redraw,
                None => MenuAction::None,
            },
            Key::ArrowRight | Key::Char('l') => match themes.cycle_next() {
                Some(_) => MenuAction::Redraw,
                None => MenuAction::None,
            },
            Key::Enter => MenuAction::Start(self.selected()),
            Key::Char('q') | Key::CtrlC => MenuAction::Quit,
            _ => MenuAction::None,
        }
    }

    pub fn render(&self, styles: &StyleSet, mode: Option<ColorMode>) -> Vec<String> {
        let mut items: Vec<String> = GAMES
            .iter()
            .enumerate()
            .map(|(i, game)| {
                let line = format!("{} — {}", game.name, game.description);
                if i == self.cursor {
                    styles.selected_item.paint(&format!("> {line}"), mode)
                } else {
                    styles.menu_item.paint(&format!(" {line}"), mode)
                }
            })
            .collect();
        items.push(styles.menu_item.paint(SEPARATOR, mode));
        items.push(
            styles
                .menu_item
                .paint(&format!(" Theme: ← {} → ", styles.theme_name()), mode),
        );

        join_vertical(&[
            styles.title.frame(LOGO, mode),
            items,
            styles.help.frame(HELP, mode),
        ])
    }
}

/// Runs the menu until the user quits. Games return here when they end.
pub fn run(themes: &ThemeManager, mode: Option<ColorMode>) -> Result<()> {
    let screen = Screen::new(mode);
    if !screen.is_interactive() {
        bail!("the menu needs a terminal; try `arcade list` or `arcade play <game>`");
    }

    screen.enter()?;
    let result = event_loop(&screen, themes);
    screen.leave()?;
    result
}

fn event_loop(screen: &Screen, themes: &ThemeManager) -> Result<()> {
    let mut menu = Menu::new();
    let mut dirty = true;
    loop {
        if dirty {
            let styles = themes.styles();
            screen.draw(&menu.render(&styles, screen.mode()), styles.terminal_background)?;
        }
        dirty = match menu.handle_key(&screen.read_key()?, themes) {
            MenuAction::None => false,
            MenuAction::Redraw => true,
            MenuAction::Start(game) => {
                games::play(game, screen, themes)?;
                true
            }
            MenuAction::Quit => return Ok(()),
        };
    }
}
