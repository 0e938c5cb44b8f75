use std::io::Write;

use anyhow::{bail, Result};

use crate::app::App;
use crate::games::{self, GAMES};
use crate::screen::Screen;

pub fn list_games(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Available Games:")?;
    writeln!(out)?;
    for game in &GAMES {
        writeln!(out, "  {:<12} {}", game.id, game.description)?;
    }
    Ok(())
}

/// Opens one game directly, skipping the menu.
pub fn play(app: &App, id: &str) -> Result<()> {
    let Some(game) = games::find(id) else {
        bail!("Game {} does not exist", id);
    };

    let screen = Screen::new(app.color_mode);
    if !screen.is_interactive() {
        bail!("{} needs a terminal", game.name);
    }
    screen.enter()?;
    let result = games::play(game, &screen, &app.themes);
    screen.leave()?;
    Ok(result?)
}
