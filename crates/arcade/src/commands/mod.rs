//! Subcommand handlers.
//!
//! Handlers write to any `io::Write` so tests can capture their output.

mod games;
mod theme;

pub use games::{list_games, play};
pub use theme::{check_theme, list_themes, preview_theme, set_theme};

use std::io;

use anyhow::Result;

use crate::app::App;
use crate::cli::{Cli, Commands, ThemeCommands};
use crate::menu;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = &cli.command else {
        let app = App::init(&cli, false)?;
        return menu::run(&app.themes, app.color_mode);
    };

    let mut app = App::init(&cli, true)?;
    let mut out = io::stdout().lock();
    match command {
        Commands::List => list_games(&mut out),
        Commands::Play { game } => play(&app, game),
        Commands::Theme(ThemeCommands::List) => list_themes(&app.themes, &mut out),
        Commands::Theme(ThemeCommands::Set { name }) => set_theme(&mut app, name, &mut out),
        Commands::Theme(ThemeCommands::Preview { name }) => {
            preview_theme(&app.themes, name, app.color_mode, &mut out)
        }
        Commands::Theme(ThemeCommands::Check { file }) => check_theme(file, &mut out),
    }
}
