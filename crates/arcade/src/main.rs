//! `arcade`: classic terminal games with swappable color themes.
//!
//! ```bash
//! arcade                       # game menu
//! arcade list                  # list games
//! arcade play snake            # start a game directly
//! arcade theme list            # list themes, marking the current one
//! arcade theme set ocean       # switch theme and remember it
//! arcade theme preview ocean   # color samples for a theme
//! arcade theme check my.yaml   # validate a theme file
//! ```

mod app;
mod cli;
mod commands;
mod config;
mod games;
mod logging;
mod menu;
mod screen;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
