//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorModeSetting;

/// Classic games in your terminal.
///
/// Run without a command to open the game menu.
#[derive(Debug, Parser)]
#[command(name = "arcade")]
#[command(version)]
#[command(about = "Classic games in your terminal")]
pub struct Cli {
    /// Extra theme directory; may be repeated, later ones win
    #[arg(long = "themes-dir", value_name = "DIR", global = true)]
    pub themes_dirs: Vec<PathBuf>,

    /// Force light or dark colors instead of asking the OS
    #[arg(long, value_enum, value_name = "MODE", global = true)]
    pub color_mode: Option<ColorModeSetting>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all games
    List,

    /// Launch a game directly without going through the menu
    Play {
        /// Game id, as shown by `arcade list`
        game: String,
    },

    /// Theme management commands
    #[command(subcommand)]
    Theme(ThemeCommands),
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// List all available themes
    List,

    /// Set the current theme and remember it
    Set {
        /// Theme name
        name: String,
    },

    /// Preview how a theme looks with sample colors
    Preview {
        /// Theme name
        name: String,
    },

    /// Load a single theme file and show the resolved colors
    Check {
        /// Path to a .json, .yaml or .yml theme file
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_menu() {
        let cli = Cli::try_parse_from(["arcade"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_theme_set() {
        let cli = Cli::try_parse_from(["arcade", "theme", "set", "ocean"]).unwrap();
        match cli.command {
            Some(Commands::Theme(ThemeCommands::Set { name })) => assert_eq!(name, "ocean"),
            other => panic!("Expected theme set, got {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "arcade",
            "theme",
            "list",
            "--themes-dir",
            "/a",
            "--themes-dir",
            "/b",
            "--color-mode",
            "light",
            "-v",
        ])
        .unwrap();
        assert_eq!(
            cli.themes_dirs,
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
        assert_eq!(cli.color_mode, Some(ColorModeSetting::Light));
        assert!(cli.verbose);
    }

    #[test]
    fn test_play_requires_game() {
        assert!(Cli::try_parse_from(["arcade", "play"]).is_err());
    }
}
