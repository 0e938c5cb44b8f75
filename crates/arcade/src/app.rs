//! Startup: configuration, theme registry and color mode.

use std::path::PathBuf;

use anyhow::Result;
use arcade_theme::{ColorMode, ThemeManager};

use crate::cli::Cli;
use crate::config::Config;

/// Everything a command needs, built once per run.
pub struct App {
    pub config: Config,
    /// Where `theme set` persists its choice; `None` if no location is known.
    pub config_path: Option<PathBuf>,
    pub themes: ThemeManager,
    pub color_mode: Option<ColorMode>,
}

impl App {
    /// Loads config and themes.
    ///
    /// With `strict` a malformed config file is an error; otherwise it is
    /// logged and the defaults are used, so the menu always starts.
    pub fn init(cli: &Cli, strict: bool) -> Result<App> {
        let config_path = cli.config.clone().or_else(Config::default_path);
        let config = match &config_path {
            Some(path) if strict => Config::load(path)?,
            Some(path) => Config::load_or_default(path),
            None => Config::default(),
        };

        let themes = ThemeManager::new();
        let dirs = config.theme_search_path(&cli.themes_dirs);
        let report = themes.initialize(&dirs);
        tracing::debug!(
            registered = report.registered.len(),
            skipped = report.warnings.len(),
            "themes loaded"
        );

        if let Some(name) = &config.theme {
            if let Err(err) = themes.set_current_theme(name) {
                tracing::warn!("configured {}; keeping the default theme", err);
            }
        }

        let color_mode = cli.color_mode.unwrap_or(config.color_mode).resolve();

        Ok(App {
            config,
            config_path,
            themes,
            color_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("arcade").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_configured_theme_is_applied() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yaml");
        fs::write(&config, "theme: system\ncolor_mode: dark\n").unwrap();

        let app = App::init(&cli(&["--config", config.to_str().unwrap()]), true).unwrap();
        assert_eq!(app.themes.current_name().as_deref(), Some("system"));
        assert_eq!(app.color_mode, Some(ColorMode::Dark));
    }

    #[test]
    fn test_missing_configured_theme_keeps_default() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yaml");
        fs::write(&config, "theme: vanished\n").unwrap();

        let app = App::init(&cli(&["--config", config.to_str().unwrap()]), true).unwrap();
        assert_eq!(app.themes.current_name().as_deref(), Some("default"));
    }

    #[test]
    fn test_cli_color_mode_overrides_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yaml");
        fs::write(&config, "color_mode: dark\n").unwrap();

        let app = App::init(
            &cli(&["--config", config.to_str().unwrap(), "--color-mode", "light"]),
            true,
        )
        .unwrap();
        assert_eq!(app.color_mode, Some(ColorMode::Light));
    }

    #[test]
    fn test_malformed_config_strict_and_lenient() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yaml");
        fs::write(&config, "theme: [unclosed\n").unwrap();
        let args = cli(&["--config", config.to_str().unwrap()]);

        assert!(App::init(&args, true).is_err());
        let app = App::init(&args, false).unwrap();
        assert_eq!(app.config, Config::default());
    }

    #[test]
    fn test_themes_dir_option_registers_themes() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yaml");
        let themes = temp.path().join("themes");
        fs::create_dir(&themes).unwrap();
        fs::write(themes.join("mint.yaml"), "name: mint\nui:\n  accent: \"#3eb489\"\n").unwrap();

        let app = App::init(
            &cli(&[
                "--config",
                config.to_str().unwrap(),
                "--themes-dir",
                themes.to_str().unwrap(),
            ]),
            true,
        )
        .unwrap();
        assert!(app.themes.contains("mint"));
    }
}
