//! End-to-end runs of the `arcade` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs `arcade` isolated inside `home`: config and themes come only from
/// there and from the given arguments.
fn arcade(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arcade"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("ARCADE_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_list_games() {
    let home = TempDir::new().unwrap();
    let output = arcade(home.path(), &["list"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Available Games:\n\n"));
    assert!(text.contains("  snake        Classic Snake game\n"));
}

#[test]
fn test_play_unknown_game() {
    let home = TempDir::new().unwrap();
    let output = arcade(home.path(), &["play", "pong"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Game pong does not exist"));
}

#[test]
fn test_theme_set_is_remembered() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.yaml");
    let config_arg = config.to_str().unwrap();

    let output = arcade(home.path(), &["theme", "set", "system", "--config", config_arg]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "Theme set to: system\n");

    let output = arcade(home.path(), &["theme", "list", "--config", config_arg]);
    assert_eq!(
        stdout(&output),
        "Available themes:\n  default\n* system (current)\n"
    );
}

#[test]
fn test_theme_set_unknown() {
    let home = TempDir::new().unwrap();
    let output = arcade(home.path(), &["theme", "set", "nope"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error setting theme: theme 'nope' not found"));
}

#[test]
fn test_local_themes_dir_is_scanned() {
    let home = TempDir::new().unwrap();
    let themes = home.path().join("themes");
    fs::create_dir(&themes).unwrap();
    fs::write(themes.join("mint.yaml"), "name: mint\nui:\n  accent: \"#3eb489\"\n").unwrap();
    fs::write(themes.join("broken.json"), "{ not json").unwrap();

    let output = arcade(home.path(), &["theme", "list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("  mint\n"));
    // bad files are skipped with a warning on stderr
    assert!(stderr(&output).contains("broken.json"));
}

#[test]
fn test_theme_preview() {
    let home = TempDir::new().unwrap();

    let output = arcade(home.path(), &["theme", "preview", "default"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Tetris Pieces:"));

    let output = arcade(home.path(), &["theme", "preview", "ghost"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Theme 'ghost' not found"));
}

#[test]
fn test_theme_check_reports_errors() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("bad.yaml");
    fs::write(&file, "name: bad\nui:\n  primary: \"#12345\"\n").unwrap();

    let output = arcade(home.path(), &["theme", "check", file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("#12345"));
}

#[test]
fn test_malformed_config_fails_commands() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.yaml");
    fs::write(&config, "theme: [oops\n").unwrap();

    let output = arcade(home.path(), &["theme", "list", "--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid config"));
}

#[test]
fn test_menu_requires_terminal() {
    let home = TempDir::new().unwrap();
    let output = arcade(home.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("needs a terminal"));
}
