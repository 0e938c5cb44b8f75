//! Registry behavior seen through the public API, including concurrent use.

use std::sync::Arc;
use std::thread;

use arcade_theme::{
    ColorSpec, Rgb, SlotId, Theme, ThemeColor, ThemeDefinition, ThemeError, ThemeManager,
    DEFAULT_THEME, SYSTEM_THEME,
};

#[test]
fn builtins_are_registered_in_order() {
    let manager = ThemeManager::with_builtins();
    assert_eq!(manager.list_themes(), vec![DEFAULT_THEME, SYSTEM_THEME]);
    assert_eq!(manager.default_name().as_deref(), Some(DEFAULT_THEME));
    assert_eq!(manager.current_name().as_deref(), Some(DEFAULT_THEME));
}

#[test]
fn replacing_current_theme_is_visible_immediately() {
    let manager = ThemeManager::with_builtins();
    manager.set_current_theme(SYSTEM_THEME).unwrap();

    let replacement = ThemeDefinition::new(SYSTEM_THEME)
        .with_slot(SlotId::Accent, ColorSpec::parse("#abcdef"))
        .build(&Theme::builtin_default())
        .unwrap();
    manager.register_theme(replacement);

    let current = manager.current_theme();
    assert_eq!(current.name(), SYSTEM_THEME);
    assert_eq!(current.accent(), ThemeColor::Fixed(Rgb(0xab, 0xcd, 0xef)));
}

#[test]
fn not_found_error_message() {
    let manager = ThemeManager::with_builtins();
    let err = manager.set_current_theme("solarized").unwrap_err();
    assert!(matches!(err, ThemeError::ThemeNotFound(_)));
    assert_eq!(err.to_string(), "theme 'solarized' not found");
}

#[test]
fn cycling_from_last_wraps_to_first() {
    let manager = ThemeManager::with_builtins();
    manager.set_current_theme(SYSTEM_THEME).unwrap();
    assert_eq!(manager.cycle_next().as_deref(), Some(DEFAULT_THEME));
    assert_eq!(manager.cycle_previous().as_deref(), Some(SYSTEM_THEME));
}

#[test]
fn style_snapshots_are_never_mutated() {
    let manager = ThemeManager::with_builtins();
    let snapshot = manager.styles();
    let copy = (*snapshot).clone();

    manager.set_current_theme(SYSTEM_THEME).unwrap();

    assert_eq!(*snapshot, copy);
    assert_eq!(snapshot.theme_name(), DEFAULT_THEME);
    assert_eq!(manager.styles().theme_name(), SYSTEM_THEME);
}

#[test]
fn concurrent_readers_and_writer() {
    let manager = Arc::new(ThemeManager::with_builtins());
    for i in 0..5 {
        manager.register_theme(Theme::builtin_default().with_name(format!("extra{}", i)));
    }
    let known = manager.list_themes();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let manager = Arc::clone(&manager);
            let known = known.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let theme = manager.current_theme();
                    assert!(known.iter().any(|n| n == theme.name()));
                    let styles = manager.styles();
                    assert!(known.iter().any(|n| n == styles.theme_name()));
                    assert_eq!(manager.list_themes(), known);
                }
            })
        })
        .collect();

    let writer = {
        let manager = Arc::clone(&manager);
        thread::spawn(move || {
            for _ in 0..500 {
                manager.cycle_next();
            }
        })
    };

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(manager.len(), known.len());
}
