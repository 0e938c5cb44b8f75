//! Property-based tests for the theme registry using proptest.

use std::collections::BTreeSet;

use arcade_theme::{ColorSpec, Rgb, SlotId, Theme, ThemeDefinition, ThemeManager};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn named(name: &str) -> Theme {
    Theme::builtin_default().with_name(name)
}

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb(r, g, b))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Listing is sorted and duplicate-free whatever the registration order.
    #[test]
    fn list_is_sorted_and_unique(names in prop::collection::vec("[a-z]{1,6}", 1..20)) {
        let manager = ThemeManager::new();
        for name in &names {
            manager.register_theme(named(name));
        }

        let listed = manager.list_themes();
        let expected: Vec<String> = names.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(listed, expected);
    }

    /// The first registered name stays the default no matter what follows.
    #[test]
    fn first_registered_stays_default(names in prop::collection::vec("[a-z]{1,6}", 1..20)) {
        let manager = ThemeManager::new();
        for name in &names {
            manager.register_theme(named(name));
        }
        prop_assert_eq!(manager.default_name(), Some(names[0].clone()));
        prop_assert_eq!(manager.current_name(), Some(names[0].clone()));
    }

    /// Cycling forward through every theme returns to the start.
    #[test]
    fn cycle_next_visits_all_and_returns(names in prop::collection::btree_set("[a-z]{1,6}", 1..12)) {
        let manager = ThemeManager::new();
        for name in &names {
            manager.register_theme(named(name));
        }
        let start = manager.current_name();

        let mut seen = BTreeSet::new();
        for _ in 0..names.len() {
            seen.insert(manager.cycle_next().unwrap());
        }
        prop_assert_eq!(seen, names.clone());
        prop_assert_eq!(manager.current_name(), start);
    }

    /// Next then previous is a no-op.
    #[test]
    fn cycle_next_then_previous(names in prop::collection::btree_set("[a-z]{1,6}", 1..12), steps in 0usize..10) {
        let manager = ThemeManager::new();
        for name in &names {
            manager.register_theme(named(name));
        }
        for _ in 0..steps {
            manager.cycle_next();
        }
        let before = manager.current_name();
        manager.cycle_next();
        manager.cycle_previous();
        prop_assert_eq!(manager.current_name(), before);
    }

    /// Any 6-digit hex literal survives resolution unchanged.
    #[test]
    fn hex_literal_resolves_to_same_rgb(rgb in rgb_strategy()) {
        let theme = ThemeDefinition::new("p")
            .with_slot(SlotId::Accent, ColorSpec::parse(&rgb.to_string()))
            .build(&Theme::builtin_default())
            .unwrap();
        prop_assert_eq!(theme.accent().for_mode(None), Some(rgb));
        // selected_cell follows accent when unset
        prop_assert_eq!(theme.get(SlotId::SelectedCell), theme.accent());
    }

    /// A name that is not in the palette never resolves.
    #[test]
    fn unknown_reference_always_fails(name in "[a-z]{1,8}".prop_filter("none is not a name", |s| s != "none")) {
        let result = ThemeDefinition::new("p")
            .with_palette_entry("zzzzzzzzz", ColorSpec::parse("#000000"))
            .with_slot(SlotId::Food, ColorSpec::parse(&name))
            .build(&Theme::builtin_default());
        prop_assert!(result.is_err());
    }
}
