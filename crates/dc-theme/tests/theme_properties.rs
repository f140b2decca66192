//! Property tests for theme generation across arbitrary accents.
//!
//! 1. **Complete** — every mode yields exactly the 30 documented keys.
//! 2. **Aliases** — `paid == completed == success`, `pending == warning`,
//!    `info == confirmed == primary == accent`.
//! 3. **Accent variants** — `primaryLight` / `primaryDark` are the 0.15
//!    lighten / darken of the accent.
//! 4. **Palette independence** — the 21 palette entries do not depend on
//!    the accent.
//! 5. **Open-text modes** — anything outside the known names is rejected.

use dc_color::Color;
use dc_theme::{StyleMode, THEME_KEYS, ThemeError, generate_theme, generate_theme_named};
use proptest::prelude::*;

fn any_accent() -> impl Strategy<Value = Color> {
    (any::<(u8, u8, u8)>(), 0.0..=1.0f64)
        .prop_map(|((r, g, b), a)| Color::rgb8(r, g, b).with_opacity(a))
}

fn any_mode() -> impl Strategy<Value = StyleMode> {
    prop::sample::select(StyleMode::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_theme_is_complete(mode in any_mode(), accent in any_accent()) {
        let theme = generate_theme(mode, accent);
        prop_assert_eq!(theme.len(), THEME_KEYS.len());
        for key in THEME_KEYS {
            prop_assert!(theme.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn aliases_follow_palette_and_accent(mode in any_mode(), accent in any_accent()) {
        let theme = generate_theme(mode, accent);
        prop_assert_eq!(theme["paid"], theme["success"]);
        prop_assert_eq!(theme["completed"], theme["success"]);
        prop_assert_eq!(theme["pending"], theme["warning"]);
        prop_assert_eq!(theme["info"], accent);
        prop_assert_eq!(theme["confirmed"], accent);
        prop_assert_eq!(theme["primary"], accent);
    }

    #[test]
    fn accent_variants_use_fixed_shift(mode in any_mode(), accent in any_accent()) {
        let theme = generate_theme(mode, accent);
        prop_assert_eq!(theme["primaryLight"], dc_color::lighten(accent, 0.15));
        prop_assert_eq!(theme["primaryDark"], dc_color::darken(accent, 0.15));
    }

    #[test]
    fn palette_ignores_accent(mode in any_mode(), a in any_accent(), b in any_accent()) {
        let first = generate_theme(mode, a);
        let second = generate_theme(mode, b);
        for key in &THEME_KEYS[3..24] {
            prop_assert_eq!(first[*key], second[*key], "{} moved with the accent", key);
        }
        prop_assert_eq!(first["scheduled"], second["scheduled"]);
    }

    #[test]
    fn unknown_mode_text_is_rejected(name in "[a-z]{1,12}", accent in any_accent()) {
        prop_assume!(!matches!(name.as_str(), "dark" | "light" | "gray" | "grey"));
        prop_assert_eq!(
            generate_theme_named(&name, accent),
            Err(ThemeError::UnsupportedMode(name.clone()))
        );
    }
}
