//! Theme generation — accent variants, palette entries, semantic aliases.
//!
//! [`generate_theme`] is a single pass over three stages that always run in
//! this order:
//!
//! 1. accent variants: `primary`, `primaryLight`, `primaryDark`
//! 2. the 21 palette entries of the selected mode
//! 3. semantic aliases, written last so they win any key collision
//!
//! `paid`, `pending` and `completed` are read back from the entries stage 2
//! already wrote, so an alias always equals the palette color that is
//! actually present in the output.

use std::collections::{BTreeMap, HashMap};
use std::ops::Index;

use dc_color::Color;
use tracing::{debug, trace};

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::mode::StyleMode;
use crate::registry::{config_for, resolve_mode};
use crate::status::status_color_key;

/// How far `primaryLight` / `primaryDark` move away from the accent.
pub const PRIMARY_SHIFT: f32 = 0.15;

/// Every key a generated theme contains.
pub const THEME_KEYS: [&str; 30] = [
    // accent
    "primary",
    "primaryLight",
    "primaryDark",
    // palette
    "backgroundPrimary",
    "backgroundSecondary",
    "backgroundTertiary",
    "backgroundCard",
    "surfaceDefault",
    "surfaceElevated",
    "surfaceSubtle",
    "textPrimary",
    "textSecondary",
    "textTertiary",
    "textMuted",
    "textDisabled",
    "borderDefault",
    "borderSubtle",
    "borderStrong",
    "success",
    "successLight",
    "warning",
    "warningLight",
    "error",
    "errorLight",
    // semantic
    "info",
    "paid",
    "pending",
    "confirmed",
    "completed",
    "scheduled",
];

// ---------------------------------------------------------------------------
// ThemeColors
// ---------------------------------------------------------------------------

/// The named colors of one generated theme.
///
/// Lookup is by key; [`ThemeColors::iter`] yields entries sorted by key so
/// printed output is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    mode: StyleMode,
    colors: HashMap<&'static str, Color>,
}

impl ThemeColors {
    /// The mode this theme was generated for.
    #[must_use]
    pub const fn mode(&self) -> StyleMode {
        self.mode
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Color> {
        self.colors.get(key).copied()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.colors.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        let sorted: BTreeMap<_, _> = self.colors.iter().map(|(k, v)| (*k, *v)).collect();
        sorted.into_iter()
    }

    /// The color a backend status key (e.g. `appt.status.completed`) is
    /// drawn with, or `None` for keys outside the known vocabulary.
    #[must_use]
    pub fn status_color(&self, status_key: &str) -> Option<Color> {
        status_color_key(status_key).and_then(|key| self.get(key))
    }

    #[must_use]
    pub fn into_map(self) -> HashMap<&'static str, Color> {
        self.colors
    }
}

impl Index<&str> for ThemeColors {
    type Output = Color;

    /// # Panics
    ///
    /// Panics if `key` is not one of [`THEME_KEYS`].
    fn index(&self, key: &str) -> &Color {
        &self.colors[key]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ThemeColors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the full named-color mapping for `mode` with the given accent.
#[must_use]
pub fn generate_theme(mode: StyleMode, accent: Color) -> ThemeColors {
    let config = config_for(mode);
    let mut colors = HashMap::with_capacity(THEME_KEYS.len());

    colors.insert("primary", accent);
    colors.insert("primaryLight", accent.lighten(PRIMARY_SHIFT));
    colors.insert("primaryDark", accent.darken(PRIMARY_SHIFT));

    colors.extend(config.colors());

    insert_semantic(&mut colors, accent, config);

    debug!(%mode, %accent, keys = colors.len(), "theme generated");
    ThemeColors { mode, colors }
}

/// Like [`generate_theme`], with the mode given as free text.
///
/// # Errors
///
/// Returns [`ThemeError::UnsupportedMode`] for unknown mode text; nothing is
/// generated in that case.
pub fn generate_theme_named(mode: &str, accent: Color) -> Result<ThemeColors, ThemeError> {
    resolve_mode(mode).map(|mode| generate_theme(mode, accent))
}

fn insert_semantic(colors: &mut HashMap<&'static str, Color>, accent: Color, config: &ThemeConfig) {
    // Stage 2 always wrote these; the fallbacks are the same values.
    let success = colors.get("success").copied().unwrap_or(config.status.success);
    let warning = colors.get("warning").copied().unwrap_or(config.status.warning);

    let aliases = [
        ("info", accent),
        ("paid", success),
        ("pending", warning),
        ("confirmed", accent),
        ("completed", success),
        ("scheduled", config.scheduled),
    ];
    for (key, color) in aliases {
        trace!(key, %color, "semantic alias");
        colors.insert(key, color);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
