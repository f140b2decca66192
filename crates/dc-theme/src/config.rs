//! Palette configuration — the fixed colors one theme mode provides.
//!
//! A [`ThemeConfig`] is grouped by color family. Every slot is a plain
//! [`Color`], so a config cannot exist with a missing entry.

use dc_color::Color;

/// Page and card backgrounds, darkest-to-lightest in dark modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backgrounds {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub card: Color,
}

/// Raised panels and popovers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surfaces {
    pub default: Color,
    pub elevated: Color,
    pub subtle: Color,
}

/// Foreground text, from body copy down to disabled labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub muted: Color,
    pub disabled: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Borders {
    pub default: Color,
    pub subtle: Color,
    pub strong: Color,
}

/// Success / warning / error, each with a lighter tint for backgrounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusColors {
    pub success: Color,
    pub success_light: Color,
    pub warning: Color,
    pub warning_light: Color,
    pub error: Color,
    pub error_light: Color,
}

/// The complete palette of one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeConfig {
    pub background: Backgrounds,
    pub surface: Surfaces,
    pub text: TextColors,
    pub border: Borders,
    pub status: StatusColors,
    /// Color for scheduled appointments.
    pub scheduled: Color,
}

/// Output names of the 21 group colors, in [`ThemeConfig::colors`] order.
pub const GROUP_KEYS: [&str; 21] = [
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
];

impl ThemeConfig {
    /// The group colors flattened under their output names.
    ///
    /// The scheduled color is not included; it is published as a semantic
    /// alias by theme generation.
    #[must_use]
    pub fn colors(&self) -> [(&'static str, Color); 21] {
        let Self { background: bg, surface: sf, text: tx, border: bd, status: st, .. } = self;
        [
            (GROUP_KEYS[0], bg.primary),
            (GROUP_KEYS[1], bg.secondary),
            (GROUP_KEYS[2], bg.tertiary),
            (GROUP_KEYS[3], bg.card),
            (GROUP_KEYS[4], sf.default),
            (GROUP_KEYS[5], sf.elevated),
            (GROUP_KEYS[6], sf.subtle),
            (GROUP_KEYS[7], tx.primary),
            (GROUP_KEYS[8], tx.secondary),
            (GROUP_KEYS[9], tx.tertiary),
            (GROUP_KEYS[10], tx.muted),
            (GROUP_KEYS[11], tx.disabled),
            (GROUP_KEYS[12], bd.default),
            (GROUP_KEYS[13], bd.subtle),
            (GROUP_KEYS[14], bd.strong),
            (GROUP_KEYS[15], st.success),
            (GROUP_KEYS[16], st.success_light),
            (GROUP_KEYS[17], st.warning),
            (GROUP_KEYS[18], st.warning_light),
            (GROUP_KEYS[19], st.error),
            (GROUP_KEYS[20], st.error_light),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
