//! Theme registry — one fixed palette per [`StyleMode`].
//!
//! The palettes are written as hex tables (the canonical design values) and
//! parsed into [`ThemeConfig`]s the first time any mode is looked up. After
//! that the registry is a read-only static shared by every caller.

use std::sync::LazyLock;

use dc_color::{Color, ColorError};
use tracing::{debug, warn};

use crate::config::{Backgrounds, Borders, StatusColors, Surfaces, TextColors, ThemeConfig};
use crate::error::ThemeError;
use crate::mode::StyleMode;

/// Hex literals for one palette, in the arity of each color family.
struct PaletteHex {
    /// primary, secondary, tertiary, card
    background: [&'static str; 4],
    /// default, elevated, subtle
    surface: [&'static str; 3],
    /// primary, secondary, tertiary, muted, disabled
    text: [&'static str; 5],
    /// default, subtle, strong
    border: [&'static str; 3],
    /// success, success light, warning, warning light, error, error light
    status: [&'static str; 6],
    scheduled: &'static str,
}

/// Indexed by [`StyleMode::index`].
const PALETTES: [PaletteHex; 3] = [
    // Dark
    PaletteHex {
        background: ["#0f172a", "#1e293b", "#334155", "#1e293b"],
        surface: ["#1e293b", "#334155", "#475569"],
        text: ["#f8fafc", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b"],
        border: ["#334155", "#475569", "#536073"],
        status: ["#10b981", "#34d399", "#f59e0b", "#fbbf24", "#FF5959", "#f87171"],
        scheduled: "#8b5cf6",
    },
    // Light
    PaletteHex {
        background: ["#ffffff", "#f8fafc", "#f1f5f9", "#ffffff"],
        surface: ["#ffffff", "#f8fafc", "#f1f5f9"],
        text: ["#0f172a", "#334155", "#475569", "#64748b", "#94a3b8"],
        border: ["#dadada", "#f1f5f9", "#cbd5e1"],
        status: ["#059669", "#10b981", "#d97706", "#f59e0b", "#dc2626", "#ef4444"],
        scheduled: "#7c3aed",
    },
    // Gray
    PaletteHex {
        background: ["#2a2d3a", "#363a4a", "#434754", "#363a4a"],
        surface: ["#363a4a", "#434754", "#4f546a"],
        text: ["#e8eaed", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563"],
        border: ["#434754", "#4f546a", "#6b7280"],
        status: ["#22c55e", "#4ade80", "#eab308", "#facc15", "#f87171", "#fca5a5"],
        scheduled: "#8b5cf6",
    },
];

impl PaletteHex {
    fn parse(&self) -> Result<ThemeConfig, ColorError> {
        let [bg1, bg2, bg3, card] = parse_all(&self.background)?;
        let [sf1, sf2, sf3] = parse_all(&self.surface)?;
        let [tx1, tx2, tx3, muted, disabled] = parse_all(&self.text)?;
        let [bd1, bd2, bd3] = parse_all(&self.border)?;
        let [success, success_light, warning, warning_light, error, error_light] =
            parse_all(&self.status)?;

        Ok(ThemeConfig {
            background: Backgrounds { primary: bg1, secondary: bg2, tertiary: bg3, card },
            surface: Surfaces { default: sf1, elevated: sf2, subtle: sf3 },
            text: TextColors { primary: tx1, secondary: tx2, tertiary: tx3, muted, disabled },
            border: Borders { default: bd1, subtle: bd2, strong: bd3 },
            status: StatusColors {
                success,
                success_light,
                warning,
                warning_light,
                error,
                error_light,
            },
            scheduled: Color::hex(self.scheduled)?,
        })
    }
}

fn parse_all<const N: usize>(hex: &[&str; N]) -> Result<[Color; N], ColorError> {
    let mut out = [Color::BLACK; N];
    for (slot, text) in out.iter_mut().zip(hex) {
        *slot = Color::hex(text)?;
    }
    Ok(out)
}

static REGISTRY: LazyLock<[ThemeConfig; 3]> = LazyLock::new(|| {
    let configs = StyleMode::ALL.map(|mode| {
        PALETTES[mode.index()]
            .parse()
            .expect("builtin palette hex literals are valid")
    });
    debug!(modes = StyleMode::ALL.len(), "theme registry built");
    configs
});

/// The palette for `mode`.
#[must_use]
pub fn config_for(mode: StyleMode) -> &'static ThemeConfig {
    &REGISTRY[mode.index()]
}

/// The palette for a mode given as free text (e.g. from a config file).
///
/// # Errors
///
/// Returns [`ThemeError::UnsupportedMode`] if `name` is not a known mode.
pub fn config_for_name(name: &str) -> Result<&'static ThemeConfig, ThemeError> {
    resolve_mode(name).map(config_for)
}

/// Parse mode text, logging rejected values.
pub(crate) fn resolve_mode(name: &str) -> Result<StyleMode, ThemeError> {
    name.parse::<StyleMode>()
        .inspect_err(|_| warn!(mode = name, "unsupported style mode requested"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
