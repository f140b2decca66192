// SPDX-License-Identifier: MIT
//
// dc-color color type — normalized RGBA with deterministic arithmetic.
//
// Every channel lives in 0.0–1.0. The operations are the small set a
// theme generator needs:
//
//   lighten  → move RGB toward white by a fraction of the headroom
//   darken   → scale RGB toward black
//   blend    → per-channel linear interpolation (alpha included)
//   opacity  → swap the alpha channel
//
// None of them use fused multiply-add. Downstream palettes are compared
// against reference shades, so the plain `a + b * c` evaluation order is
// part of the contract.

// r, g, b, a are the usual channel names.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure to build a [`Color`] from external input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Text is not one of `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    /// A channel passed to [`Color::try_rgba`] is outside 0.0–1.0.
    #[error("{channel} channel out of range: {value} (expected 0.0 to 1.0)")]
    ChannelOutOfRange { channel: &'static str, value: f64 },
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable RGBA color with channels normalized to 0.0–1.0.
///
/// Equality is exact: two colors are equal only when every channel is
/// bit-for-bit the same value. Theme generation relies on this to prove
/// that aliases point at the very same palette entry.
///
/// # Examples
///
/// ```
/// use dc_color::Color;
///
/// let accent = Color::hex("#8b5cf6").unwrap();
/// let hover = accent.lighten(0.15);
/// let pressed = accent.darken(0.15);
/// let ghost = accent.with_opacity(0.2);
///
/// assert!(hover.red() > accent.red());
/// assert!(pressed.red() < accent.red());
/// assert_eq!(ghost.opacity(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    opacity: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from normalized channels, saturating each into 0.0–1.0.
    ///
    /// In-range values are stored untouched. Use [`Color::try_rgba`] when
    /// out-of-range input should be rejected instead.
    #[inline]
    #[must_use]
    pub fn rgba(red: f64, green: f64, blue: f64, opacity: f64) -> Self {
        Self {
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
            opacity: unit(opacity),
        }
    }

    /// Create a fully opaque color from normalized channels.
    #[inline]
    #[must_use]
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Create a color from normalized channels, rejecting any value outside
    /// 0.0–1.0 (NaN included).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ChannelOutOfRange`] naming the first bad channel.
    pub fn try_rgba(red: f64, green: f64, blue: f64, opacity: f64) -> Result<Self, ColorError> {
        for (channel, value) in [
            ("red", red),
            ("green", green),
            ("blue", blue),
            ("opacity", opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::ChannelOutOfRange { channel, value });
            }
        }
        Ok(Self { red, green, blue, opacity })
    }

    /// Create an opaque color from 8-bit channels (each divided by 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit channels with alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            red: f64::from(r) / 255.0,
            green: f64::from(g) / 255.0,
            blue: f64::from(b) / 255.0,
            opacity: f64::from(a) / 255.0,
        }
    }

    /// Create a color from a hex string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`,
    /// either case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not a valid hex color.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }

    /// Pure black.
    pub const BLACK: Self = Self { red: 0.0, green: 0.0, blue: 0.0, opacity: 1.0 };

    /// Pure white.
    pub const WHITE: Self = Self { red: 1.0, green: 1.0, blue: 1.0, opacity: 1.0 };

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self { red: 0.0, green: 0.0, blue: 0.0, opacity: 0.0 };

    // ─── Channels ────────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn red(self) -> f64 {
        self.red
    }

    #[inline]
    #[must_use]
    pub const fn green(self) -> f64 {
        self.green
    }

    #[inline]
    #[must_use]
    pub const fn blue(self) -> f64 {
        self.blue
    }

    #[inline]
    #[must_use]
    pub const fn opacity(self) -> f64 {
        self.opacity
    }

    /// Whether this color is fully opaque (opacity >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.opacity >= 1.0
    }

    // ─── Arithmetic ──────────────────────────────────────────────────────

    /// Lighten each RGB channel: `min(1.0, c + (1.0 - c) * factor)`.
    ///
    /// Opacity is unchanged. `factor` is not range-checked: values above 1.0
    /// are capped by the `min`, while a negative factor pulls the channel
    /// down and so darkens the color. Only the upper bound is guarded by the
    /// formula itself.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn lighten(self, factor: f32) -> Self {
        let factor = f64::from(factor);
        let up = |c: f64| 1.0_f64.min(c + (1.0 - c) * factor);
        Self::rgba(up(self.red), up(self.green), up(self.blue), self.opacity)
    }

    /// Darken each RGB channel: `max(0.0, c * (1.0 - factor))`.
    ///
    /// Opacity is unchanged. Only the lower bound is guarded; a negative
    /// factor brightens instead.
    #[must_use]
    pub fn darken(self, factor: f32) -> Self {
        let factor = f64::from(factor);
        let down = |c: f64| 0.0_f64.max(c * (1.0 - factor));
        Self::rgba(down(self.red), down(self.green), down(self.blue), self.opacity)
    }

    /// Linear interpolation toward `other`, opacity included:
    /// `self * (1 - ratio) + other * ratio` per channel.
    ///
    /// `ratio` = 0.0 returns `self`, `ratio` = 1.0 returns `other`. The ratio
    /// itself is not clamped; a ratio outside 0.0–1.0 extrapolates and each
    /// resulting channel saturates into 0.0–1.0.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn blend(self, other: &Self, ratio: f64) -> Self {
        let lerp = |a: f64, b: f64| a * (1.0 - ratio) + b * ratio;
        Self::rgba(
            lerp(self.red, other.red),
            lerp(self.green, other.green),
            lerp(self.blue, other.blue),
            lerp(self.opacity, other.opacity),
        )
    }

    /// Return a copy with the given opacity; RGB is untouched.
    ///
    /// `opacity` within 0.0–1.0 is stored exactly. Values outside that range
    /// saturate to the nearest bound: 1.5 gives 1.0, -0.2 gives 0.0.
    #[inline]
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            opacity: unit(opacity),
            ..self
        }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to 8-bit RGB, rounding to the nearest step.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.red), to_u8(self.green), to_u8(self.blue))
    }

    /// Convert to 8-bit RGBA, rounding to the nearest step.
    #[must_use]
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb8();
        (r, g, b, to_u8(self.opacity))
    }

    /// Convert to a hex string (`#rrggbb`, or `#rrggbbaa` if opacity < 1.0).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Parse `#RRGGBB`-style text into a [`Color`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] for malformed input.
pub fn parse_hex_color(text: &str) -> Result<Color, ColorError> {
    Color::hex(text)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// Serialized as hex text; precision below one 8-bit step is not kept.
#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::hex(&text).map_err(serde::de::Error::custom)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

#[inline]
fn unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Convert a channel (0.0–1.0) to a u8 (0–255), rounding half away from zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match digits.len() {
        // #RGB / #RGBA: each digit doubled (f → ff)
        3 | 4 => {
            let mut channels = [255u8; 4];
            for (slot, &d) in channels.iter_mut().zip(digits) {
                let v = parse_hex_digit(d)?;
                *slot = v << 4 | v;
            }
            let [r, g, b, a] = channels;
            Some(Color::rgba8(r, g, b, a))
        }
        // #RRGGBB / #RRGGBBAA
        6 | 8 => {
            let mut channels = [255u8; 4];
            for (slot, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
                *slot = parse_hex_byte(pair)?;
            }
            let [r, g, b, a] = channels;
            Some(Color::rgba8(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn accent() -> Color {
        Color::hex("#8b5cf6").unwrap()
    }

    fn assert_channels(color: Color, expected: (f64, f64, f64), places: i32) {
        let tolerance = 10f64.powi(-places) / 2.0;
        let (r, g, b) = expected;
        assert!(
            (color.red() - r).abs() < tolerance
                && (color.green() - g).abs() < tolerance
                && (color.blue() - b).abs() < tolerance,
            "channel mismatch: got ({:.9}, {:.9}, {:.9}), expected ({r}, {g}, {b})",
            color.red(),
            color.green(),
            color.blue()
        );
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#8b5cf6").unwrap();
        assert_eq!(color.red(), 139.0 / 255.0);
        assert_eq!(color.green(), 92.0 / 255.0);
        assert_eq!(color.blue(), 246.0 / 255.0);
        assert_eq!(color.opacity(), 1.0);
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::hex("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let color = Color::hex("#ff000080").unwrap();
        assert_eq!(color.to_rgba8(), (255, 0, 0, 128));
        assert!(!color.is_opaque());

        let short = Color::hex("#f008").unwrap();
        assert_eq!(short.to_rgba8(), (255, 0, 0, 136));
    }

    #[test]
    fn hex_parsing_no_hash_and_uppercase() {
        assert_eq!(Color::hex("FF5959").unwrap(), Color::hex("#ff5959").unwrap());
    }

    #[test]
    fn hex_parsing_invalid() {
        assert_eq!(
            Color::hex("#12345"),
            Err(ColorError::InvalidHex("#12345".to_string()))
        );
        assert!(Color::hex("#gggggg").is_err());
        assert!(Color::hex("").is_err());
        assert!(Color::hex("#").is_err());
        assert!("not a color".parse::<Color>().is_err());
    }

    #[test]
    fn hex_roundtrip() {
        for text in ["#0f172a", "#10b981", "#ff5959", "#ffffff", "#000000"] {
            assert_eq!(Color::hex(text).unwrap().to_hex(), text);
        }
    }

    #[test]
    fn translucent_hex_carries_alpha() {
        let color = Color::rgb8(255, 0, 0).with_opacity(0.5);
        assert_eq!(color.to_hex(), "#ff000080");
        assert_eq!(format!("{color}"), "#ff000080");
    }

    // ── Construction ─────────────────────────────────────────────────────

    #[test]
    fn rgba_saturates_out_of_range() {
        let c = Color::rgba(-0.5, 1.5, 0.25, 2.0);
        assert_eq!(c.red(), 0.0);
        assert_eq!(c.green(), 1.0);
        assert_eq!(c.blue(), 0.25);
        assert_eq!(c.opacity(), 1.0);
    }

    #[test]
    fn try_rgba_rejects_out_of_range() {
        assert!(Color::try_rgba(0.1, 0.2, 0.3, 1.0).is_ok());
        assert_eq!(
            Color::try_rgba(0.1, 1.2, 0.3, 1.0),
            Err(ColorError::ChannelOutOfRange { channel: "green", value: 1.2 })
        );
        assert!(Color::try_rgba(f64::NAN, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert!(Color::BLACK.is_opaque());
    }

    // ── Lighten / Darken ─────────────────────────────────────────────────

    #[test]
    fn lighten_matches_formula() {
        // 0.15f32 widens to 0.15000000596046448.
        let light = accent().lighten(0.15);
        assert_channels(light, (0.613_333, 0.456_667, 0.970_000), 6);
        assert_eq!(light.red(), 0.613_333_336_044_760_3);
    }

    #[test]
    fn darken_matches_formula() {
        let dark = accent().darken(0.15);
        assert_channels(dark, (0.463_333, 0.306_667, 0.820_000), 6);
        assert_eq!(dark.blue(), 0.819_999_994_249_904_9);
    }

    #[test]
    fn lighten_zero_is_identity() {
        assert_eq!(accent().lighten(0.0), accent());
    }

    #[test]
    fn darken_zero_is_identity() {
        assert_eq!(accent().darken(0.0), accent());
    }

    #[test]
    fn lighten_one_is_white() {
        let c = accent().with_opacity(0.4).lighten(1.0);
        assert_eq!((c.red(), c.green(), c.blue()), (1.0, 1.0, 1.0));
        assert_eq!(c.opacity(), 0.4);
    }

    #[test]
    fn darken_one_is_black() {
        let c = accent().with_opacity(0.4).darken(1.0);
        assert_eq!((c.red(), c.green(), c.blue()), (0.0, 0.0, 0.0));
        assert_eq!(c.opacity(), 0.4);
    }

    #[test]
    fn lighten_clamps_large_factor() {
        let c = accent().lighten(3.0);
        assert_eq!(c.to_rgb8(), (255, 255, 255));
    }

    #[test]
    fn darken_clamps_large_factor() {
        let c = accent().darken(3.0);
        assert_eq!(c.to_rgb8(), (0, 0, 0));
    }

    #[test]
    fn negative_lighten_darkens() {
        let gray = Color::rgb(0.5, 0.5, 0.5);
        let c = gray.lighten(-0.5);
        // 0.5 + 0.5 * -0.5
        assert_eq!(c.red(), 0.25);
    }

    #[test]
    fn negative_darken_brightens() {
        let gray = Color::rgb(0.5, 0.5, 0.5);
        let c = gray.darken(-0.5);
        assert_eq!(c.red(), 0.75);
    }

    // ── Blend / Opacity ──────────────────────────────────────────────────

    #[test]
    fn blend_endpoints() {
        let a = accent();
        let b = Color::hex("#10b98180").unwrap();
        assert_eq!(a.blend(&b, 0.0), a);
        assert_eq!(a.blend(&b, 1.0), b);
    }

    #[test]
    fn blend_half_is_midpoint() {
        let c = Color::BLACK.blend(&Color::WHITE.with_opacity(0.0), 0.5);
        assert_eq!((c.red(), c.green(), c.blue(), c.opacity()), (0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn blend_extrapolates_then_saturates() {
        let a = Color::rgb(0.25, 0.25, 0.25);
        let b = Color::rgb(0.75, 0.75, 0.75);
        assert_eq!(a.blend(&b, 1.5).red(), 1.0);
        assert_eq!(a.blend(&b, -0.25).red(), 0.125);
    }

    #[test]
    fn with_opacity_keeps_rgb() {
        let c = accent().with_opacity(0.3);
        assert_eq!(c.opacity(), 0.3);
        assert_eq!(c.to_rgb8(), accent().to_rgb8());
        assert_eq!(c.red(), accent().red());
    }

    #[test]
    fn with_opacity_saturates_out_of_range() {
        let a = accent();
        assert_eq!(a.with_opacity(1.5).opacity(), 1.0);
        assert_eq!(a.with_opacity(-0.2).opacity(), 0.0);
        assert!(a.with_opacity(1.5).is_opaque());
        assert_eq!(a.with_opacity(-0.2).red(), a.red());
    }

    #[test]
    fn free_functions_delegate() {
        let a = accent();
        assert_eq!(crate::lighten(a, 0.2), a.lighten(0.2));
        assert_eq!(crate::darken(a, 0.2), a.darken(0.2));
        assert_eq!(crate::blend(a, Color::WHITE, 0.2), a.blend(&Color::WHITE, 0.2));
        assert_eq!(crate::with_opacity(a, 0.2), a.with_opacity(0.2));
        assert_eq!(parse_hex_color("#8b5cf6"), Ok(a));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_text() {
        let json = serde_json::to_string(&accent()).unwrap();
        assert_eq!(json, "\"#8b5cf6\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, accent());
        assert!(serde_json::from_str::<Color>("\"#xyz\"").is_err());
    }
}
