// SPDX-License-Identifier: MIT
//
// dc-color — color values and color arithmetic for dentacore.
//
// Colors are plain RGBA quadruples in normalized sRGB (each channel in
// 0.0–1.0). Every formula runs unfused in f64 with a fixed operand order;
// the same inputs produce the same shades down to the last bit.
//
// The free functions below mirror the `Color` methods for styling code
// that prefers a function-call surface.

pub mod color;

pub use color::{Color, ColorError, parse_hex_color};

/// Raise each RGB channel toward 1.0 by `factor` of the remaining headroom.
///
/// See [`Color::lighten`].
#[inline]
#[must_use]
pub fn lighten(color: Color, factor: f32) -> Color {
    color.lighten(factor)
}

/// Scale each RGB channel toward 0.0 by `factor`.
///
/// See [`Color::darken`].
#[inline]
#[must_use]
pub fn darken(color: Color, factor: f32) -> Color {
    color.darken(factor)
}

/// Linear interpolation of all four channels. See [`Color::blend`].
#[inline]
#[must_use]
pub fn blend(a: Color, b: Color, ratio: f64) -> Color {
    a.blend(&b, ratio)
}

/// Copy of `color` with its opacity replaced.
#[inline]
#[must_use]
pub fn with_opacity(color: Color, opacity: f64) -> Color {
    color.with_opacity(opacity)
}
