//! Theme modes — the closed set of palette variants.

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// A named visual palette variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StyleMode {
    #[default]
    Dark,
    Light,
    Gray,
}

impl StyleMode {
    /// Every mode, in registry order.
    pub const ALL: [Self; 3] = [Self::Dark, Self::Light, Self::Gray];

    /// Lowercase name used on the command line and in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Gray => "gray",
        }
    }

    /// Position in [`StyleMode::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleMode {
    type Err = ThemeError;

    /// Case-insensitive; `grey` is accepted as a spelling of `gray`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "gray" | "grey" => Ok(Self::Gray),
            _ => Err(ThemeError::UnsupportedMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
