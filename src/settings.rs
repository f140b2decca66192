// SPDX-License-Identifier: MIT
//
// Settings resolution for the command line.
//
// Each value is taken from the first source that sets it:
//
//   command-line flag  →  environment (DENTACORE_*)  →  config file  →  default
//
// clap already merges the first two (`#[arg(env = ...)]`), so resolution here
// only layers the optional TOML file and the defaults underneath.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use dc_color::Color;
use dc_theme::StyleMode;
use serde::Deserialize;
use tracing::debug;

/// Accent used when nothing else names one.
pub const DEFAULT_ACCENT: &str = "#8b5cf6";

// ─── Output format ──────────────────────────────────────────────────────────

/// How `dentacore theme` prints a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key  #hex` line per color.
    #[default]
    Table,
    /// A single JSON object keyed by color name.
    Json,
}

// ─── Theme flags ────────────────────────────────────────────────────────────

/// Mode and accent flags shared by every command that builds a theme.
#[derive(Debug, Clone, Default, Args)]
pub struct ThemeArgs {
    /// Palette variant: dark, light or gray.
    #[arg(long, env = "DENTACORE_MODE")]
    pub mode: Option<StyleMode>,

    /// Accent color as hex, e.g. #8b5cf6.
    #[arg(long, env = "DENTACORE_ACCENT")]
    pub accent: Option<Color>,
}

// ─── Config file ────────────────────────────────────────────────────────────

/// Contents of the optional `--config` TOML file. Every key is optional.
///
/// ```toml
/// mode = "light"
/// accent = "#0ea5e9"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub mode: Option<String>,
    pub accent: Option<String>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid TOML of this shape.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "config file loaded");
        Ok(config)
    }

    /// Load `path` if one was given; otherwise an empty config.
    ///
    /// # Errors
    ///
    /// See [`FileConfig::load`].
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

// ─── Resolved settings ──────────────────────────────────────────────────────

/// Fully resolved inputs for one theme generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub mode: StyleMode,
    pub accent: Color,
    pub format: OutputFormat,
}

impl Settings {
    /// Layer flags (already merged with the environment by clap) over the
    /// config file and the defaults.
    ///
    /// # Errors
    ///
    /// Fails if the config file names an unknown mode or an invalid accent.
    pub fn resolve(
        args: &ThemeArgs,
        format: Option<OutputFormat>,
        file: &FileConfig,
    ) -> Result<Self> {
        let mode = match (args.mode, file.mode.as_deref()) {
            (Some(mode), _) => mode,
            (None, Some(text)) => text.parse::<StyleMode>().context("config file `mode`")?,
            (None, None) => StyleMode::default(),
        };
        let accent = match (args.accent, file.accent.as_deref()) {
            (Some(accent), _) => accent,
            (None, Some(text)) => Color::hex(text).context("config file `accent`")?,
            (None, None) => Color::hex(DEFAULT_ACCENT)?,
        };
        let format = format.or(file.format).unwrap_or_default();

        let settings = Self { mode, accent, format };
        debug!(%mode, %accent, ?format, "settings resolved");
        Ok(settings)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
