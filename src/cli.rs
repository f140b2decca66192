// SPDX-License-Identifier: MIT
//
// Command-line surface: argument definitions and command dispatch.
//
// Every command writes its result to the given writer and returns an error
// instead of printing one, so main decides how failures look.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dc_color::Color;
use dc_dashboard::{Trend, percentage_change};
use dc_theme::{StyleMode, THEME_KEYS, ThemeColors, generate_theme, status_color_key};

use crate::settings::{FileConfig, OutputFormat, Settings, ThemeArgs};

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "dentacore",
    about = "Theme palettes and dashboard helpers for the dentacore dashboard",
    version
)]
pub struct Cli {
    /// TOML file supplying default mode, accent and format.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every named color of a generated theme.
    Theme {
        #[command(flatten)]
        theme: ThemeArgs,

        /// Output layout.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the supported style modes.
    Modes,

    /// Apply one color operation and print the resulting hex.
    #[command(subcommand)]
    Color(ColorCommand),

    /// Print the theme color a backend status key is drawn with.
    Status {
        /// e.g. appt.status.completed or invoice.status.overdue
        status_key: String,

        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// Percentage change between two values, with its trend label.
    Change {
        #[arg(allow_negative_numbers = true)]
        current: f64,
        #[arg(allow_negative_numbers = true)]
        previous: f64,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ColorCommand {
    /// Move each channel toward 1 by FACTOR of the remaining distance.
    Lighten {
        color: Color,
        #[arg(allow_negative_numbers = true)]
        factor: f32,
    },
    /// Scale each channel toward 0 by FACTOR.
    Darken {
        color: Color,
        #[arg(allow_negative_numbers = true)]
        factor: f32,
    },
    /// Mix two colors; RATIO 0 is the first, 1 the second.
    Blend {
        first: Color,
        second: Color,
        #[arg(allow_negative_numbers = true)]
        ratio: f64,
    },
    /// Replace the opacity.
    Opacity {
        color: Color,
        #[arg(allow_negative_numbers = true)]
        opacity: f64,
    },
}

impl ColorCommand {
    #[must_use]
    pub fn apply(self) -> Color {
        match self {
            Self::Lighten { color, factor } => color.lighten(factor),
            Self::Darken { color, factor } => color.darken(factor),
            Self::Blend { first, second, ratio } => first.blend(&second, ratio),
            Self::Opacity { color, opacity } => color.with_opacity(opacity),
        }
    }
}

// ─── Dispatch ───────────────────────────────────────────────────────────────

/// Run the parsed command, writing its output to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)?;
    out.flush().context("writing output")
}

/// Run the parsed command against an arbitrary writer.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Theme { theme, format } => {
            let settings = resolve(cli, theme, *format)?;
            let colors = generate_theme(settings.mode, settings.accent);
            match settings.format {
                OutputFormat::Table => write_table(out, &colors)?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, &colors)?;
                    writeln!(out)?;
                }
            }
        }
        Commands::Modes => {
            for mode in StyleMode::ALL {
                if mode == StyleMode::default() {
                    writeln!(out, "{mode} (default)")?;
                } else {
                    writeln!(out, "{mode}")?;
                }
            }
        }
        Commands::Color(op) => writeln!(out, "{}", op.apply())?,
        Commands::Status { status_key, theme } => {
            let theme_key = status_color_key(status_key)
                .with_context(|| format!("unknown status key `{status_key}`"))?;
            let settings = resolve(cli, theme, None)?;
            let colors = generate_theme(settings.mode, settings.accent);
            let color = colors
                .get(theme_key)
                .with_context(|| format!("theme has no `{theme_key}` color"))?;
            writeln!(out, "{theme_key} {color}")?;
        }
        Commands::Change { current, previous } => {
            let percent = percentage_change(*current, *previous);
            writeln!(out, "{percent:+.2}% {}", Trend::from_change(percent))?;
        }
    }
    Ok(())
}

fn resolve(cli: &Cli, theme: &ThemeArgs, format: Option<OutputFormat>) -> Result<Settings> {
    let file = FileConfig::load_optional(cli.config.as_deref())?;
    Settings::resolve(theme, format, &file)
}

/// One `key  #hex` line per color, in documented key order.
fn write_table(out: &mut impl Write, colors: &ThemeColors) -> io::Result<()> {
    for key in THEME_KEYS {
        if let Some(color) = colors.get(key) {
            writeln!(out, "{key:<16}{color}")?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("dentacore").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        execute(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn theme_table_lists_every_key() {
        let out = run_args(&["theme", "--mode", "dark", "--accent", "#8b5cf6"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), THEME_KEYS.len());
        assert_eq!(lines[0], "primary         #8b5cf6");
        assert_eq!(lines[1], "primaryLight    #9c74f7");
        assert_eq!(lines[2], "primaryDark     #764ed1");
    }

    #[test]
    fn theme_json_is_an_object_of_hex() {
        let out =
            run_args(&["theme", "--mode", "light", "--accent", "#8b5cf6", "--format", "json"])
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), THEME_KEYS.len());
        assert_eq!(object["scheduled"], "#7c3aed");
        assert_eq!(object["info"], "#8b5cf6");
    }

    #[test]
    fn theme_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dentacore.toml");
        std::fs::write(&path, "mode = \"light\"\naccent = \"#8b5cf6\"\nformat = \"json\"\n")
            .unwrap();

        let out = run_args(&["--config", path.to_str().unwrap(), "theme"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["scheduled"], "#7c3aed");
    }

    #[test]
    fn modes_marks_default() {
        assert_eq!(run_args(&["modes"]).unwrap(), "dark (default)\nlight\ngray\n");
    }

    #[test]
    fn color_operations() {
        assert_eq!(run_args(&["color", "lighten", "#000000", "0.5"]).unwrap(), "#808080\n");
        assert_eq!(run_args(&["color", "darken", "#ffffff", "1"]).unwrap(), "#000000\n");
        assert_eq!(
            run_args(&["color", "blend", "#000000", "#ffffff", "0.25"]).unwrap(),
            "#404040\n"
        );
        assert_eq!(run_args(&["color", "opacity", "#ff0000", "0.5"]).unwrap(), "#ff000080\n");
    }

    #[test]
    fn invalid_hex_is_a_usage_error() {
        assert!(run_args(&["color", "lighten", "#zzz", "0.5"]).is_err());
    }

    #[test]
    fn status_resolves_theme_key() {
        let out = run_args(&["status", "appt.status.no_show", "--mode", "dark"]).unwrap();
        assert_eq!(out, "textMuted #94a3b8\n");

        let out = run_args(&["status", "appt.status.in_progress", "--accent", "#0ea5e9"]).unwrap();
        assert_eq!(out, "info #0ea5e9\n");
    }

    #[test]
    fn unknown_status_key() {
        let err = run_args(&["status", "appt.status.lost"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown status key `appt.status.lost`");
    }

    #[test]
    fn change_prints_percent_and_trend() {
        assert_eq!(run_args(&["change", "4", "3"]).unwrap(), "+33.33% up\n");
        assert_eq!(run_args(&["change", "0", "10"]).unwrap(), "-100.00% down\n");
        assert_eq!(run_args(&["change", "0", "0"]).unwrap(), "+0.00% stable\n");
    }
}
