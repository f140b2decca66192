//! Errors surfaced by theme lookup.

use thiserror::Error;

/// Failure to resolve a theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The mode text names no registered palette.
    #[error("unsupported style mode: {0}")]
    UnsupportedMode(String),
}
