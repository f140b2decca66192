//! # dc-theme — palette registry and theme generation for dentacore
//!
//! Turns a theme mode and a single accent color into the complete set of
//! named colors the dashboard UI styles itself with.
//!
//! # Architecture
//!
//! ```text
//! StyleMode + accent
//!     │
//!     ▼
//! registry.rs: fixed Dark/Light/Gray palettes, built once from hex tables
//!     │
//!     ▼
//! generate.rs: accent variants (primary, primaryLight, primaryDark)
//!              + 21 palette entries
//!              + semantic aliases (info, paid, pending, confirmed,
//!                completed, scheduled)
//!     │
//!     ▼
//! ThemeColors: 30 keys, looked up by name
//! ```
//!
//! `status.rs` maps appointment and invoice status keys from the practice
//! backend onto those names so list rows and badges pick a consistent color.
//!
//! All color math lives in [`dc_color`]; this crate only decides which
//! color goes under which name.

pub mod config;
pub mod error;
pub mod generate;
pub mod mode;
pub mod registry;
pub mod status;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use generate::{THEME_KEYS, ThemeColors, generate_theme, generate_theme_named};
pub use mode::StyleMode;
pub use registry::{config_for, config_for_name};
pub use status::status_color_key;
