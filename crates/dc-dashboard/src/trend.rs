//! Trend labels and the numeric rules behind them.
//!
//! The API reports every comparison twice: as a rounded percentage and as a
//! trend label. [`percentage_change`] and [`Trend::from_change`] reproduce
//! how the server derives both, so clients can recompute them from raw
//! counts without disagreeing with the server.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a period-over-period comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    /// Label for a percentage change: positive is up, negative is down.
    #[must_use]
    pub fn from_change(percent: f64) -> Self {
        if percent > 0.0 {
            Self::Up
        } else if percent < 0.0 {
            Self::Down
        } else {
            Self::Stable
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Today's appointment count compared to the weekly average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageTrend {
    AboveAverage,
    BelowAverage,
    #[default]
    Average,
}

impl AverageTrend {
    #[must_use]
    pub fn from_change(percent: f64) -> Self {
        match Trend::from_change(percent) {
            Trend::Up => Self::AboveAverage,
            Trend::Down => Self::BelowAverage,
            Trend::Stable => Self::Average,
        }
    }
}

/// Window for revenue comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenuePeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl RevenuePeriod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for RevenuePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round `value` to `decimals` places; missing or non-finite values become 0.
#[must_use]
pub fn safe_number(value: Option<f64>, decimals: u32) -> f64 {
    match value {
        Some(v) if v.is_finite() => {
            let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
            let rounded = (v * scale).round() / scale;
            if rounded.is_finite() { rounded } else { v }
        }
        _ => 0.0,
    }
}

/// Percentage change from `previous` to `current`, rounded to two places.
///
/// Growth from zero counts as +100%; zero to zero is 0%.
#[must_use]
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    let change = if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else if current > 0.0 {
        100.0
    } else {
        0.0
    };
    safe_number(Some(change), 2)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
