//! Appointment and invoice status keys as the API spells them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A status key outside the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status key `{0}`")]
pub struct UnknownStatus(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "appt.status.scheduled")]
    Scheduled,
    #[serde(rename = "appt.status.confirmed")]
    Confirmed,
    #[serde(rename = "appt.status.in_progress")]
    InProgress,
    #[serde(rename = "appt.status.completed")]
    Completed,
    #[serde(rename = "appt.status.cancelled")]
    Cancelled,
    #[serde(rename = "appt.status.no_show")]
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [Self; 6] = [
        Self::Scheduled,
        Self::Confirmed,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
        Self::NoShow,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "appt.status.scheduled",
            Self::Confirmed => "appt.status.confirmed",
            Self::InProgress => "appt.status.in_progress",
            Self::Completed => "appt.status.completed",
            Self::Cancelled => "appt.status.cancelled",
            Self::NoShow => "appt.status.no_show",
        }
    }

    /// Whether the appointment still occupies a slot in today's schedule.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Scheduled | Self::Confirmed | Self::InProgress)
    }
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "invoice.status.paid")]
    Paid,
    #[serde(rename = "invoice.status.unpaid")]
    Unpaid,
    #[serde(rename = "invoice.status.partial")]
    Partial,
    #[serde(rename = "invoice.status.overdue")]
    Overdue,
}

impl PaymentStatus {
    pub const ALL: [Self; 4] = [Self::Paid, Self::Unpaid, Self::Partial, Self::Overdue];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "invoice.status.paid",
            Self::Unpaid => "invoice.status.unpaid",
            Self::Partial => "invoice.status.partial",
            Self::Overdue => "invoice.status.overdue",
        }
    }

    /// Counted among the dashboard's pending invoices (money still owed).
    #[must_use]
    pub const fn is_pending(self) -> bool {
        !matches!(self, Self::Paid)
    }
}

macro_rules! status_text {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|status| status.as_str() == s)
                    .ok_or_else(|| UnknownStatus(s.to_string()))
            }
        }
    };
}

status_text!(AppointmentStatus);
status_text!(PaymentStatus);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
