//! Backend status keys → theme color names.
//!
//! The practice backend tags appointments with `appt.status.*` keys and
//! invoices with `invoice.status.*` keys. Badges and list rows resolve those
//! through here so every screen colors the same state the same way.
//!
//! | Status key                  | Theme key      |
//! |-----------------------------|----------------|
//! | `appt.status.scheduled`     | `scheduled`    |
//! | `appt.status.confirmed`     | `confirmed`    |
//! | `appt.status.in_progress`   | `info`         |
//! | `appt.status.completed`     | `completed`    |
//! | `appt.status.cancelled`     | `error`        |
//! | `appt.status.no_show`       | `textMuted`    |
//! | `invoice.status.paid`       | `paid`         |
//! | `invoice.status.unpaid`     | `pending`      |
//! | `invoice.status.partial`    | `warningLight` |
//! | `invoice.status.overdue`    | `error`        |

/// The theme key a status is drawn with, or `None` for unknown keys.
#[must_use]
pub fn status_color_key(status_key: &str) -> Option<&'static str> {
    Some(match status_key {
        "appt.status.scheduled" => "scheduled",
        "appt.status.confirmed" => "confirmed",
        "appt.status.in_progress" => "info",
        "appt.status.completed" => "completed",
        "appt.status.cancelled" | "invoice.status.overdue" => "error",
        "appt.status.no_show" => "textMuted",
        "invoice.status.paid" => "paid",
        "invoice.status.unpaid" => "pending",
        "invoice.status.partial" => "warningLight",
        _ => return None,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
