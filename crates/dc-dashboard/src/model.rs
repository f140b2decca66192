//! Response bodies of the `/dashboard` routes.
//!
//! Field names follow the API's snake_case JSON exactly, so the serde
//! derives need no per-field renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::status::AppointmentStatus;
use crate::trend::{AverageTrend, RevenuePeriod, Trend};

/// `GET dashboard` — headline counts plus today's schedule in one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub statistics: SummaryStatistics,
    /// Ordered by start time.
    pub today_appointments: Vec<TodayAppointment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub patients: PatientCounts,
    pub appointments: TodayCounts,
    pub invoices: PendingInvoices,
    pub revenue: MonthRevenue,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatientCounts {
    pub total: u32,
    pub active: u32,
}

/// Today's appointments; `pending` is `today - completed`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodayCounts {
    pub today: u32,
    pub completed: u32,
    pub pending: u32,
}

impl TodayCounts {
    /// Build from the two counted values, deriving `pending`.
    #[must_use]
    pub const fn new(today: u32, completed: u32) -> Self {
        Self { today, completed, pending: today.saturating_sub(completed) }
    }

    /// Whether `pending` agrees with `today - completed`.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.completed <= self.today && self.pending == self.today - self.completed
    }
}

/// Unpaid, partially paid and overdue invoices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PendingInvoices {
    pub pending_count: u32,
    /// Outstanding balance (total minus paid) across those invoices.
    pub pending_amount_dzd: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthRevenue {
    pub this_month_dzd: f64,
}

impl DashboardSummary {
    /// Appointments on today's list that still occupy their slot.
    #[must_use]
    pub fn open_appointments(&self) -> usize {
        self.today_appointments.iter().filter(|a| a.status_key.is_open()).count()
    }
}

/// `GET dashboard/patients` — patient counts with a month-over-month delta.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatientStats {
    pub total: u32,
    pub active: u32,
    pub this_month: u32,
    pub last_month: u32,
    pub monthly_change_percent: f64,
    pub trend: Trend,
}

/// `GET dashboard/appointments` — today against the weekly average.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppointmentStats {
    pub today: u32,
    pub completed: u32,
    pub pending: u32,
    pub week_total: u32,
    pub week_average: f64,
    pub today_vs_average_percent: f64,
    pub trend: AverageTrend,
}

/// One row of `GET dashboard/appointments/today`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayAppointment {
    pub id: String,
    pub appointment_date: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status_key: AppointmentStatus,
    #[serde(default)]
    pub reason: Option<String>,
    pub patient_name: String,
    #[serde(default)]
    pub patient_phone: Option<String>,
    pub dentist_name: String,
}

impl TodayAppointment {
    /// When the appointment is scheduled to finish.
    #[must_use]
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.appointment_date + chrono::Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// `GET dashboard/invoices` — outstanding invoices and monthly billing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceStats {
    pub pending_count: u32,
    pub pending_amount_dzd: f64,
    pub this_month_count: u32,
    pub last_month_count: u32,
    pub this_month_amount_dzd: f64,
    pub last_month_amount_dzd: f64,
    pub count_change_percent: f64,
    pub amount_change_percent: f64,
    pub count_trend: Trend,
    pub amount_trend: Trend,
}

/// `GET dashboard/revenue?period=…` — revenue against the previous period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RevenueStats {
    pub period: RevenuePeriod,
    pub current_period_dzd: f64,
    pub previous_period_dzd: f64,
    pub change_percent: f64,
    pub trend: Trend,
    /// Older servers send only this; it mirrors `current_period_dzd`.
    #[serde(default)]
    pub total_dzd: f64,
}

/// `GET dashboard/overview` — the headline numbers of every panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub active_patients: u32,
    pub new_patients_this_month: u32,
    pub patient_growth_percent: f64,
    pub patient_trend: Trend,
    pub today_appointments: u32,
    pub week_average_appointments: f64,
    pub appointment_trend_percent: f64,
    pub appointment_trend: AverageTrend,
    pub pending_invoices: u32,
    pub monthly_revenue_dzd: f64,
    pub last_month_revenue_dzd: f64,
    pub revenue_growth_percent: f64,
    pub revenue_trend: Trend,
}

/// One audit-log entry of `GET dashboard/recent-activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: String,
    pub action: String,
    pub entity_type: String,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub old_values: Option<Map<String, Value>>,
    #[serde(default)]
    pub new_values: Option<Map<String, Value>>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

impl RecentActivity {
    /// Fields whose value differs between `old_values` and `new_values`.
    ///
    /// A key present on only one side counts as changed.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&str> {
        let old = self.old_values.as_ref();
        let new = self.new_values.as_ref();

        let mut keys: Vec<&str> = old
            .into_iter()
            .flat_map(Map::keys)
            .chain(new.into_iter().flat_map(Map::keys))
            .map(String::as_str)
            .filter(|k| old.and_then(|m| m.get(*k)) != new.and_then(|m| m.get(*k)))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn ends_at_adds_duration() {
        let appt: TodayAppointment = serde_json::from_value(json!({
            "id": "a1",
            "appointment_date": "2024-03-04T09:30:00.000Z",
            "duration_minutes": 45,
            "status_key": "appt.status.confirmed",
            "patient_name": "Amina Benali",
            "dentist_name": "Dr. Haddad"
        }))
        .unwrap();
        assert_eq!(appt.ends_at().to_rfc3339(), "2024-03-04T10:15:00+00:00");
        assert_eq!(appt.reason, None);
        assert_eq!(appt.status_key, AppointmentStatus::Confirmed);
    }

    #[test]
    fn changed_fields_compares_both_sides() {
        let activity: RecentActivity = serde_json::from_value(json!({
            "id": "log-1",
            "action": "UPDATE",
            "entity_type": "appointment",
            "entity_id": "a1",
            "old_values": { "status_key": "appt.status.scheduled", "reason": "Checkup" },
            "new_values": { "status_key": "appt.status.confirmed", "reason": "Checkup", "notes": "x" },
            "created_at": "2024-03-04T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(activity.changed_fields(), vec!["notes", "status_key"]);
    }

    #[test]
    fn today_counts_derive_pending() {
        let counts = TodayCounts::new(6, 2);
        assert_eq!(counts.pending, 4);
        assert!(counts.is_consistent());
        assert!(!TodayCounts { today: 6, completed: 2, pending: 3 }.is_consistent());
        assert!(!TodayCounts { today: 1, completed: 2, pending: 0 }.is_consistent());
        assert_eq!(TodayCounts::new(1, 2).pending, 0);
    }

    #[test]
    fn changed_fields_without_values() {
        let activity: RecentActivity = serde_json::from_value(json!({
            "id": "log-2",
            "action": "LOGIN",
            "entity_type": "user",
            "created_at": "2024-03-04T08:00:00Z"
        }))
        .unwrap();
        assert!(activity.changed_fields().is_empty());
        assert_eq!(activity.user_email, None);
    }

    #[test]
    fn revenue_without_total_defaults() {
        let stats: RevenueStats = serde_json::from_value(json!({
            "period": "week",
            "current_period_dzd": 1200.5,
            "previous_period_dzd": 1000.0,
            "change_percent": 20.05,
            "trend": "up"
        }))
        .unwrap();
        assert_eq!(stats.period, RevenuePeriod::Week);
        assert_eq!(stats.total_dzd, 0.0);
    }
}
