//! Dashboard routes — paths and query parameters, relative to the API base.

use std::fmt;

use crate::trend::RevenuePeriod;

/// A dashboard request, with the parameters it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// [`crate::DashboardSummary`]
    Summary,
    /// [`crate::PatientStats`]
    PatientStats,
    /// [`crate::AppointmentStats`]
    AppointmentStats,
    /// List of [`crate::TodayAppointment`]
    TodayAppointments,
    /// [`crate::InvoiceStats`]
    InvoiceStats,
    /// [`crate::RevenueStats`]
    Revenue { period: RevenuePeriod },
    /// [`crate::DashboardOverview`]
    Overview,
    /// List of [`crate::RecentActivity`]; the server picks defaults for
    /// missing parameters.
    RecentActivity { limit: Option<u32>, days: Option<u32> },
}

impl Endpoint {
    /// Route path without query string.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Summary => "dashboard",
            Self::PatientStats => "dashboard/patients",
            Self::AppointmentStats => "dashboard/appointments",
            Self::TodayAppointments => "dashboard/appointments/today",
            Self::InvoiceStats => "dashboard/invoices",
            Self::Revenue { .. } => "dashboard/revenue",
            Self::Overview => "dashboard/overview",
            Self::RecentActivity { .. } => "dashboard/recent-activity",
        }
    }

    /// Query parameters in the order they are sent. Unset optional
    /// parameters are left out.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match *self {
            Self::Revenue { period } => vec![("period", period.as_str().to_string())],
            Self::RecentActivity { limit, days } => [("limit", limit), ("days", days)]
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v.to_string())))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Path plus query string, e.g. `dashboard/revenue?period=week`.
impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())?;
        for (i, (name, value)) in self.query().iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={value}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
