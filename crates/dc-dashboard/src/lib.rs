//! # dc-dashboard — statistics models for the practice dashboard
//!
//! Typed views of the JSON the practice API serves under `/dashboard`.
//! Each response shape is defined once; serde derives carry the wire names.
//!
//! Decimal quantities (percentages, DZD amounts, averages) are `f64`. The
//! API rounds them to two decimals before sending (see [`trend::safe_number`]),
//! so nothing here needs arbitrary precision.
//!
//! This crate describes data only. It performs no I/O; [`endpoint`] lists
//! the routes and their query parameters for whichever HTTP client the host
//! application uses.

pub mod endpoint;
pub mod model;
pub mod status;
pub mod trend;

pub use endpoint::Endpoint;
pub use model::{
    AppointmentStats, DashboardOverview, DashboardSummary, InvoiceStats, MonthRevenue,
    PatientCounts, PatientStats, PendingInvoices, RecentActivity, RevenueStats,
    SummaryStatistics, TodayAppointment, TodayCounts,
};
pub use status::{AppointmentStatus, PaymentStatus, UnknownStatus};
pub use trend::{AverageTrend, RevenuePeriod, Trend, percentage_change, safe_number};
