//! Reports module for bizbook
//!
//! Provides the expense analytics aggregation and the dashboard summary.

pub mod dashboard;
pub mod expense_analytics;

pub use dashboard::{DashboardReport, PendingInvoiceRow, RecentClientRow};
pub use expense_analytics::{DataQualityWarning, ExpenseAnalytics, VendorSpend};
