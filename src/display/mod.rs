//! Terminal formatting for bizbook
//!
//! Plain-text rendering of expenses, invoices, and reports.

pub mod expense;
pub mod invoice;
pub mod report;

pub use expense::format_expense_list;
pub use invoice::{format_invoice_document, format_invoice_list};
pub use report::{format_analytics, format_dashboard};
