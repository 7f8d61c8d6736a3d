//! Billing calculations
//!
//! The totals calculator and invoice number generation used when an
//! invoice or quote is created.

pub mod number;
pub mod totals;

pub use number::generate_document_number;
pub use totals::{compute_totals, InvoiceTotals, GST_RATE_PCT};
