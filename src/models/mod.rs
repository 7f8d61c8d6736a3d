//! Core data models for bizbook
//!
//! This module contains all the data structures that represent the
//! invoicing and expense-tracking domain: clients, invoices, line items,
//! expenses, categories, and filters.

pub mod category;
pub mod client;
pub mod expense;
pub mod filters;
pub mod ids;
pub mod invoice;
pub mod line_item;
pub mod money;

pub use category::{default_categories, ExpenseCategory};
pub use client::Client;
pub use expense::{parse_date, Expense};
pub use filters::ExpenseFilters;
pub use ids::{CategoryId, ClientId, ExpenseId, InvoiceId};
pub use invoice::{Invoice, InvoiceStatus, InvoiceType};
pub use line_item::LineItem;
pub use money::Money;
