//! Business logic layer for bizbook
//!
//! Services wrap the storage layer with validation and the operations the
//! CLI exposes.

pub mod category;
pub mod client;
pub mod expense;
pub mod invoice;

pub use category::CategoryService;
pub use client::ClientService;
pub use expense::{ExpenseService, ExpenseUpdate};
pub use invoice::InvoiceService;
