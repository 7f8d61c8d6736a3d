//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod client;
pub mod expense;
pub mod export;
pub mod invoice;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use client::{handle_client_command, ClientCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use invoice::{handle_invoice_command, InvoiceCommands};
pub use report::{handle_report_command, ReportCommands};
