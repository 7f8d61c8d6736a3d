//! bizbook - Invoicing and expense tracking for small Indian businesses
//!
//! This library provides the core functionality for the bizbook CLI: GST
//! invoices and quotes, expense tracking with categories and tags, filtered
//! expense analytics, and a business dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (clients, invoices, expenses, categories)
//! - `billing`: Totals calculation and document numbering
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Expense analytics and the dashboard
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use bizbook::config::{paths::BizbookPaths, settings::Settings};
//!
//! let paths = BizbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod billing;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BizbookError, BizbookResult};
