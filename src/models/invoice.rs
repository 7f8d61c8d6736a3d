//! Invoice and quote model
//!
//! Invoices are immutable once generated except for status and notes.
//! Totals are computed once at creation by the totals calculator and stored
//! alongside the frozen line items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ClientId, InvoiceId};
use super::line_item::LineItem;
use super::money::Money;
use crate::billing::totals::InvoiceTotals;

/// Whether a document is a tax invoice or a quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Invoice,
    Quote,
}

impl fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoice => write!(f, "Invoice"),
            Self::Quote => write!(f, "Quote"),
        }
    }
}

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
            Self::Overdue => write!(f, "Overdue"),
        }
    }
}

/// An invoice or quote issued to a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,

    /// Human-facing number, e.g. "INV#48213"
    pub number: String,

    /// Invoice or quote
    #[serde(default)]
    pub invoice_type: InvoiceType,

    /// The billed client
    pub client_id: ClientId,

    /// Frozen line items, in entry order
    pub items: Vec<LineItem>,

    /// Sum of line amounts
    pub subtotal: Money,

    /// GST rate applied, as a whole percentage
    pub tax_rate: i64,

    /// Tax amount at `tax_rate`
    pub tax_amount: Money,

    /// subtotal + tax_amount
    pub total: Money,

    /// Payment status
    #[serde(default)]
    pub status: InvoiceStatus,

    /// Date the document was issued
    pub issue_date: NaiveDate,

    /// Date payment is due
    pub due_date: NaiveDate,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Invoice {
    /// Assemble an invoice from its frozen parts
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number: String,
        invoice_type: InvoiceType,
        client_id: ClientId,
        items: Vec<LineItem>,
        totals: InvoiceTotals,
        tax_rate: i64,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        notes: String,
    ) -> Self {
        Self {
            id: InvoiceId::new(),
            number,
            invoice_type,
            client_id,
            items,
            subtotal: totals.subtotal,
            tax_rate,
            tax_amount: totals.tax,
            total: totals.total,
            status: InvoiceStatus::default(),
            issue_date,
            due_date,
            notes,
        }
    }

    /// Whether a pending invoice's due date has passed as of `today`
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.status == InvoiceStatus::Pending && self.due_date < today
    }
}
