//! Expense model
//!
//! An expense is a dated outgoing payment. The date is kept as the string it
//! was entered with (ISO `YYYY-MM-DD` expected); analytics parses it on use
//! and treats unparseable dates as a data-quality condition rather than an
//! error, so a single bad record never poisons a report.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded business expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Expense date as entered (ISO `YYYY-MM-DD` expected)
    pub date: String,

    /// Category name (cross-referenced against ExpenseCategory by name)
    pub category: String,

    /// Amount spent
    pub amount: Money,

    /// What the expense was for
    pub description: String,

    /// Link to a stored receipt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,

    /// Whether the expense qualifies for tax deduction
    #[serde(default)]
    pub tax_deductible: bool,

    /// How the expense was paid (e.g. "UPI", "Card", "Cash")
    #[serde(default)]
    pub payment_method: String,

    /// Who was paid
    #[serde(default)]
    pub vendor: String,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
            receipt_url: None,
            tax_deductible: false,
            payment_method: String::new(),
            vendor: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the updated_at timestamp after an in-place edit
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Parse the expense date, if well-formed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// The `"YYYY-MM"` month bucket for this expense, if the date parses
    pub fn month_key(&self) -> Option<String> {
        self.parsed_date().map(|d| d.format("%Y-%m").to_string())
    }
}

/// Parse a date string, accepting ISO dates and RFC 3339 timestamps
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.date_naive())
}
