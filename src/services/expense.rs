//! Expense service
//!
//! Business logic for recording, updating, and deleting expenses. Numeric
//! input is parsed here, at the boundary; nothing downstream coerces
//! strings. Category names are free text: a name with no matching
//! ExpenseCategory is allowed (the analytics layer tolerates dangling
//! names), so no referential check is enforced.

use crate::error::{BizbookError, BizbookResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Fields accepted when updating an expense in place
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
    pub tax_deductible: Option<bool>,
    pub payment_method: Option<String>,
    pub vendor: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse an amount string, rejecting non-numeric or non-positive values
    pub fn parse_amount(raw: &str) -> BizbookResult<Money> {
        let amount = Money::parse(raw).map_err(|e| BizbookError::input(e.to_string()))?;
        if !amount.is_positive() {
            return Err(BizbookError::Validation(format!(
                "Expense amount must be positive, got {}",
                amount
            )));
        }
        Ok(amount)
    }

    /// Record a new expense
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        &self,
        date: &str,
        category: &str,
        amount: Money,
        description: &str,
        vendor: &str,
        payment_method: &str,
        tax_deductible: bool,
        tags: Vec<String>,
    ) -> BizbookResult<Expense> {
        if description.trim().is_empty() {
            return Err(BizbookError::Validation(
                "Expense description cannot be empty".into(),
            ));
        }
        if !amount.is_positive() {
            return Err(BizbookError::Validation(format!(
                "Expense amount must be positive, got {}",
                amount
            )));
        }

        let mut expense = Expense::new(date, category.trim(), amount, description.trim());
        expense.vendor = vendor.trim().to_string();
        expense.payment_method = payment_method.trim().to_string();
        expense.tax_deductible = tax_deductible;
        expense.tags = tags;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> BizbookResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// List all expenses, most recent date first
    pub fn list(&self) -> BizbookResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Update an expense in place, refreshing its updated_at timestamp
    pub fn update(&self, id: ExpenseId, update: ExpenseUpdate) -> BizbookResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| BizbookError::expense_not_found(id.to_string()))?;

        if let Some(amount) = update.amount {
            if !amount.is_positive() {
                return Err(BizbookError::Validation(format!(
                    "Expense amount must be positive, got {}",
                    amount
                )));
            }
            expense.amount = amount;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        if let Some(category) = update.category {
            expense.category = category;
        }
        if let Some(description) = update.description {
            expense.description = description;
        }
        if let Some(receipt_url) = update.receipt_url {
            expense.receipt_url = Some(receipt_url);
        }
        if let Some(tax_deductible) = update.tax_deductible {
            expense.tax_deductible = tax_deductible;
        }
        if let Some(payment_method) = update.payment_method {
            expense.payment_method = payment_method;
        }
        if let Some(vendor) = update.vendor {
            expense.vendor = vendor;
        }
        if let Some(tags) = update.tags {
            expense.tags = tags;
        }

        expense.touch();
        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Delete an expense by ID
    pub fn delete(&self, id: ExpenseId) -> BizbookResult<()> {
        if !self.storage.expenses.remove(id)? {
            return Err(BizbookError::expense_not_found(id.to_string()));
        }
        self.storage.expenses.save()
    }
}
