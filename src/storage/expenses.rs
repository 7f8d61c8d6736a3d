//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BizbookError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ExpenseData {
    pub expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), BizbookError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.clear();
        for expense in file_data.expenses {
            expenses.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), BizbookError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut data = ExpenseData {
            expenses: expenses.values().cloned().collect(),
        };
        // Deterministic file order
        data.expenses.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &data)
    }

    /// Insert or replace an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), BizbookError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.insert(expense.id, expense);
        Ok(())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, BizbookError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.get(&id).cloned())
    }

    /// Get all expenses, most recent date first
    pub fn get_all(&self) -> Result<Vec<Expense>, BizbookError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut all: Vec<Expense> = expenses.values().cloned().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(all)
    }

    /// Remove an expense, returning whether it existed
    pub fn remove(&self, id: ExpenseId) -> Result<bool, BizbookError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(expenses.remove(&id).is_some())
    }
}
