//! Expense category model
//!
//! Categories are user-extensible labels for expenses. Expenses reference
//! categories by name, not id, so deleting a category leaves any expenses
//! still carrying its name untouched (the analytics layer tolerates the
//! dangling name).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// An expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (referenced by Expense::category)
    pub name: String,

    /// Display color (hex)
    pub color: String,

    /// Display icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Monthly budget for this category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Money>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExpenseCategory {
    /// Create a new category with a display color
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: color.into(),
            icon: None,
            budget: None,
            description: None,
        }
    }

    /// Create a category with an icon name
    pub fn with_icon(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        let mut category = Self::new(name, color);
        category.icon = Some(icon.into());
        category
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The default category set seeded into new data files
pub fn default_categories() -> Vec<ExpenseCategory> {
    vec![
        ExpenseCategory::with_icon("Office Supplies", "#3b82f6", "Briefcase"),
        ExpenseCategory::with_icon("Utilities", "#10b981", "Lightbulb"),
        ExpenseCategory::with_icon("Rent", "#f59e0b", "Home"),
        ExpenseCategory::with_icon("Salaries", "#ef4444", "Users"),
        ExpenseCategory::with_icon("Marketing", "#8b5cf6", "TrendingUp"),
        ExpenseCategory::with_icon("Travel", "#ec4899", "Plane"),
        ExpenseCategory::with_icon("Software", "#6366f1", "Monitor"),
        ExpenseCategory::with_icon("Miscellaneous", "#71717a", "MoreHorizontal"),
    ]
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long: {} characters (max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
