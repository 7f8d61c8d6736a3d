//! Category service
//!
//! Business logic for expense category management. Deleting a category
//! never cascades to expenses that reference it by name.

use crate::error::{BizbookError, BizbookResult};
use crate::models::{CategoryId, ExpenseCategory, Money};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(
        &self,
        name: &str,
        color: &str,
        icon: Option<String>,
        budget: Option<Money>,
    ) -> BizbookResult<ExpenseCategory> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BizbookError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        // Check for duplicate name
        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(BizbookError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let mut category = ExpenseCategory::new(name, color);
        category.icon = icon;
        category.budget = budget;

        category
            .validate()
            .map_err(|e| BizbookError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> BizbookResult<Option<ExpenseCategory>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> BizbookResult<Option<ExpenseCategory>> {
        // Try by name first
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        Ok(None)
    }

    /// List all categories, sorted by name
    pub fn list(&self) -> BizbookResult<Vec<ExpenseCategory>> {
        self.storage.categories.get_all()
    }

    /// Rename a category
    ///
    /// Expenses keep the old name; the original system never rewrote them,
    /// and the analytics layer handles the dangling reference.
    pub fn rename(&self, id: CategoryId, new_name: &str) -> BizbookResult<ExpenseCategory> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(BizbookError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| BizbookError::category_not_found(id.to_string()))?;

        if let Some(existing) = self.storage.categories.get_by_name(new_name)? {
            if existing.id != id {
                return Err(BizbookError::Duplicate {
                    entity_type: "Category",
                    identifier: new_name.to_string(),
                });
            }
        }

        category.name = new_name.to_string();
        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Delete a category by name or ID string
    ///
    /// Does not cascade: expenses referencing the deleted name are left
    /// as-is.
    pub fn delete(&self, identifier: &str) -> BizbookResult<()> {
        let category = self
            .find(identifier)?
            .ok_or_else(|| BizbookError::category_not_found(identifier))?;

        self.storage.categories.remove(category.id)?;
        self.storage.categories.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BizbookPaths;
    use crate::models::Expense;
    use crate::services::ExpenseService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BizbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_and_find() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let category = service.create("Insurance", "#0ea5e9", None, None).unwrap();
        assert_eq!(category.name, "Insurance");

        assert!(service.find("insurance").unwrap().is_some());
        assert!(service.find(&category.id.to_string()).unwrap().is_some());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service.create("Insurance", "#0ea5e9", None, None).unwrap();
        let err = service.create("insurance", "#111111", None, None).unwrap_err();
        assert!(matches!(err, BizbookError::Duplicate { .. }));
    }

    #[test]
    fn test_rename_rejects_collision() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let a = service.create("Insurance", "#0ea5e9", None, None).unwrap();
        service.create("Legal", "#111111", None, None).unwrap();

        assert!(matches!(
            service.rename(a.id, "Legal").unwrap_err(),
            BizbookError::Duplicate { .. }
        ));
        // Renaming to its own name (case change) is fine
        service.rename(a.id, "INSURANCE").unwrap();
    }

    #[test]
    fn test_delete_does_not_cascade() {
        let (_temp, storage) = create_test_storage();
        let categories = CategoryService::new(&storage);
        let expenses = ExpenseService::new(&storage);

        categories.create("Insurance", "#0ea5e9", None, None).unwrap();
        expenses
            .add("2024-01-05", "Insurance", Money::from_rupees(100), "premium", "", "", false, vec![])
            .unwrap();

        categories.delete("Insurance").unwrap();

        // The expense still carries the dangling name
        let all: Vec<Expense> = expenses.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category, "Insurance");
    }

    #[test]
    fn test_delete_missing() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        assert!(service.delete("nothing").unwrap_err().is_not_found());
    }
}
