//! Expense category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json. A fresh data
//! file is seeded with the default category set.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BizbookError;
use crate::models::{default_categories, CategoryId, ExpenseCategory};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<ExpenseCategory>,
}

/// Repository for expense category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, ExpenseCategory>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), BizbookError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), BizbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut data = CategoryData {
            categories: categories.values().cloned().collect(),
        };
        data.categories.sort_by(|a, b| a.name.cmp(&b.name));

        write_json_atomic(&self.path, &data)
    }

    /// Seed the default category set if the repository is empty
    pub fn seed_defaults(&self) -> Result<(), BizbookError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if categories.is_empty() {
            for category in default_categories() {
                categories.insert(category.id, category);
            }
        }

        Ok(())
    }

    /// Insert or replace a category
    pub fn upsert(&self, category: ExpenseCategory) -> Result<(), BizbookError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.insert(category.id, category);
        Ok(())
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<ExpenseCategory>, BizbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<ExpenseCategory>, BizbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Get all categories, sorted by name
    pub fn get_all(&self) -> Result<Vec<ExpenseCategory>, BizbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut all: Vec<ExpenseCategory> = categories.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    /// Remove a category, returning whether it existed
    ///
    /// Expenses referencing the category by name are deliberately left
    /// untouched.
    pub fn remove(&self, id: CategoryId) -> Result<bool, BizbookError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(categories.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_seed_defaults_once() {
        let (_temp, repo) = repo();
        repo.seed_defaults().unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 8);

        // Seeding again must not duplicate
        repo.seed_defaults().unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 8);
    }

    #[test]
    fn test_seed_defaults_skips_nonempty() {
        let (_temp, repo) = repo();
        repo.upsert(ExpenseCategory::new("Custom", "#123456")).unwrap();
        repo.seed_defaults().unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let (_temp, repo) = repo();
        repo.seed_defaults().unwrap();
        assert!(repo.get_by_name("rent").unwrap().is_some());
        assert!(repo.get_by_name("RENT").unwrap().is_some());
        assert!(repo.get_by_name("nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (_temp, repo) = repo();
        repo.seed_defaults().unwrap();
        repo.save().unwrap();

        repo.load().unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 8);
    }
}
