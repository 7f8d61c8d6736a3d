//! Storage layer for bizbook
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod categories;
pub mod clients;
pub mod expenses;
pub mod file_io;
pub mod invoices;

pub use categories::CategoryRepository;
pub use clients::ClientRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use invoices::InvoiceRepository;

use crate::config::paths::BizbookPaths;
use crate::error::BizbookError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BizbookPaths,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
    pub invoices: InvoiceRepository,
    pub clients: ClientRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BizbookPaths) -> Result<Self, BizbookError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            invoices: InvoiceRepository::new(paths.invoices_file()),
            clients: ClientRepository::new(paths.clients_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BizbookPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BizbookError> {
        self.expenses.load()?;
        self.categories.load()?;
        self.invoices.load()?;
        self.clients.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BizbookError> {
        self.expenses.save()?;
        self.categories.save()?;
        self.invoices.save()?;
        self.clients.save()?;
        Ok(())
    }

    /// Seed default data (the standard expense categories) into an empty
    /// store and persist it
    pub fn seed_defaults(&self) -> Result<(), BizbookError> {
        self.categories.seed_defaults()?;
        self.categories.save()
    }

    /// Check if storage has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BizbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_seed_defaults_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BizbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        storage.seed_defaults().unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.categories.get_all().unwrap().len(), 8);
    }
}
