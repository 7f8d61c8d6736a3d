//! Path management for bizbook
//!
//! Provides platform-appropriate path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `BIZBOOK_DATA_DIR` environment variable (if set)
//! 2. Platform config directory (`~/.config/bizbook` on Linux,
//!    `~/Library/Application Support/bizbook` on macOS, `%APPDATA%\bizbook`
//!    on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::BizbookError;

/// Manages all paths used by bizbook
#[derive(Debug, Clone)]
pub struct BizbookPaths {
    /// Base directory for all bizbook data
    base_dir: PathBuf,
}

impl BizbookPaths {
    /// Create a new BizbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BizbookError> {
        let base_dir = if let Ok(custom) = std::env::var("BIZBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = BaseDirs::new().ok_or_else(|| {
                BizbookError::Config("Could not determine home directory".into())
            })?;
            dirs.config_dir().join("bizbook")
        };

        Ok(Self { base_dir })
    }

    /// Create BizbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to invoices.json
    pub fn invoices_file(&self) -> PathBuf {
        self.data_dir().join("invoices.json")
    }

    /// Get the path to clients.json
    pub fn clients_file(&self) -> PathBuf {
        self.data_dir().join("clients.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BizbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BizbookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BizbookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if bizbook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
