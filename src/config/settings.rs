//! User settings for bizbook
//!
//! Manages business details and invoicing preferences: currency symbol,
//! invoice number prefixes, payment terms, and the business block printed
//! on invoice documents.

use serde::{Deserialize, Serialize};

use super::paths::BizbookPaths;
use crate::error::BizbookError;

/// Business details printed on invoice documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Business name
    #[serde(default = "default_business_name")]
    pub name: String,

    /// Postal address
    #[serde(default)]
    pub address: String,

    /// Contact phone number
    #[serde(default)]
    pub phone: String,

    /// Website URL
    #[serde(default)]
    pub website: String,

    /// Bank name for the payment footer
    #[serde(default)]
    pub bank_name: String,

    /// Bank account name
    #[serde(default)]
    pub account_name: String,

    /// Bank account number
    #[serde(default)]
    pub account_number: String,

    /// IFSC code
    #[serde(default)]
    pub ifsc_code: String,
}

fn default_business_name() -> String {
    "Your Business Name".to_string()
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: default_business_name(),
            address: String::new(),
            phone: String::new(),
            website: String::new(),
            bank_name: String::new(),
            account_name: String::new(),
            account_number: String::new(),
            ifsc_code: String::new(),
        }
    }
}

/// User settings for bizbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Invoice number prefix (e.g. "INV" for "INV#12345")
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,

    /// Quote number prefix (e.g. "QT" for "QT#12345")
    #[serde(default = "default_quote_prefix")]
    pub quote_prefix: String,

    /// Days between issue date and due date
    #[serde(default = "default_due_days")]
    pub due_days: i64,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Business details for invoice documents
    #[serde(default)]
    pub business: BusinessProfile,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_invoice_prefix() -> String {
    "INV".to_string()
}

fn default_quote_prefix() -> String {
    "QT".to_string()
}

fn default_due_days() -> i64 {
    15
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            invoice_prefix: default_invoice_prefix(),
            quote_prefix: default_quote_prefix(),
            due_days: default_due_days(),
            date_format: default_date_format(),
            business: BusinessProfile::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BizbookPaths) -> Result<Self, BizbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BizbookError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BizbookError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BizbookPaths) -> Result<(), BizbookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BizbookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BizbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.invoice_prefix, "INV");
        assert_eq!(settings.quote_prefix, "QT");
        assert_eq!(settings.due_days, 15);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BizbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.due_days = 30;
        settings.business.name = "Sharma Traders".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.due_days, 30);
        assert_eq!(loaded.business.name, "Sharma Traders");
    }

    #[test]
    fn test_load_or_create_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BizbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.invoice_prefix, "INV");
        assert!(!paths.is_initialized());
    }
}
