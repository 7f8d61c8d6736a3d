//! Invoice repository for JSON storage
//!
//! Manages loading and saving invoices to invoices.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BizbookError;
use crate::models::{Invoice, InvoiceId, InvoiceStatus};

use super::file_io::{read_json, write_json_atomic};

/// Serializable invoice data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct InvoiceData {
    pub invoices: Vec<Invoice>,
}

/// Repository for invoice persistence
pub struct InvoiceRepository {
    path: PathBuf,
    invoices: RwLock<HashMap<InvoiceId, Invoice>>,
}

impl InvoiceRepository {
    /// Create a new invoice repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            invoices: RwLock::new(HashMap::new()),
        }
    }

    /// Load invoices from disk
    pub fn load(&self) -> Result<(), BizbookError> {
        let file_data: InvoiceData = read_json(&self.path)?;

        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        invoices.clear();
        for invoice in file_data.invoices {
            invoices.insert(invoice.id, invoice);
        }

        Ok(())
    }

    /// Save invoices to disk
    pub fn save(&self) -> Result<(), BizbookError> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut data = InvoiceData {
            invoices: invoices.values().cloned().collect(),
        };
        data.invoices
            .sort_by(|a, b| a.issue_date.cmp(&b.issue_date).then(a.number.cmp(&b.number)));

        write_json_atomic(&self.path, &data)
    }

    /// Insert or replace an invoice
    pub fn upsert(&self, invoice: Invoice) -> Result<(), BizbookError> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        invoices.insert(invoice.id, invoice);
        Ok(())
    }

    /// Get an invoice by ID
    pub fn get(&self, id: InvoiceId) -> Result<Option<Invoice>, BizbookError> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(invoices.get(&id).cloned())
    }

    /// Get an invoice by its human-facing number
    pub fn get_by_number(&self, number: &str) -> Result<Option<Invoice>, BizbookError> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(invoices.values().find(|i| i.number == number).cloned())
    }

    /// Get all invoices, most recent issue date first
    pub fn get_all(&self) -> Result<Vec<Invoice>, BizbookError> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut all: Vec<Invoice> = invoices.values().cloned().collect();
        all.sort_by(|a, b| b.issue_date.cmp(&a.issue_date).then(a.number.cmp(&b.number)));
        Ok(all)
    }

    /// Get all invoices with the given status
    pub fn get_by_status(&self, status: InvoiceStatus) -> Result<Vec<Invoice>, BizbookError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|i| i.status == status)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::totals::compute_totals;
    use crate::models::{ClientId, InvoiceType, LineItem, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn invoice(number: &str, issue: NaiveDate) -> Invoice {
        let items = vec![LineItem::new("Work", 1.0, Money::from_rupees(100))];
        let totals = compute_totals(&items);
        Invoice::new(
            number.to_string(),
            InvoiceType::Invoice,
            ClientId::new(),
            items,
            totals,
            18,
            issue,
            issue + chrono::Duration::days(15),
            String::new(),
        )
    }

    fn repo() -> (TempDir, InvoiceRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = InvoiceRepository::new(temp_dir.path().join("invoices.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (_temp, repo) = repo();
        let inv = invoice("INV#11111", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let id = inv.id;
        repo.upsert(inv).unwrap();
        repo.save().unwrap();

        repo.load().unwrap();
        let loaded = repo.get(id).unwrap().unwrap();
        assert_eq!(loaded.number, "INV#11111");
        assert_eq!(loaded.total, Money::from_rupees(118));
    }

    #[test]
    fn test_get_by_number() {
        let (_temp, repo) = repo();
        repo.upsert(invoice("INV#22222", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
            .unwrap();

        assert!(repo.get_by_number("INV#22222").unwrap().is_some());
        assert!(repo.get_by_number("INV#99999").unwrap().is_none());
    }

    #[test]
    fn test_get_by_status() {
        let (_temp, repo) = repo();
        let mut paid = invoice("INV#10001", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        paid.status = InvoiceStatus::Paid;
        repo.upsert(paid).unwrap();
        repo.upsert(invoice("INV#10002", NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()))
            .unwrap();

        assert_eq!(repo.get_by_status(InvoiceStatus::Paid).unwrap().len(), 1);
        assert_eq!(repo.get_by_status(InvoiceStatus::Pending).unwrap().len(), 1);
        assert_eq!(repo.get_by_status(InvoiceStatus::Overdue).unwrap().len(), 0);
    }

    #[test]
    fn test_get_all_most_recent_first() {
        let (_temp, repo) = repo();
        repo.upsert(invoice("INV#10001", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
            .unwrap();
        repo.upsert(invoice("INV#10002", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].number, "INV#10002");
    }
}
