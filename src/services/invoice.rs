//! Invoice service
//!
//! Creates invoices and quotes from a client and a set of line items:
//! generates the document number, computes totals at the fixed GST rate,
//! derives the due date from settings, and freezes the result. After
//! creation only status and notes change.

use chrono::{Duration, Utc};

use crate::billing::{compute_totals, generate_document_number, GST_RATE_PCT};
use crate::config::Settings;
use crate::error::{BizbookError, BizbookResult};
use crate::models::{Invoice, InvoiceStatus, InvoiceType, LineItem};
use crate::storage::Storage;

/// Service for invoice management
pub struct InvoiceService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> InvoiceService<'a> {
    /// Create a new invoice service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Create an invoice or quote for a client
    pub fn create(
        &self,
        client_identifier: &str,
        invoice_type: InvoiceType,
        items: Vec<LineItem>,
        notes: String,
    ) -> BizbookResult<Invoice> {
        if items.is_empty() {
            return Err(BizbookError::Validation(
                "An invoice needs at least one line item".into(),
            ));
        }

        let client = self
            .storage
            .clients
            .get_by_name(client_identifier)?
            .ok_or_else(|| BizbookError::client_not_found(client_identifier))?;

        let prefix = match invoice_type {
            InvoiceType::Invoice => &self.settings.invoice_prefix,
            InvoiceType::Quote => &self.settings.quote_prefix,
        };
        let number = generate_document_number(prefix);

        let totals = compute_totals(&items);
        let issue_date = Utc::now().date_naive();
        let due_date = issue_date + Duration::days(self.settings.due_days);

        let invoice = Invoice::new(
            number,
            invoice_type,
            client.id,
            items,
            totals,
            GST_RATE_PCT,
            issue_date,
            due_date,
            notes,
        );

        self.storage.invoices.upsert(invoice.clone())?;
        self.storage.invoices.save()?;

        Ok(invoice)
    }

    /// Find an invoice by its human-facing number
    pub fn find_by_number(&self, number: &str) -> BizbookResult<Invoice> {
        self.storage
            .invoices
            .get_by_number(number)?
            .ok_or_else(|| BizbookError::invoice_not_found(number))
    }

    /// List all invoices, most recent first
    pub fn list(&self) -> BizbookResult<Vec<Invoice>> {
        self.storage.invoices.get_all()
    }

    /// List invoices with a given status
    pub fn list_by_status(&self, status: InvoiceStatus) -> BizbookResult<Vec<Invoice>> {
        self.storage.invoices.get_by_status(status)
    }

    /// Set the status of an invoice
    pub fn set_status(&self, number: &str, status: InvoiceStatus) -> BizbookResult<Invoice> {
        let mut invoice = self.find_by_number(number)?;
        invoice.status = status;
        self.storage.invoices.upsert(invoice.clone())?;
        self.storage.invoices.save()?;
        Ok(invoice)
    }

    /// Flip pending invoices past their due date to overdue
    ///
    /// Returns the numbers of the invoices that changed.
    pub fn refresh_overdue(&self) -> BizbookResult<Vec<String>> {
        let today = Utc::now().date_naive();
        let mut changed = Vec::new();

        for mut invoice in self.storage.invoices.get_all()? {
            if invoice.is_past_due(today) {
                invoice.status = InvoiceStatus::Overdue;
                changed.push(invoice.number.clone());
                self.storage.invoices.upsert(invoice)?;
            }
        }

        if !changed.is_empty() {
            self.storage.invoices.save()?;
        }
        Ok(changed)
    }
}
