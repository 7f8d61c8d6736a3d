//! Dashboard summary report
//!
//! Rolls invoices, expenses, and clients up into the overview figures shown
//! on the dashboard: revenue, outstanding and overdue invoices, total
//! expenses, and profit, plus the most recent clients with their last
//! invoice.

use chrono::NaiveDate;

use crate::error::BizbookResult;
use crate::models::{ClientId, InvoiceStatus, Money};
use crate::storage::Storage;

/// A pending invoice as listed on the dashboard
#[derive(Debug, Clone)]
pub struct PendingInvoiceRow {
    pub number: String,
    pub client_name: String,
    pub amount: Money,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// A recent client with its most recent invoice, if any
#[derive(Debug, Clone)]
pub struct RecentClientRow {
    pub client_id: ClientId,
    pub name: String,
    pub last_invoice_date: Option<NaiveDate>,
    pub last_invoice_amount: Money,
}

/// Dashboard summary
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Sum of paid invoice totals
    pub total_revenue: Money,
    /// Sum of pending invoice totals
    pub outstanding: Money,
    /// Count and summed total of overdue invoices
    pub overdue_count: usize,
    pub overdue_amount: Money,
    /// Sum of all recorded expenses
    pub total_expenses: Money,
    /// total_revenue - total_expenses
    pub profit: Money,
    /// Total invoice count
    pub invoice_count: usize,
    /// Pending invoices, most recent first
    pub pending_invoices: Vec<PendingInvoiceRow>,
    /// Up to five most recently added clients
    pub recent_clients: Vec<RecentClientRow>,
}

/// How many recent clients the dashboard lists
const RECENT_CLIENT_LIMIT: usize = 5;

impl DashboardReport {
    /// Generate the dashboard summary from stored data
    pub fn generate(storage: &Storage) -> BizbookResult<Self> {
        let invoices = storage.invoices.get_all()?;
        let expenses = storage.expenses.get_all()?;
        let clients = storage.clients.get_all()?;

        let mut total_revenue = Money::zero();
        let mut outstanding = Money::zero();
        let mut overdue_count = 0;
        let mut overdue_amount = Money::zero();
        let mut pending_invoices = Vec::new();

        for invoice in &invoices {
            match invoice.status {
                InvoiceStatus::Paid => total_revenue += invoice.total,
                InvoiceStatus::Pending => {
                    outstanding += invoice.total;
                    let client_name = storage
                        .clients
                        .get(invoice.client_id)?
                        .map(|c| c.name)
                        .unwrap_or_else(|| "Unknown".to_string());
                    pending_invoices.push(PendingInvoiceRow {
                        number: invoice.number.clone(),
                        client_name,
                        amount: invoice.total,
                        issue_date: invoice.issue_date,
                        due_date: invoice.due_date,
                    });
                }
                InvoiceStatus::Overdue => {
                    overdue_count += 1;
                    overdue_amount += invoice.total;
                }
            }
        }

        let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();

        let recent_clients = clients
            .iter()
            .take(RECENT_CLIENT_LIMIT)
            .map(|client| {
                // invoices are already sorted most recent first
                let last = invoices.iter().find(|i| i.client_id == client.id);
                RecentClientRow {
                    client_id: client.id,
                    name: client.name.clone(),
                    last_invoice_date: last.map(|i| i.issue_date),
                    last_invoice_amount: last.map(|i| i.total).unwrap_or_else(Money::zero),
                }
            })
            .collect();

        Ok(Self {
            total_revenue,
            outstanding,
            overdue_count,
            overdue_amount,
            total_expenses,
            profit: total_revenue - total_expenses,
            invoice_count: invoices.len(),
            pending_invoices,
            recent_clients,
        })
    }
}
