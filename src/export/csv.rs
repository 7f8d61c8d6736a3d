//! CSV export functionality

use std::io::Write;

use crate::error::{BizbookError, BizbookResult};
use crate::models::{Expense, Invoice};

fn to_decimal(paise: i64) -> String {
    format!("{:.2}", paise as f64 / 100.0)
}

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> BizbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "ID",
            "Date",
            "Category",
            "Description",
            "Vendor",
            "Amount",
            "Tax Deductible",
            "Payment Method",
            "Tags",
        ])
        .map_err(|e| BizbookError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.as_uuid().to_string(),
                expense.date.clone(),
                expense.category.clone(),
                expense.description.clone(),
                expense.vendor.clone(),
                to_decimal(expense.amount.paise()),
                expense.tax_deductible.to_string(),
                expense.payment_method.clone(),
                expense.tags.join(";"),
            ])
            .map_err(|e| BizbookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BizbookError::Export(e.to_string()))?;
    Ok(())
}

/// Export invoices to CSV (one row per invoice)
pub fn export_invoices_csv<W: Write>(invoices: &[Invoice], writer: W) -> BizbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Number",
            "Type",
            "Issue Date",
            "Due Date",
            "Subtotal",
            "Tax Rate",
            "Tax Amount",
            "Total",
            "Status",
            "Items",
        ])
        .map_err(|e| BizbookError::Export(e.to_string()))?;

    for invoice in invoices {
        csv_writer
            .write_record([
                invoice.number.clone(),
                invoice.invoice_type.to_string(),
                invoice.issue_date.to_string(),
                invoice.due_date.to_string(),
                to_decimal(invoice.subtotal.paise()),
                invoice.tax_rate.to_string(),
                to_decimal(invoice.tax_amount.paise()),
                to_decimal(invoice.total.paise()),
                invoice.status.to_string(),
                invoice.items.len().to_string(),
            ])
            .map_err(|e| BizbookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BizbookError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::totals::compute_totals;
    use crate::models::{ClientId, InvoiceType, LineItem, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_export_expenses_csv() {
        let mut expense = Expense::new("2024-01-05", "Rent", Money::from_paise(10050), "rent");
        expense.tags = vec!["office".into(), "q1".into()];

        let mut buffer = Vec::new();
        export_expenses_csv(&[expense], &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("ID,Date,Category"));
        assert!(output.contains("100.50"));
        assert!(output.contains("office;q1"));
    }

    #[test]
    fn test_export_invoices_csv() {
        let items = vec![LineItem::new("Work", 1.0, Money::from_rupees(250))];
        let totals = compute_totals(&items);
        let invoice = Invoice::new(
            "INV#12345".to_string(),
            InvoiceType::Invoice,
            ClientId::new(),
            items,
            totals,
            18,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            String::new(),
        );

        let mut buffer = Vec::new();
        export_invoices_csv(&[invoice], &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("INV#12345"));
        assert!(output.contains("250.00"));
        assert!(output.contains("45.00"));
        assert!(output.contains("295.00"));
    }
}
