//! Invoice formatting
//!
//! List view plus a full plain-text invoice document: header, bill-to
//! block, items table, totals with the CGST/SGST display split, and the
//! payment footer from settings.

use crate::config::Settings;
use crate::models::{Client, Invoice};

use super::expense::truncate;

/// Format a list of invoices as a terminal table
pub fn format_invoice_list(invoices: &[Invoice]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<9} {:<12} {:<12} {:>12} {:<9}\n",
        "Number", "Type", "Issued", "Due", "Total", "Status"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for invoice in invoices {
        output.push_str(&format!(
            "{:<12} {:<9} {:<12} {:<12} {:>12} {:<9}\n",
            invoice.number,
            invoice.invoice_type.to_string(),
            invoice.issue_date.to_string(),
            invoice.due_date.to_string(),
            invoice.total.to_string(),
            invoice.status.to_string()
        ));
    }

    output.push_str(&format!("\n{} document(s)\n", invoices.len()));
    output
}

/// Render a full invoice document for printing or sharing
pub fn format_invoice_document(invoice: &Invoice, client: &Client, settings: &Settings) -> String {
    let mut output = String::new();
    let width = 72;

    output.push_str(&"=".repeat(width));
    output.push('\n');
    output.push_str(&format!(
        "{}\n{}\n",
        invoice.invoice_type.to_string().to_uppercase(),
        invoice.number
    ));
    output.push_str(&format!("Issued: {}    Due: {}\n", invoice.issue_date, invoice.due_date));
    output.push_str(&"=".repeat(width));
    output.push('\n');

    output.push_str(&format!("\nFrom: {}\n", settings.business.name));
    if !settings.business.address.is_empty() {
        output.push_str(&format!("      {}\n", settings.business.address));
    }
    if !settings.business.phone.is_empty() {
        output.push_str(&format!("      Phone: {}\n", settings.business.phone));
    }

    output.push_str(&format!("\nBill To: {}\n", client.name));
    if let Some(address) = &client.address {
        output.push_str(&format!("         {}\n", address));
    }
    if let Some(email) = &client.email {
        output.push_str(&format!("         Email: {}\n", email));
    }
    if let Some(phone) = &client.phone {
        output.push_str(&format!("         Phone: {}\n", phone));
    }

    output.push('\n');
    output.push_str(&format!(
        "{:<34} {:>8} {:>12} {:>14}\n",
        "Description", "Qty", "Price", "Amount"
    ));
    output.push_str(&"-".repeat(width));
    output.push('\n');

    for item in &invoice.items {
        output.push_str(&format!(
            "{:<34} {:>8} {:>12} {:>14}\n",
            truncate(&item.description, 34),
            format_quantity(item.quantity),
            item.unit_price.to_string(),
            item.amount().to_string()
        ));
    }

    output.push_str(&"-".repeat(width));
    output.push('\n');

    let (cgst, sgst) = invoice.tax_amount.split_half();
    let half_rate = invoice.tax_rate as f64 / 2.0;
    output.push_str(&format!("{:>58} {:>13}\n", "Subtotal:", invoice.subtotal.to_string()));
    output.push_str(&format!(
        "{:>58} {:>13}\n",
        format!("CGST ({}%):", half_rate),
        cgst.to_string()
    ));
    output.push_str(&format!(
        "{:>58} {:>13}\n",
        format!("SGST ({}%):", half_rate),
        sgst.to_string()
    ));
    output.push_str(&format!("{:>58} {:>13}\n", "TOTAL:", invoice.total.to_string()));

    if !invoice.notes.is_empty() {
        output.push_str(&format!("\nNotes: {}\n", invoice.notes));
    }

    if !settings.business.bank_name.is_empty() {
        output.push_str("\nPayment Details:\n");
        output.push_str(&format!("  Bank: {}\n", settings.business.bank_name));
        if !settings.business.account_name.is_empty() {
            output.push_str(&format!("  Account Name: {}\n", settings.business.account_name));
        }
        if !settings.business.account_number.is_empty() {
            output.push_str(&format!("  Account Number: {}\n", settings.business.account_number));
        }
        if !settings.business.ifsc_code.is_empty() {
            output.push_str(&format!("  IFSC Code: {}\n", settings.business.ifsc_code));
        }
    }

    output.push_str("\nThank you for your business!\n");
    output
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::totals::compute_totals;
    use crate::models::{ClientId, InvoiceType, LineItem, Money};
    use chrono::NaiveDate;

    fn sample() -> (Invoice, Client) {
        let client = Client::new("Acme Corp");
        let items = vec![
            LineItem::new("Design work", 2.0, Money::from_rupees(100)),
            LineItem::new("Hosting", 1.0, Money::from_rupees(50)),
        ];
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
            "Net 15".to_string(),
        );
        (invoice, client)
    }

    #[test]
    fn test_document_contains_tax_split() {
        let (invoice, client) = sample();
        let doc = format_invoice_document(&invoice, &client, &Settings::default());

        assert!(doc.contains("INV#12345"));
        assert!(doc.contains("Bill To: Acme Corp"));
        assert!(doc.contains("Subtotal:"));
        assert!(doc.contains("CGST (9%):"));
        assert!(doc.contains("SGST (9%):"));
        assert!(doc.contains("₹22.50"));
        assert!(doc.contains("₹295.00"));
        assert!(doc.contains("Notes: Net 15"));
    }

    #[test]
    fn test_list_shows_status() {
        let (invoice, _) = sample();
        let output = format_invoice_list(&[invoice]);
        assert!(output.contains("Pending"));
        assert!(output.contains("1 document(s)"));
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(1.5), "1.5");
    }
}
