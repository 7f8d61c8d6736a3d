//! Invoice CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_invoice_document, format_invoice_list};
use crate::error::{BizbookError, BizbookResult};
use crate::models::{InvoiceStatus, InvoiceType, LineItem};
use crate::services::{ClientService, InvoiceService};
use crate::storage::Storage;

/// Invoice subcommands
#[derive(Subcommand, Debug)]
pub enum InvoiceCommands {
    /// List all invoices and quotes
    List {
        /// Only show documents with this status (pending, paid, overdue)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Create an invoice for a client
    Create {
        /// Client name or ID
        client: String,
        /// Line item as "description:quantity:unit_price" (repeatable)
        #[arg(short, long, required = true)]
        item: Vec<String>,
        /// Create a quote instead of an invoice
        #[arg(short, long)]
        quote: bool,
        /// Free-form notes printed on the document
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Print a full invoice document
    Show {
        /// Invoice number, e.g. "INV#48213"
        number: String,
    },

    /// Mark an invoice paid
    Pay {
        /// Invoice number
        number: String,
    },

    /// Set an invoice status directly
    Status {
        /// Invoice number
        number: String,
        /// New status (pending, paid, overdue)
        status: String,
    },

    /// Flip pending invoices past their due date to overdue
    RefreshOverdue,
}

fn parse_status(raw: &str) -> BizbookResult<InvoiceStatus> {
    match raw.to_lowercase().as_str() {
        "pending" => Ok(InvoiceStatus::Pending),
        "paid" => Ok(InvoiceStatus::Paid),
        "overdue" => Ok(InvoiceStatus::Overdue),
        _ => Err(BizbookError::input(format!(
            "'{}' is not a status (expected pending, paid or overdue)",
            raw
        ))),
    }
}

/// Line items arrive as "description:quantity:unit_price". The description
/// may itself contain colons, so split from the right.
fn parse_item(raw: &str) -> BizbookResult<LineItem> {
    let mut parts = raw.rsplitn(3, ':');
    let price = parts.next();
    let quantity = parts.next();
    let description = parts.next();

    match (description, quantity, price) {
        (Some(description), Some(quantity), Some(price)) => {
            LineItem::parse(description, quantity, price)
        }
        _ => Err(BizbookError::input(format!(
            "'{}' is not a line item (expected description:quantity:unit_price)",
            raw
        ))),
    }
}

/// Handle an invoice command
pub fn handle_invoice_command(
    storage: &Storage,
    settings: &Settings,
    cmd: InvoiceCommands,
) -> BizbookResult<()> {
    let service = InvoiceService::new(storage, settings);

    match cmd {
        InvoiceCommands::List { status } => {
            let invoices = match status {
                Some(raw) => service.list_by_status(parse_status(&raw)?)?,
                None => service.list()?,
            };
            print!("{}", format_invoice_list(&invoices));
        }

        InvoiceCommands::Create {
            client,
            item,
            quote,
            notes,
        } => {
            let items = item
                .iter()
                .map(|raw| parse_item(raw))
                .collect::<BizbookResult<Vec<_>>>()?;

            let invoice_type = if quote {
                InvoiceType::Quote
            } else {
                InvoiceType::Invoice
            };

            let invoice = service.create(&client, invoice_type, items, notes)?;
            println!("Created {}: {}", invoice.invoice_type, invoice.number);
            println!("  Subtotal: {}", invoice.subtotal);
            println!("  GST ({}%): {}", invoice.tax_rate, invoice.tax_amount);
            println!("  Total: {}", invoice.total);
            println!("  Due: {}", invoice.due_date);
        }

        InvoiceCommands::Show { number } => {
            let invoice = service.find_by_number(&number)?;
            let client = ClientService::new(storage)
                .get(invoice.client_id)?
                .ok_or_else(|| BizbookError::client_not_found(&invoice.client_id.to_string()))?;
            print!("{}", format_invoice_document(&invoice, &client, settings));
        }

        InvoiceCommands::Pay { number } => {
            let invoice = service.set_status(&number, InvoiceStatus::Paid)?;
            println!("Marked {} as paid ({})", invoice.number, invoice.total);
        }

        InvoiceCommands::Status { number, status } => {
            let status = parse_status(&status)?;
            let invoice = service.set_status(&number, status)?;
            println!("{} is now {}", invoice.number, invoice.status);
        }

        InvoiceCommands::RefreshOverdue => {
            let changed = service.refresh_overdue()?;
            if changed.is_empty() {
                println!("No invoices became overdue.");
            } else {
                for number in &changed {
                    println!("{} is now overdue", number);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_parse_item() {
        let item = parse_item("Design work:2:100.00").unwrap();
        assert_eq!(item.description, "Design work");
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.unit_price, Money::from_rupees(100));
    }

    #[test]
    fn test_parse_item_description_with_colons() {
        let item = parse_item("Support: on-call:1:500").unwrap();
        assert_eq!(item.description, "Support: on-call");
    }

    #[test]
    fn test_parse_item_rejects_malformed() {
        assert!(parse_item("just a description").is_err());
        assert!(parse_item("desc:two:100").is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("Paid").unwrap(), InvoiceStatus::Paid);
        assert!(parse_status("cancelled").is_err());
    }
}
