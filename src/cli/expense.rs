//! Expense CLI commands

use clap::Subcommand;

use crate::display::format_expense_list;
use crate::error::BizbookResult;
use crate::models::ExpenseId;
use crate::services::{ExpenseService, ExpenseUpdate};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List all expenses
    List,

    /// Record a new expense
    Add {
        /// Amount (e.g., "1200" or "1200.50")
        amount: String,
        /// What the expense was for
        description: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Category name
        #[arg(short, long, default_value = "Miscellaneous")]
        category: String,
        /// Vendor paid
        #[arg(short, long, default_value = "")]
        vendor: String,
        /// Payment method (e.g., "UPI", "Card", "Cash")
        #[arg(short, long, default_value = "")]
        payment_method: String,
        /// Mark as tax deductible
        #[arg(long)]
        tax_deductible: bool,
        /// Tags (repeatable)
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Edit an expense in place
    Edit {
        /// Expense ID
        id: String,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New vendor
        #[arg(long)]
        vendor: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Set or clear the tax-deductible flag
        #[arg(long)]
        tax_deductible: Option<bool>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

fn parse_expense_id(raw: &str) -> BizbookResult<ExpenseId> {
    raw.parse::<ExpenseId>()
        .map_err(|_| crate::error::BizbookError::input(format!("'{}' is not an expense ID", raw)))
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> BizbookResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_list(&expenses));
        }

        ExpenseCommands::Add {
            amount,
            description,
            date,
            category,
            vendor,
            payment_method,
            tax_deductible,
            tag,
        } => {
            let amount = ExpenseService::parse_amount(&amount)?;
            let date =
                date.unwrap_or_else(|| chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string());

            let expense = service.add(
                &date,
                &category,
                amount,
                &description,
                &vendor,
                &payment_method,
                tax_deductible,
                tag,
            )?;

            println!("Recorded expense: {} {}", expense.amount, expense.description);
            println!("  ID: {}", expense.id.as_uuid());
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            vendor,
            description,
            tax_deductible,
        } => {
            let id = parse_expense_id(&id)?;
            let amount = amount
                .map(|raw| ExpenseService::parse_amount(&raw))
                .transpose()?;

            let expense = service.update(
                id,
                ExpenseUpdate {
                    amount,
                    category,
                    vendor,
                    description,
                    tax_deductible,
                    ..Default::default()
                },
            )?;
            println!("Updated expense: {} {}", expense.amount, expense.description);
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_expense_id(&id)?;
            service.delete(id)?;
            println!("Deleted expense: {}", id);
        }
    }

    Ok(())
}
