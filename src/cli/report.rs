//! Report CLI commands

use clap::Subcommand;

use crate::display::{format_analytics, format_dashboard};
use crate::error::{BizbookError, BizbookResult};
use crate::models::{ExpenseFilters, Money};
use crate::reports::{DashboardReport, ExpenseAnalytics};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Business summary: revenue, outstanding, expenses, profit
    Dashboard,

    /// Expense analytics with optional filters
    Expenses {
        /// Include expenses on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Include expenses on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Restrict to these categories (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
        /// Minimum amount
        #[arg(long)]
        min: Option<String>,
        /// Maximum amount
        #[arg(long)]
        max: Option<String>,
        /// Only tax-deductible expenses
        #[arg(long)]
        deductible: bool,
        /// Only non-deductible expenses
        #[arg(long, conflicts_with = "deductible")]
        non_deductible: bool,
        /// Restrict to expenses carrying any of these tags (repeatable)
        #[arg(short, long)]
        tag: Vec<String>,
        /// Restrict to these vendors (repeatable)
        #[arg(short, long)]
        vendor: Vec<String>,
        /// Case-insensitive text search over description, vendor,
        /// category and tags
        #[arg(short, long)]
        search: Option<String>,
    },
}

fn parse_amount_flag(raw: Option<String>) -> BizbookResult<Option<Money>> {
    raw.map(|s| Money::parse(&s).map_err(|e| BizbookError::input(e.to_string())))
        .transpose()
}

fn some_if(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> BizbookResult<()> {
    match cmd {
        ReportCommands::Dashboard => {
            let report = DashboardReport::generate(storage)?;
            print!("{}", format_dashboard(&report));
        }

        ReportCommands::Expenses {
            from,
            to,
            category,
            min,
            max,
            deductible,
            non_deductible,
            tag,
            vendor,
            search,
        } => {
            let tax_deductible = if deductible {
                Some(true)
            } else if non_deductible {
                Some(false)
            } else {
                None
            };

            let filters = ExpenseFilters {
                start_date: from,
                end_date: to,
                categories: some_if(category),
                min_amount: parse_amount_flag(min)?,
                max_amount: parse_amount_flag(max)?,
                tax_deductible,
                tags: some_if(tag),
                vendors: some_if(vendor),
                search_query: search,
            };

            let expenses = storage.expenses.get_all()?;
            let analytics = ExpenseAnalytics::generate(&expenses, &filters);
            print!("{}", format_analytics(&analytics));
        }
    }

    Ok(())
}
