//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{BizbookError, BizbookResult};
use crate::export::{
    export_expenses_csv, export_expenses_json, export_expenses_yaml, export_invoices_csv,
    export_invoices_json, export_invoices_yaml, ExportFormat,
};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all expenses
    Expenses {
        /// Output format (csv, json, yaml)
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export all invoices and quotes
    Invoices {
        /// Output format (csv, json, yaml)
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn open_writer(output: Option<PathBuf>) -> BizbookResult<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout())),
    }
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> BizbookResult<()> {
    match cmd {
        ExportCommands::Expenses { format, output } => {
            let format: ExportFormat = format.parse().map_err(BizbookError::input)?;
            let expenses = storage.expenses.get_all()?;
            let destination = output.clone();
            let writer = open_writer(output)?;

            match format {
                ExportFormat::Csv => export_expenses_csv(&expenses, writer)?,
                ExportFormat::Json => export_expenses_json(&expenses, writer)?,
                ExportFormat::Yaml => export_expenses_yaml(&expenses, writer)?,
            }

            if let Some(path) = destination {
                eprintln!("Exported {} expense(s) to {}", expenses.len(), path.display());
            }
        }

        ExportCommands::Invoices { format, output } => {
            let format: ExportFormat = format.parse().map_err(BizbookError::input)?;
            let invoices = storage.invoices.get_all()?;
            let destination = output.clone();
            let writer = open_writer(output)?;

            match format {
                ExportFormat::Csv => export_invoices_csv(&invoices, writer)?,
                ExportFormat::Json => export_invoices_json(&invoices, writer)?,
                ExportFormat::Yaml => export_invoices_yaml(&invoices, writer)?,
            }

            if let Some(path) = destination {
                eprintln!("Exported {} invoice(s) to {}", invoices.len(), path.display());
            }
        }
    }

    Ok(())
}
