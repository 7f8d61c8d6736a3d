//! JSON export functionality

use std::io::Write;

use crate::error::{BizbookError, BizbookResult};
use crate::models::{Expense, Invoice};

/// Export expenses as pretty-printed JSON
pub fn export_expenses_json<W: Write>(expenses: &[Expense], mut writer: W) -> BizbookResult<()> {
    serde_json::to_writer_pretty(&mut writer, expenses)
        .map_err(|e| BizbookError::Export(e.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|e| BizbookError::Export(e.to_string()))?;
    Ok(())
}

/// Export invoices as pretty-printed JSON
pub fn export_invoices_json<W: Write>(invoices: &[Invoice], mut writer: W) -> BizbookResult<()> {
    serde_json::to_writer_pretty(&mut writer, invoices)
        .map_err(|e| BizbookError::Export(e.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|e| BizbookError::Export(e.to_string()))?;
    Ok(())
}
