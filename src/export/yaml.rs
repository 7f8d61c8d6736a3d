//! YAML export functionality

use std::io::Write;

use crate::error::{BizbookError, BizbookResult};
use crate::models::{Expense, Invoice};

/// Export expenses as YAML
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], writer: W) -> BizbookResult<()> {
    serde_yaml::to_writer(writer, expenses).map_err(|e| BizbookError::Export(e.to_string()))
}

/// Export invoices as YAML
pub fn export_invoices_yaml<W: Write>(invoices: &[Invoice], writer: W) -> BizbookResult<()> {
    serde_yaml::to_writer(writer, invoices).map_err(|e| BizbookError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_export_expenses_yaml() {
        let expense = Expense::new("2024-01-05", "Rent", Money::from_rupees(100), "rent");

        let mut buffer = Vec::new();
        export_expenses_yaml(&[expense], &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("category: Rent"));
        assert!(output.contains("date: 2024-01-05"));
    }
}
