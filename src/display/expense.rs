//! Expense list formatting

use crate::models::Expense;

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a list of expenses as a terminal table
pub fn format_expense_list(expenses: &[Expense]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<10} {:<18} {:<24} {:<16} {:>12}  {}\n",
        "ID", "Date", "Category", "Description", "Vendor", "Amount", "Tax-ded"
    ));
    output.push_str(&"-".repeat(104));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:<12} {:<10} {:<18} {:<24} {:<16} {:>12}  {}\n",
            expense.id.to_string(),
            truncate(&expense.date, 10),
            truncate(&expense.category, 18),
            truncate(&expense.description, 24),
            truncate(&expense.vendor, 16),
            expense.amount.to_string(),
            if expense.tax_deductible { "yes" } else { "no" }
        ));
    }

    output.push_str(&format!("\n{} expense(s)\n", expenses.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }

    #[test]
    fn test_format_expense_list() {
        let expense = Expense::new("2024-01-05", "Rent", Money::from_rupees(100), "Office rent");
        let output = format_expense_list(&[expense]);
        assert!(output.contains("Rent"));
        assert!(output.contains("₹100.00"));
        assert!(output.contains("1 expense(s)"));
    }
}
