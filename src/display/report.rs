//! Report formatting for terminal output

use crate::models::Money;
use crate::reports::{DashboardReport, ExpenseAnalytics};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format the expense analytics report for terminal display
pub fn format_analytics(analytics: &ExpenseAnalytics) -> String {
    let mut output = String::new();

    output.push_str("Expense Report\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!("Total Expenses: {}\n", analytics.total_expenses));
    output.push_str(&format!("Tax Deductible: {}\n", analytics.tax_deductible_amount));
    output.push_str(&format!("Expense Count:  {}\n", analytics.expense_count));

    if !analytics.by_category.is_empty() {
        output.push_str("\nBy Category\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let mut categories: Vec<(&String, &Money)> = analytics.by_category.iter().collect();
        categories.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

        let total = analytics.total_expenses.paise();
        for (name, amount) in categories {
            let pct = if total == 0 {
                0.0
            } else {
                (amount.paise() as f64 / total as f64) * 100.0
            };
            output.push_str(&format!(
                "  {:<30} {:>12} {:>8}\n",
                name,
                amount.to_string(),
                format_percentage(pct)
            ));
        }
    }

    if !analytics.by_month.is_empty() {
        output.push_str("\nBy Month\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for (month, amount) in &analytics.by_month {
            output.push_str(&format!("  {:<30} {:>12}\n", month, amount.to_string()));
        }
    }

    if !analytics.top_vendors.is_empty() {
        output.push_str("\nTop Vendors\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for vendor in &analytics.top_vendors {
            output.push_str(&format!(
                "  {:<30} {:>12}\n",
                vendor.vendor,
                vendor.amount.to_string()
            ));
        }
    }

    if !analytics.warnings.is_empty() {
        output.push_str("\nData Quality Warnings\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for warning in &analytics.warnings {
            output.push_str(&format!("  ! {}\n", warning));
        }
    }

    output
}

/// Format the dashboard summary for terminal display
pub fn format_dashboard(report: &DashboardReport) -> String {
    let mut output = String::new();

    output.push_str("Dashboard\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!("Revenue (paid):   {}\n", report.total_revenue));
    output.push_str(&format!("Outstanding:      {}\n", report.outstanding));
    output.push_str(&format!(
        "Overdue:          {} ({} invoice(s))\n",
        report.overdue_amount, report.overdue_count
    ));
    output.push_str(&format!("Total Expenses:   {}\n", report.total_expenses));
    output.push_str(&format!("Profit:           {}\n", report.profit));
    output.push_str(&format!("Invoices Issued:  {}\n", report.invoice_count));

    if !report.pending_invoices.is_empty() {
        output.push_str("\nPending Invoices\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &report.pending_invoices {
            output.push_str(&format!(
                "  {:<12} {:<24} {:>12}  due {}\n",
                row.number, row.client_name, row.amount.to_string(), row.due_date
            ));
        }
    }

    if !report.recent_clients.is_empty() {
        output.push_str("\nRecent Clients\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &report.recent_clients {
            let last = row
                .last_invoice_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "never billed".to_string());
            output.push_str(&format!(
                "  {:<24} last invoice: {:<14} {}\n",
                row.name,
                last,
                row.last_invoice_amount.to_string()
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseFilters};

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.25), "5.3%");
        assert_eq!(format_percentage(42.0), "42%");
    }

    #[test]
    fn test_format_analytics() {
        let mut expense = Expense::new("2024-01-05", "Rent", Money::from_rupees(100), "rent");
        expense.vendor = "Landlord".into();
        expense.tax_deductible = true;

        let analytics = ExpenseAnalytics::generate(&[expense], &ExpenseFilters::default());
        let output = format_analytics(&analytics);

        assert!(output.contains("Total Expenses: ₹100.00"));
        assert!(output.contains("Rent"));
        assert!(output.contains("2024-01"));
        assert!(output.contains("Landlord"));
        assert!(!output.contains("Data Quality Warnings"));
    }

    #[test]
    fn test_format_analytics_shows_warnings() {
        let expense = Expense::new("garbage", "Rent", Money::from_rupees(100), "rent");
        let analytics = ExpenseAnalytics::generate(&[expense], &ExpenseFilters::default());
        let output = format_analytics(&analytics);
        assert!(output.contains("Data Quality Warnings"));
        assert!(output.contains("garbage"));
    }
}
