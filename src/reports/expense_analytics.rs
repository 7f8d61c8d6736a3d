//! Expense analytics aggregator
//!
//! Pure function over the expense collection: applies the configured
//! filter predicates in a single AND-combined pass, then aggregates the
//! surviving records into totals, category and month breakdowns, and a
//! top-vendor ranking.
//!
//! A malformed date — in an expense record or in a filter bound — never
//! aborts the aggregation. The affected record (or bound) drops out of
//! date-based computations only, and a data-quality warning is collected
//! on the result for the caller to surface.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::NaiveDate;

use crate::models::{parse_date, Expense, ExpenseFilters, ExpenseId, Money};

/// A vendor and its summed spend in the filtered subset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorSpend {
    pub vendor: String,
    pub amount: Money,
}

/// A non-fatal data-quality condition encountered during aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQualityWarning {
    /// The expense the warning concerns, if any (filter-bound warnings
    /// concern no particular record)
    pub expense_id: Option<ExpenseId>,
    pub message: String,
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expense_id {
            Some(id) => write!(f, "{}: {}", id, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Aggregated view of the filtered expense subset
#[derive(Debug, Clone, Default)]
pub struct ExpenseAnalytics {
    /// Sum of amounts over the filtered subset
    pub total_expenses: Money,

    /// Summed amount per category name present in the subset
    pub by_category: HashMap<String, Money>,

    /// Summed amount per `"YYYY-MM"` month bucket
    pub by_month: BTreeMap<String, Money>,

    /// Sum of amounts where tax_deductible is set
    pub tax_deductible_amount: Money,

    /// Up to five vendors, descending by summed amount, ties broken by
    /// first-encountered order
    pub top_vendors: Vec<VendorSpend>,

    /// Number of records in the filtered subset
    pub expense_count: usize,

    /// Data-quality conditions encountered along the way
    pub warnings: Vec<DataQualityWarning>,
}

/// How many vendors the ranking keeps
const TOP_VENDOR_LIMIT: usize = 5;

impl ExpenseAnalytics {
    /// Aggregate the expense collection under the given filters
    ///
    /// The input is read-only; the result is freshly allocated. Predicates
    /// are pure set-intersections, so application order does not affect
    /// the outcome.
    pub fn generate(expenses: &[Expense], filters: &ExpenseFilters) -> Self {
        let mut warnings = Vec::new();

        let start_bound = parse_filter_bound(filters.start_date.as_deref(), "start", &mut warnings);
        let end_bound = parse_filter_bound(filters.end_date.as_deref(), "end", &mut warnings);
        let date_bounded = start_bound.is_some() || end_bound.is_some();

        let categories = filters.active_categories();
        let tags = filters.active_tags();
        let vendors = filters.active_vendors();
        let search = filters.active_search();

        let mut filtered: Vec<&Expense> = Vec::new();
        for expense in expenses {
            if date_bounded {
                match expense.parsed_date() {
                    Some(date) => {
                        if start_bound.map_or(false, |start| date < start) {
                            continue;
                        }
                        if end_bound.map_or(false, |end| date > end) {
                            continue;
                        }
                    }
                    None => {
                        // Unparseable date cannot satisfy a date bound
                        warnings.push(DataQualityWarning {
                            expense_id: Some(expense.id),
                            message: format!(
                                "unparseable date '{}': excluded from date-filtered results",
                                expense.date
                            ),
                        });
                        continue;
                    }
                }
            }

            if let Some(categories) = categories {
                if !categories.iter().any(|c| c == &expense.category) {
                    continue;
                }
            }

            if let Some(min) = filters.min_amount {
                if expense.amount < min {
                    continue;
                }
            }

            if let Some(max) = filters.max_amount {
                if expense.amount > max {
                    continue;
                }
            }

            if let Some(deductible) = filters.tax_deductible {
                if expense.tax_deductible != deductible {
                    continue;
                }
            }

            if let Some(tags) = tags {
                if !expense.tags.iter().any(|t| tags.contains(t)) {
                    continue;
                }
            }

            if let Some(vendors) = vendors {
                if !vendors.iter().any(|v| v == &expense.vendor) {
                    continue;
                }
            }

            if let Some(query) = &search {
                if !matches_search(expense, query) {
                    continue;
                }
            }

            filtered.push(expense);
        }

        let mut result = Self {
            expense_count: filtered.len(),
            warnings,
            ..Default::default()
        };

        // Vendor totals keyed by first-encountered position so the final
        // stable sort breaks ties in entry order
        let mut vendor_order: Vec<VendorSpend> = Vec::new();
        let mut vendor_index: HashMap<&str, usize> = HashMap::new();

        for expense in &filtered {
            result.total_expenses += expense.amount;

            *result
                .by_category
                .entry(expense.category.clone())
                .or_insert_with(Money::zero) += expense.amount;

            match expense.month_key() {
                Some(month) => {
                    *result.by_month.entry(month).or_insert_with(Money::zero) += expense.amount;
                }
                None => {
                    // Only reachable when no date filter was active, so the
                    // record survived filtering but has no month bucket
                    result.warnings.push(DataQualityWarning {
                        expense_id: Some(expense.id),
                        message: format!(
                            "unparseable date '{}': skipped in monthly breakdown",
                            expense.date
                        ),
                    });
                }
            }

            if expense.tax_deductible {
                result.tax_deductible_amount += expense.amount;
            }

            match vendor_index.get(expense.vendor.as_str()) {
                Some(&idx) => vendor_order[idx].amount += expense.amount,
                None => {
                    vendor_index.insert(expense.vendor.as_str(), vendor_order.len());
                    vendor_order.push(VendorSpend {
                        vendor: expense.vendor.clone(),
                        amount: expense.amount,
                    });
                }
            }
        }

        // sort_by is stable: equal amounts keep first-encountered order
        vendor_order.sort_by(|a, b| b.amount.cmp(&a.amount));
        vendor_order.truncate(TOP_VENDOR_LIMIT);
        result.top_vendors = vendor_order;

        result
    }
}

fn parse_filter_bound(
    value: Option<&str>,
    which: &str,
    warnings: &mut Vec<DataQualityWarning>,
) -> Option<NaiveDate> {
    let raw = value?;
    match parse_date(raw) {
        Some(date) => Some(date),
        None => {
            warnings.push(DataQualityWarning {
                expense_id: None,
                message: format!("unparseable {} date filter '{}': bound ignored", which, raw),
            });
            None
        }
    }
}

fn matches_search(expense: &Expense, query: &str) -> bool {
    expense.description.to_lowercase().contains(query)
        || expense.vendor.to_lowercase().contains(query)
        || expense.category.to_lowercase().contains(query)
        || expense.tags.iter().any(|t| t.to_lowercase().contains(query))
}
