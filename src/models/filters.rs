//! Expense filter specification
//!
//! Every recognized filter field is an explicit `Option`; `None` means the
//! predicate is not applied. Empty collections are treated the same as
//! `None` so that "filter by no categories" excludes nothing.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Predicate set for narrowing the expense collection
///
/// All configured predicates are AND-combined; predicate order never
/// affects the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFilters {
    /// Include expenses dated on or after this date (ISO `YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Include expenses dated on or before this date (ISO `YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Include only these category names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Include only amounts at or above this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Money>,

    /// Include only amounts at or below this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Money>,

    /// Include only expenses with this tax-deductible flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_deductible: Option<bool>,

    /// Include expenses carrying at least one of these tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Include only these vendors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendors: Option<Vec<String>>,

    /// Case-insensitive substring match against description, vendor,
    /// category, or any tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl ExpenseFilters {
    /// True if no predicate is configured
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && non_empty(&self.categories).is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.tax_deductible.is_none()
            && non_empty(&self.tags).is_none()
            && non_empty(&self.vendors).is_none()
            && self
                .search_query
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .is_none()
    }

    /// The category predicate, if configured and non-empty
    pub fn active_categories(&self) -> Option<&[String]> {
        non_empty(&self.categories)
    }

    /// The tag predicate, if configured and non-empty
    pub fn active_tags(&self) -> Option<&[String]> {
        non_empty(&self.tags)
    }

    /// The vendor predicate, if configured and non-empty
    pub fn active_vendors(&self) -> Option<&[String]> {
        non_empty(&self.vendors)
    }

    /// The search predicate, lowercased, if configured and non-blank
    pub fn active_search(&self) -> Option<String> {
        self.search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

fn non_empty(values: &Option<Vec<String>>) -> Option<&[String]> {
    values.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ExpenseFilters::default().is_empty());
    }

    #[test]
    fn test_empty_collections_are_inactive() {
        let filters = ExpenseFilters {
            categories: Some(vec![]),
            tags: Some(vec![]),
            vendors: Some(vec![]),
            search_query: Some("   ".into()),
            ..Default::default()
        };
        assert!(filters.is_empty());
        assert!(filters.active_categories().is_none());
        assert!(filters.active_tags().is_none());
        assert!(filters.active_vendors().is_none());
        assert!(filters.active_search().is_none());
    }

    #[test]
    fn test_configured_predicates_are_active() {
        let filters = ExpenseFilters {
            categories: Some(vec!["Rent".into()]),
            search_query: Some("Office".into()),
            ..Default::default()
        };
        assert!(!filters.is_empty());
        assert_eq!(filters.active_categories().unwrap().len(), 1);
        assert_eq!(filters.active_search().as_deref(), Some("office"));
    }
}
