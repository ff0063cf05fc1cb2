//! Search and category filtering for the list view

use std::borrow::Borrow;
use std::cmp::Reverse;

use crate::models::{CategoryFilter, ExpenseRecord};

/// Search text and category selection, as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring matched against description or category
    pub search: String,
    /// Category restriction
    pub category: CategoryFilter,
}

impl ExpenseFilter {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Check if a record passes both the category and the search condition
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        if !self.category.accepts(record.normalized_category()) {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        record.description().to_lowercase().contains(&needle)
            || record.category_text().to_lowercase().contains(&needle)
    }

    /// Apply this filter, preserving input order
    pub fn apply<'a>(&self, records: &'a [ExpenseRecord]) -> Vec<&'a ExpenseRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Records matching `search_text` and `category_filter`, in input order
///
/// Empty search text matches everything; `CategoryFilter::All` passes every
/// category.
pub fn filter_records<'a>(
    records: &'a [ExpenseRecord],
    search_text: &str,
    category_filter: CategoryFilter,
) -> Vec<&'a ExpenseRecord> {
    ExpenseFilter::new(search_text, category_filter).apply(records)
}

/// Sort for display: newest date first, unparseable dates last, ties keep
/// their input order
pub fn sort_newest_first<R: Borrow<ExpenseRecord>>(records: &mut [R]) {
    records.sort_by_key(|r| {
        let record: &ExpenseRecord = r.borrow();
        Reverse(record.parsed_date())
    });
}
