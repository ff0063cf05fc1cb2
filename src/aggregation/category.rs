//! Category totals and the grand total
//!
//! Backs the by-category pie chart and the running total card.

use crate::models::{Category, ExpenseRecord, Money};

/// Summed spending per category, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(Category, Money)>,
}

impl CategoryTotals {
    /// Add an amount to a category, appending the category on first sight
    fn add(&mut self, category: Category, amount: Money) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total = total.saturating_add(amount),
            None => self.entries.push((category, amount)),
        }
    }

    /// Total for one category, if it appeared in the input
    pub fn get(&self, category: Category) -> Option<Money> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
    }

    /// Iterate `(category, total)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.entries.iter().copied()
    }

    /// Categories in first-seen order, i.e. the chart labels
    pub fn categories(&self) -> Vec<Category> {
        self.entries.iter().map(|(c, _)| *c).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all categories
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, total)| *total).sum()
    }

    /// Percentage of the overall total for one category
    pub fn share_of(&self, category: Category) -> f64 {
        self.get(category)
            .map_or(0.0, |amount| amount.percentage_of(self.total()))
    }

    /// `(category, percentage)` pairs in first-seen order
    pub fn shares(&self) -> Vec<(Category, f64)> {
        let total = self.total();
        self.entries
            .iter()
            .map(|(c, amount)| (*c, amount.percentage_of(total)))
            .collect()
    }
}

/// Sum record amounts per normalized category
///
/// Every record's category appears, even when all of its amounts coerce to
/// zero. Order follows the first record seen for each category.
pub fn compute_category_totals(records: &[ExpenseRecord]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for record in records {
        totals.add(record.normalized_category(), record.contribution());
    }
    totals
}

/// Sum of every coercible positive amount
pub fn compute_grand_total(records: &[ExpenseRecord]) -> Money {
    records.iter().map(ExpenseRecord::contribution).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseId};

    fn record(amount: impl Into<Amount>, category: Option<&str>) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(),
            amount: amount.into(),
            category: category.map(str::to_string),
            date: Some("2025-01-15".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_category_totals(&[]).is_empty());
        assert!(compute_grand_total(&[]).is_zero());
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![
            record(10.0, Some("Shopping")),
            record(5.0, Some("Food")),
            record(2.5, Some("Shopping")),
        ];
        let totals = compute_category_totals(&records);

        assert_eq!(totals.categories(), vec![Category::Shopping, Category::Food]);
        assert_eq!(totals.get(Category::Shopping).unwrap().cents(), 1250);
        assert_eq!(totals.get(Category::Food).unwrap().cents(), 500);
        assert_eq!(totals.get(Category::Bills), None);
    }

    #[test]
    fn test_invalid_amounts_contribute_zero() {
        let records = vec![
            record(-5.0, Some("Food")),
            record("abc", Some("Bills")),
            record(20.0, Some("Food")),
        ];
        let totals = compute_category_totals(&records);

        assert_eq!(totals.get(Category::Food).unwrap().cents(), 2000);
        // A category with only zero contributions still shows up
        assert_eq!(totals.get(Category::Bills), Some(Money::zero()));
        assert_eq!(compute_grand_total(&records).cents(), 2000);
    }

    #[test]
    fn test_unknown_category_is_other() {
        let records = vec![
            record(3.0, Some("Unknown")),
            record(4.0, None),
            record(5.0, Some("Other")),
        ];
        let totals = compute_category_totals(&records);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get(Category::Other).unwrap().cents(), 1200);
    }

    #[test]
    fn test_spelling_variants_are_not_merged() {
        let records = vec![
            record(5.0, Some("food")),
            record(7.0, Some(" FOOD ")),
            record(1.0, Some("Food")),
        ];
        let totals = compute_category_totals(&records);

        assert_eq!(totals.categories(), vec![Category::Other, Category::Food]);
        assert_eq!(totals.get(Category::Other).unwrap().cents(), 1200);
        assert_eq!(totals.get(Category::Food).unwrap().cents(), 100);
    }

    #[test]
    fn test_category_sum_matches_grand_total() {
        let records = vec![
            record(0.1, Some("Food")),
            record(0.2, Some("Transport")),
            record(1234.56, Some("Bills")),
            record("99.99", Some("Health")),
            record(-1.0, Some("Health")),
            record(7.77, Some("nonsense")),
        ];
        let totals = compute_category_totals(&records);
        assert_eq!(totals.total(), compute_grand_total(&records));
        assert_eq!(totals.total().cents(), 10 + 20 + 123_456 + 9_999 + 777);
    }

    #[test]
    fn test_shares() {
        let records = vec![record(25.0, Some("Food")), record(75.0, Some("Bills"))];
        let totals = compute_category_totals(&records);

        assert!((totals.share_of(Category::Food) - 25.0).abs() < 1e-9);
        assert_eq!(totals.share_of(Category::Health), 0.0);

        let shares = totals.shares();
        assert_eq!(shares[1].0, Category::Bills);
        assert!((shares[1].1 - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_with_zero_total() {
        let totals = compute_category_totals(&[record("abc", Some("Food"))]);
        assert_eq!(totals.shares(), vec![(Category::Food, 0.0)]);
    }
}
