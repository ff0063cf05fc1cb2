//! Month-bucketed totals for the trend chart
//!
//! Buckets keep first-seen order. Labels such as "Jan 2025" do not sort
//! chronologically across years, so chronological output sorts on
//! [`MonthKey`] instead.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::models::{ExpenseRecord, Money};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month; orders chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Human-readable label, e.g. "Jan 2025"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .month
            .checked_sub(1)
            .and_then(|i| MONTH_ABBREVIATIONS.get(i as usize))
            .copied()
            .unwrap_or("???");
        write!(f, "{} {}", name, self.year)
    }
}

/// Total spending in one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: MonthKey,
    pub total: Money,
}

/// Summed spending per calendar month, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyTotals {
    entries: Vec<MonthTotal>,
    index: HashMap<MonthKey, usize>,
}

impl MonthlyTotals {
    fn add(&mut self, month: MonthKey, amount: Money) {
        match self.index.get(&month) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                entry.total = entry.total.saturating_add(amount);
            }
            None => {
                self.index.insert(month, self.entries.len());
                self.entries.push(MonthTotal {
                    month,
                    total: amount,
                });
            }
        }
    }

    /// Total for one month, if any record fell into it
    pub fn get(&self, month: MonthKey) -> Option<Money> {
        self.index.get(&month).map(|&i| self.entries[i].total)
    }

    /// Total for a label such as "Jan 2025"
    pub fn get_by_label(&self, label: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.month.label() == label)
            .map(|e| e.total)
    }

    /// Iterate buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &MonthTotal> {
        self.entries.iter()
    }

    /// Labels in first-seen order
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.month.label()).collect()
    }

    /// Buckets sorted by year then month
    pub fn chronological(&self) -> Vec<MonthTotal> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| e.month);
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all buckets
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.total).sum()
    }
}

/// Sum record amounts per calendar month of their date
///
/// Records whose date is missing or unparseable are left out entirely.
pub fn compute_monthly_totals(records: &[ExpenseRecord]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();
    for record in records {
        match record.parsed_date() {
            Some(date) => totals.add(MonthKey::from_date(date), record.contribution()),
            None => tracing::trace!(
                id = %record.id,
                date = ?record.date,
                "record excluded from monthly totals"
            ),
        }
    }
    totals
}
