//! Expense aggregation engine
//!
//! Pure functions from a snapshot of expense records to the derived views a
//! front end renders: category totals, monthly totals, the grand total and
//! the budget status. Nothing here performs I/O or holds state between
//! calls, and nothing here returns an error; malformed records are
//! normalized or counted as zero.
//!
//! # Example
//!
//! ```
//! use expense_tracker::aggregation::{AggregationResult, BudgetStatus};
//! use expense_tracker::models::{BudgetConfig, Money};
//!
//! let records = expense_tracker::demo::demo_records(
//!     chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
//! );
//! let budget = BudgetConfig {
//!     income: Money::from_cents(2_000_000),
//!     budget: Money::from_cents(1_000_000),
//! };
//! let result = AggregationResult::from_records(&records, Some(&budget));
//! assert_eq!(result.grand_total.cents(), 1_051_000);
//! assert_eq!(
//!     result.budget_status,
//!     BudgetStatus::Exceeded { surplus: Money::from_cents(51_000) }
//! );
//! ```

pub mod budget;
pub mod category;
pub mod filter;
pub mod monthly;

pub use budget::{evaluate_budget_status, warning_threshold, BudgetStatus, WARNING_PERCENT};
pub use category::{compute_category_totals, compute_grand_total, CategoryTotals};
pub use filter::{filter_records, sort_newest_first, ExpenseFilter};
pub use monthly::{compute_monthly_totals, MonthKey, MonthTotal, MonthlyTotals};

use crate::models::{BudgetConfig, ExpenseRecord, Money};

/// Every derived view of one snapshot
///
/// Recomputed from scratch on each call; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    pub category_totals: CategoryTotals,
    pub monthly_totals: MonthlyTotals,
    pub grand_total: Money,
    pub budget_status: BudgetStatus,
    /// Number of records in the snapshot, valid or not
    pub record_count: usize,
}

impl AggregationResult {
    /// Aggregate a snapshot against an optional budget
    pub fn from_records(records: &[ExpenseRecord], budget: Option<&BudgetConfig>) -> Self {
        let category_totals = compute_category_totals(records);
        let monthly_totals = compute_monthly_totals(records);
        let grand_total = compute_grand_total(records);
        let budget_status = evaluate_budget_status(grand_total, budget);

        tracing::debug!(
            records = records.len(),
            categories = category_totals.len(),
            months = monthly_totals.len(),
            total = grand_total.cents(),
            "aggregated expense snapshot"
        );

        Self {
            category_totals,
            monthly_totals,
            grand_total,
            budget_status,
            record_count: records.len(),
        }
    }
}
