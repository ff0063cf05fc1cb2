//! Budget alert classification
//!
//! Bands are closed below and open above: `[0.8 * budget, budget)` warns and
//! anything from the budget upward is exceeded. Comparisons are done in
//! integer cents so boundary values classify exactly.

use std::fmt;

use crate::models::{BudgetConfig, Money};

/// Percentage of the budget at which the warning band starts
pub const WARNING_PERCENT: i64 = 80;

/// Where total spending sits relative to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetStatus {
    /// No budget configured
    #[default]
    None,
    /// Below the warning threshold
    Normal,
    /// At or above the warning threshold, below the budget
    Warning { remaining: Money },
    /// At or above the budget
    Exceeded { surplus: Money },
}

impl BudgetStatus {
    /// Whether the presentation layer should show an alert banner
    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Warning { .. } | Self::Exceeded { .. })
    }

    /// Short status name
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Normal => "normal",
            Self::Warning { .. } => "warning",
            Self::Exceeded { .. } => "exceeded",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The warning threshold in cents, truncated toward zero
pub fn warning_threshold(budget: Money) -> Money {
    let cents = i128::from(budget.cents()) * i128::from(WARNING_PERCENT) / 100;
    // |cents| <= |budget| so this always fits back into i64
    Money::from_cents(cents as i64)
}

/// Classify `grand_total` against an optional budget
///
/// Never fails: a zero or negative budget simply classifies every
/// non-negative total as exceeded.
pub fn evaluate_budget_status(grand_total: Money, config: Option<&BudgetConfig>) -> BudgetStatus {
    let Some(config) = config else {
        return BudgetStatus::None;
    };
    let budget = config.budget;

    let status = if grand_total >= budget {
        BudgetStatus::Exceeded {
            surplus: grand_total.saturating_sub(budget),
        }
    } else if i128::from(grand_total.cents()) * 100
        >= i128::from(budget.cents()) * i128::from(WARNING_PERCENT)
    {
        BudgetStatus::Warning {
            remaining: budget.saturating_sub(grand_total),
        }
    } else {
        BudgetStatus::Normal
    };

    tracing::debug!(
        total = grand_total.cents(),
        budget = budget.cents(),
        status = status.label(),
        "evaluated budget status"
    );
    status
}
