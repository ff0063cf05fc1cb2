//! Budget configuration
//!
//! Set by the user and persisted with the settings, independently of the
//! expense records themselves.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Income and spending ceiling for the current period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Income for the period
    pub income: Money,
    /// Spending ceiling for the period
    pub budget: Money,
}

impl BudgetConfig {
    /// Create a validated budget configuration; both amounts must be positive
    pub fn new(income: Money, budget: Money) -> ExpenseResult<Self> {
        if !income.is_positive() {
            return Err(ExpenseError::Validation(format!(
                "Income must be positive (got {})",
                income
            )));
        }
        if !budget.is_positive() {
            return Err(ExpenseError::Validation(format!(
                "Budget must be positive (got {})",
                budget
            )));
        }
        Ok(Self { income, budget })
    }

    /// Income left after spending `total`; negative when overspent
    pub fn income_left(&self, total: Money) -> Money {
        self.income.saturating_sub(total)
    }
}
