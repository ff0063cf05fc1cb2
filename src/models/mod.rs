//! Core data models for the expense tracker
//!
//! Expense records as supplied by the store, the closed category set, money
//! amounts and the user's budget configuration.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::BudgetConfig;
pub use category::{Category, CategoryFilter, CategoryParseError};
pub use expense::{Amount, ExpenseRecord, RECORD_DATE_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY_SYMBOL};
