//! CLI command handlers
//!
//! Bridges clap argument parsing with the aggregation engine and settings.

pub mod budget;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{
    handle_demo_command, handle_list_command, handle_summary_command, ListArgs, SummaryArgs,
};

use crate::models::Money;

/// clap value parser for money amounts
pub fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}
