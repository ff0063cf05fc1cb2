//! Terminal formatting for engine output
//!
//! Turns aggregation results and record lists into plain text for the CLI.

pub mod expense;
pub mod summary;

pub use expense::format_expense_list;
pub use summary::{budget_banner, format_summary};
