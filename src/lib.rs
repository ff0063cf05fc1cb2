//! Expense Tracker - aggregation and budget alerts for expense records
//!
//! The heart of the crate is a pure aggregation engine: given a snapshot of
//! expense records (as some store supplies them), it derives category totals,
//! month-bucketed totals, the grand total and a budget status. Front ends
//! render those; the engine itself does no I/O and never fails on malformed
//! records.
//!
//! # Architecture
//!
//! - `models`: expense records, categories, money and budget configuration
//! - `aggregation`: the engine (totals, monthly buckets, budget status, filtering)
//! - `config`: path resolution and user settings
//! - `snapshot`: reading a JSON snapshot of records
//! - `display`: terminal formatting of engine output
//! - `cli`: command handlers for the `expense` binary
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use expense_tracker::aggregation::{compute_category_totals, compute_grand_total};
//! use expense_tracker::models::Category;
//!
//! let records = expense_tracker::snapshot::parse_snapshot(r#"[
//!     {"id": "1", "amount": 12.5, "category": "Food", "date": "2025-01-02"},
//!     {"id": "2", "amount": "abc", "category": "Unknown", "date": "2025-01-03"}
//! ]"#.as_bytes()).unwrap();
//!
//! assert_eq!(compute_grand_total(&records).cents(), 1250);
//! assert_eq!(compute_category_totals(&records).categories(), vec![Category::Food, Category::Other]);
//! ```

pub mod aggregation;
pub mod cli;
pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod snapshot;

pub use error::{ExpenseError, ExpenseResult};
