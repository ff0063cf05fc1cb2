//! CLI commands for reading a snapshot: summary, list and demo

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::aggregation::{sort_newest_first, AggregationResult, ExpenseFilter};
use crate::config::{ExpensePaths, Settings};
use crate::demo::demo_records;
use crate::display::{format_expense_list, format_summary};
use crate::error::ExpenseResult;
use crate::models::{BudgetConfig, CategoryFilter, ExpenseRecord, Money};
use crate::snapshot::read_snapshot;

/// Arguments for `expense summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Snapshot file (defaults to data/expenses.json)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Spending ceiling, overriding the configured budget
    #[arg(short, long, value_parser = super::parse_money)]
    pub budget: Option<Money>,

    /// Income, overriding the configured income
    #[arg(short, long, value_parser = super::parse_money)]
    pub income: Option<Money>,

    /// Order months by calendar date instead of first appearance
    #[arg(long)]
    pub chronological: bool,
}

/// Arguments for `expense list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Snapshot file (defaults to data/expenses.json)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Case-insensitive text matched against description or category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category name, or "All"
    #[arg(short, long, default_value = "All")]
    pub category: CategoryFilter,
}

fn load_records(paths: &ExpensePaths, file: Option<PathBuf>) -> ExpenseResult<Vec<ExpenseRecord>> {
    let path = file.unwrap_or_else(|| paths.expenses_file());
    read_snapshot(path)
}

/// Budget from flags layered over the configured one
pub fn effective_budget(
    configured: Option<BudgetConfig>,
    budget: Option<Money>,
    income: Option<Money>,
) -> Option<BudgetConfig> {
    match (configured, budget) {
        (Some(config), budget) => Some(BudgetConfig {
            budget: budget.unwrap_or(config.budget),
            income: income.unwrap_or(config.income),
        }),
        (None, Some(budget)) => Some(BudgetConfig {
            budget,
            income: income.unwrap_or_default(),
        }),
        (None, None) => None,
    }
}

/// Handle `expense summary`
pub fn handle_summary_command(
    paths: &ExpensePaths,
    settings: &Settings,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let records = load_records(paths, args.file)?;
    let budget = effective_budget(settings.budget, args.budget, args.income);

    let result = AggregationResult::from_records(&records, budget.as_ref());
    print!(
        "{}",
        format_summary(
            &result,
            budget.as_ref(),
            &settings.currency_symbol,
            args.chronological
        )
    );
    Ok(())
}

/// Handle `expense list`
pub fn handle_list_command(
    paths: &ExpensePaths,
    settings: &Settings,
    args: ListArgs,
) -> ExpenseResult<()> {
    let records = load_records(paths, args.file)?;
    let filter = ExpenseFilter::new(args.search.unwrap_or_default(), args.category);

    let mut matching = filter.apply(&records);
    sort_newest_first(&mut matching);

    println!(
        "{}",
        format_expense_list(&matching, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

/// Handle `expense demo`: print the demo snapshot as JSON
pub fn handle_demo_command() -> ExpenseResult<()> {
    let records = demo_records(Local::now().date_naive());
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
