//! Summary view: totals, category breakdown, monthly trend and budget banner

use crate::aggregation::{AggregationResult, BudgetStatus, MonthTotal};
use crate::models::{BudgetConfig, Money};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 16;

/// Section title followed by a rule
fn section(title: &str) -> String {
    format!("\n{}\n{}\n", title, "─".repeat(WIDTH))
}

/// Share of the grand total, always one decimal
fn share_label(share: f64) -> String {
    format!("{:.1}%", share)
}

/// Bar scaled against the largest amount in the section
///
/// Works in cents so equal totals always draw equal bars. Zero or negative
/// amounts draw an empty bar.
fn amount_bar(amount: Money, largest: Money, width: usize) -> String {
    if !amount.is_positive() || !largest.is_positive() {
        return " ".repeat(width);
    }

    let largest = i128::from(largest.cents());
    let scaled = (i128::from(amount.cents()) * width as i128 + largest / 2) / largest;
    let filled = usize::try_from(scaled).unwrap_or(width).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Alert line for the budget status, if it warrants one
pub fn budget_banner(status: BudgetStatus, symbol: &str) -> Option<String> {
    match status {
        BudgetStatus::Warning { remaining } => Some(format!(
            "Warning: you have used over 80% of your budget ({} left)",
            remaining.format_with_symbol(symbol)
        )),
        BudgetStatus::Exceeded { surplus } => Some(format!(
            "Budget exceeded by {}",
            surplus.format_with_symbol(symbol)
        )),
        BudgetStatus::None | BudgetStatus::Normal => None,
    }
}

/// Format a full summary of one snapshot
///
/// `chronological` sorts the monthly section by calendar month instead of the
/// order months were first seen.
pub fn format_summary(
    result: &AggregationResult,
    budget: Option<&BudgetConfig>,
    symbol: &str,
    chronological: bool,
) -> String {
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str(&"═".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total Spending: {} ({} expenses)\n",
        result.grand_total.format_with_symbol(symbol),
        result.record_count
    ));

    if let Some(config) = budget {
        output.push_str(&format!(
            "Budget: {}   Income: {}   Income Left: {}\n",
            config.budget.format_with_symbol(symbol),
            config.income.format_with_symbol(symbol),
            config.income_left(result.grand_total).format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!("Budget Status: {}\n", result.budget_status));
    if let Some(banner) = budget_banner(result.budget_status, symbol) {
        output.push_str(&format!("!! {}\n", banner));
    }

    output.push_str(&section("By Category"));
    if result.category_totals.is_empty() {
        output.push_str("  No expenses.\n");
    } else {
        let largest = result
            .category_totals
            .iter()
            .map(|(_, total)| total)
            .max()
            .unwrap_or_default();
        for (category, share) in result.category_totals.shares() {
            let total = result.category_totals.get(category).unwrap_or_default();
            output.push_str(&format!(
                "  {} {:<14} {:>14} {:>6}  {}\n",
                category.icon(),
                category.name(),
                total.format_with_symbol(symbol),
                share_label(share),
                amount_bar(total, largest, BAR_WIDTH)
            ));
        }
    }

    output.push_str(&section("By Month"));
    let months: Vec<MonthTotal> = if chronological {
        result.monthly_totals.chronological()
    } else {
        result.monthly_totals.iter().copied().collect()
    };
    if months.is_empty() {
        output.push_str("  No dated expenses.\n");
    } else {
        let largest = months.iter().map(|m| m.total).max().unwrap_or_default();
        for entry in &months {
            output.push_str(&format!(
                "  {:<17} {:>14}  {}\n",
                entry.month.label(),
                entry.total.format_with_symbol(symbol),
                amount_bar(entry.total, largest, BAR_WIDTH)
            ));
        }
    }

    output
}
