//! Budget CLI commands
//!
//! Show, set and clear the budget configuration kept in the settings file.

use clap::Subcommand;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::models::{BudgetConfig, Money};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the configured budget
    Show,

    /// Set income and spending ceiling for the period
    Set {
        /// Spending ceiling (e.g., "10000" or "10000.00")
        #[arg(short, long, value_parser = super::parse_money)]
        budget: Money,

        /// Income for the period
        #[arg(short, long, value_parser = super::parse_money)]
        income: Money,
    },

    /// Remove the budget configuration
    Clear,
}

/// Handle a budget command
pub fn handle_budget_command(
    paths: &ExpensePaths,
    settings: &mut Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.clone();

    match cmd {
        BudgetCommands::Show => match settings.budget {
            Some(config) => {
                println!("Budget: {}", config.budget.format_with_symbol(&symbol));
                println!("Income: {}", config.income.format_with_symbol(&symbol));
            }
            None => {
                println!("No budget configured.");
                println!("Run 'expense budget set --budget <AMOUNT> --income <AMOUNT>' to set one.");
            }
        },
        BudgetCommands::Set { budget, income } => {
            let config = BudgetConfig::new(income, budget)?;
            settings.budget = Some(config);
            settings.save(paths)?;
            tracing::info!(budget = budget.cents(), income = income.cents(), "budget updated");
            println!(
                "Budget set to {} (income {})",
                budget.format_with_symbol(&symbol),
                income.format_with_symbol(&symbol)
            );
        }
        BudgetCommands::Clear => {
            if settings.budget.take().is_some() {
                settings.save(paths)?;
                println!("Budget cleared.");
            } else {
                println!("No budget configured.");
            }
        }
    }

    Ok(())
}
