use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_budget_command, handle_demo_command, handle_list_command, handle_summary_command,
    BudgetCommands, ListArgs, SummaryArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Expense totals, monthly trends and budget alerts",
    long_about = "Reads a snapshot of expense records (a JSON array) and reports \
                  totals by category and by month, the overall total, and where \
                  that total sits against your budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Totals by category and month, with budget status
    Summary(SummaryArgs),

    /// List expenses, newest first, with optional search and category filter
    #[command(alias = "ls")]
    List(ListArgs),

    /// Print a demo snapshot as JSON
    Demo,

    /// Budget configuration commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    expense_tracker::logging::init_tracing();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Summary(args)) => handle_summary_command(&paths, &settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&paths, &settings, args)?,
        Some(Commands::Demo) => handle_demo_command()?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&paths, &mut settings, cmd)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Snapshot file:    {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            match settings.budget {
                Some(config) => println!(
                    "  Budget:          {} (income {})",
                    config.budget.format_with_symbol(&settings.currency_symbol),
                    config.income.format_with_symbol(&settings.currency_symbol)
                ),
                None => println!("  Budget:          not set"),
            }
        }
        None => {
            println!("Expense Tracker - totals and budget alerts for your expenses");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense demo > expenses.json' to get a sample snapshot.");
        }
    }

    Ok(())
}
