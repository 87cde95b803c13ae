use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dime::cli::{
    handle_currency_command, handle_expense_command, handle_report_command, handle_salary_command,
};
use dime::config::{paths::DimePaths, settings::Settings};
use dime::services::Session;
use dime::storage::{MigrationOutcome, Storage};

/// Environment variable holding the log filter
const LOG_ENV: &str = "DIME_LOG";

#[derive(Parser)]
#[command(
    name = "dime",
    version,
    about = "Monthly income and expense tracker",
    long_about = "Dime records a salary and categorized expenses for each calendar \
                  month and summarizes them per month and per year."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(dime::cli::ExpenseCommands),

    /// Monthly salary commands
    #[command(subcommand)]
    Salary(dime::cli::SalaryCommands),

    /// Display currency commands
    #[command(subcommand)]
    Currency(dime::cli::CurrencyCommands),

    /// Monthly and yearly reports
    #[command(subcommand)]
    Report(dime::cli::ReportCommands),

    /// Move data from the old single-list layout into monthly records
    Migrate,

    /// List months that have stored data
    Periods,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let paths = DimePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut session = Session::open(&paths, &settings)?;
            handle_expense_command(&mut session, &settings, cmd)?;
        }
        Some(Commands::Salary(cmd)) => {
            let mut session = Session::open(&paths, &settings)?;
            handle_salary_command(&mut session, cmd)?;
        }
        Some(Commands::Currency(cmd)) => {
            let mut session = Session::open(&paths, &settings)?;
            handle_currency_command(&mut session, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let mut session = Session::open(&paths, &settings)?;
            handle_report_command(&mut session, cmd)?;
        }
        Some(Commands::Migrate) => {
            let storage = Storage::open(&paths)?;
            match storage.migrate_legacy()? {
                MigrationOutcome::NoLegacyData => println!("No legacy data found. Nothing to do."),
                MigrationOutcome::Migrated(report) => {
                    println!(
                        "Migrated {} expenses into {} months.",
                        report.expense_count,
                        report.periods.len()
                    );
                    for period in &report.periods {
                        println!("  {} (salary {})", period.friendly_name(), report.salary);
                    }
                }
            }
        }
        Some(Commands::Periods) => {
            let session = Session::open(&paths, &settings)?;
            let periods = session.stored_periods()?;
            if periods.is_empty() {
                println!("No months recorded yet.");
            }
            for period in periods {
                let record = session.storage().periods.get_or_default(period)?;
                println!(
                    "{}  {:<16} salary {:>12}  expenses {:>12} ({})",
                    period,
                    period.friendly_name(),
                    record.salary.format_with_symbol(&session.currency().symbol),
                    record
                        .total_expenses()
                        .format_with_symbol(&session.currency().symbol),
                    record.expenses.len()
                );
            }
        }
        Some(Commands::Config) => {
            println!("Dime Configuration");
            println!("==================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Date format:    {}", settings.date_format);
            println!("  Auto migrate:   {}", settings.auto_migrate);
        }
        None => {
            println!("Dime - monthly income and expense tracker");
            println!();
            println!("Run 'dime --help' for usage information.");
            println!("Run 'dime expense add 12.50 --category Food' to record an expense.");
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `DIME_LOG`, then `RUST_LOG`, then warnings only
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
