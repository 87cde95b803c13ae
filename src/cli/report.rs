//! CLI commands for reports
//!
//! Monthly dashboard and spending breakdown, and the yearly overview, either
//! printed or exported to CSV.

use clap::Subcommand;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::display::format_spending_charts;
use crate::error::{DimeError, DimeResult};
use crate::services::{PeriodService, Session};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Dashboard and spending breakdown of one month
    Month {
        /// Month (e.g., "2025-01" for January 2025)
        #[arg(short, long)]
        period: Option<String>,

        /// Export the category breakdown to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Draw bar charts of category share and amount ranges
        #[arg(long)]
        charts: bool,
    },

    /// Income, expenses and savings for each month of a year
    #[command(alias = "yearly")]
    Year {
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Export the monthly rows to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(session: &mut Session, cmd: ReportCommands) -> DimeResult<()> {
    let period_service = PeriodService::new();

    match cmd {
        ReportCommands::Month {
            period,
            output,
            top,
            charts,
        } => {
            session.select_period(period_service.parse_or_current(period.as_deref())?)?;
            let report = session.spending_breakdown();
            let currency = session.currency();

            if let Some(path) = output {
                let mut writer = create_export_file(&path)?;
                report.export_csv(&mut writer)?;
                finish_export(writer)?;
                println!("Spending report exported to: {}", path.display());
            } else if let Some(n) = top {
                println!(
                    "Top {} Spending Categories: {}\n",
                    n,
                    report.period.friendly_name()
                );
                println!("{:<24} {:>15} {:>8}", "Category", "Amount", "%");
                println!("{}", "-".repeat(50));
                for row in report.top_categories(n) {
                    println!(
                        "{:<24} {:>15} {:>7.1}%",
                        row.category.label(),
                        row.total.format_with_symbol(&currency.symbol),
                        row.percentage
                    );
                }
            } else {
                println!("{}", session.dashboard().format_terminal(&currency.symbol));
                println!("{}", report.format_terminal(&currency.symbol));
                if charts {
                    println!("{}", format_spending_charts(&report, currency));
                }
            }
        }

        ReportCommands::Year { year, output } => {
            let year = year.unwrap_or_else(|| period_service.current_period().year());
            let rollup = session.yearly_rollup(year)?;

            if let Some(path) = output {
                let mut writer = create_export_file(&path)?;
                rollup.export_csv(&mut writer)?;
                finish_export(writer)?;
                println!("Yearly report exported to: {}", path.display());
            } else {
                println!("{}", rollup.format_terminal(&session.currency().symbol));
            }
        }
    }

    Ok(())
}

fn create_export_file(path: &Path) -> DimeResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        DimeError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn finish_export(mut writer: BufWriter<File>) -> DimeResult<()> {
    writer.flush().map_err(|e| DimeError::Export(e.to_string()))
}
