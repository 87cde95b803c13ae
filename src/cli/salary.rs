//! Salary CLI commands
//!
//! Income is recorded per month as a single salary figure.

use clap::Subcommand;

use crate::error::DimeResult;
use crate::services::{PeriodService, Session};

use super::expense::parse_amount;

/// Salary subcommands
#[derive(Subcommand, Debug)]
pub enum SalaryCommands {
    /// Set the salary of a month
    Set {
        /// Salary amount (e.g., "5000" or "5000.00")
        amount: String,

        /// Month (e.g., "2025-01" for January 2025)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show the salary of a month
    Show {
        /// Month (defaults to current month)
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a salary command
pub fn handle_salary_command(session: &mut Session, cmd: SalaryCommands) -> DimeResult<()> {
    let period_service = PeriodService::new();

    match cmd {
        SalaryCommands::Set { amount, period } => {
            session.select_period(period_service.parse_or_current(period.as_deref())?)?;
            let amount = parse_amount(&amount)?;

            session.set_salary(amount)?;

            println!(
                "Set salary for {} to {}",
                session.selected_period().friendly_name(),
                amount.format_with_symbol(&session.currency().symbol)
            );
        }

        SalaryCommands::Show { period } => {
            session.select_period(period_service.parse_or_current(period.as_deref())?)?;
            let friendly = session.selected_period().friendly_name();
            let symbol = &session.currency().symbol;

            if session.selected_salary().is_zero() {
                println!("No salary set for {}", friendly);
                println!("Use 'dime salary set <amount>' to set it.");
            } else {
                let dashboard = session.dashboard();
                println!("Salary for {}", friendly);
                println!("{}", "-".repeat(40));
                println!("Salary:    {}", dashboard.salary.format_with_symbol(symbol));
                println!("Spent:     {}", dashboard.total_expenses.format_with_symbol(symbol));
                if dashboard.is_overspent() {
                    println!("Overspent: {} ⚠", dashboard.remaining.abs().format_with_symbol(symbol));
                } else {
                    println!("Remaining: {} ✓", dashboard.remaining.format_with_symbol(symbol));
                }
            }
        }
    }

    Ok(())
}
