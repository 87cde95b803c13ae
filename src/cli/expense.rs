//! Expense CLI commands
//!
//! Add, list, show, edit and delete the expenses of a month.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{DimeError, DimeResult};
use crate::models::{Category, ExpenseId, ExpenseUpdate, Money, NewExpense};
use crate::services::{PeriodService, Session};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        amount: String,

        /// Category (Saving, Housing, Insurance, Food, Transport, Utilities,
        /// Medical, Education, Entertainment, Others)
        #[arg(short, long)]
        category: String,

        /// Date spent (YYYY-MM-DD, defaults to today); decides the month
        #[arg(short, long)]
        date: Option<String>,

        /// Free-form remarks
        #[arg(short, long)]
        remarks: Option<String>,
    },

    /// List the expenses of a month
    #[command(alias = "ls")]
    List {
        /// Month (e.g., "2025-01", defaults to current month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show one expense in detail
    Show {
        /// Expense ID or unique prefix
        id: String,

        #[arg(short, long)]
        period: Option<String>,
    },

    /// Change fields of an expense
    Edit {
        /// Expense ID or unique prefix
        id: String,

        #[arg(short, long)]
        period: Option<String>,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New date, within the same month
        #[arg(short, long)]
        date: Option<String>,

        /// New remarks
        #[arg(short, long)]
        remarks: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or unique prefix
        id: String,

        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    session: &mut Session,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> DimeResult<()> {
    let period_service = PeriodService::new();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            remarks,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            let mut data = NewExpense::new(date, parse_category(&category)?, parse_amount(&amount)?);
            if let Some(remarks) = remarks {
                data = data.with_remarks(remarks);
            }

            let expense = session.add_expense(data)?;
            let symbol = &session.currency().symbol;

            println!(
                "Added {} {} ({}) on {} to {}",
                expense.id,
                expense.amount.format_with_symbol(symbol),
                expense.category,
                expense.date.format(&settings.date_format),
                expense.period().friendly_name()
            );
        }

        ExpenseCommands::List { period } => {
            session.select_period(period_service.parse_or_current(period.as_deref())?)?;

            print!(
                "{}",
                format_expense_list(
                    session.selected_period(),
                    session.selected_expenses(),
                    session.currency(),
                    &settings.date_format,
                )
            );
        }

        ExpenseCommands::Show { id, period } => {
            session.select_period(period_service.parse_or_current(period.as_deref())?)?;
            let id = resolve_expense_id(session, &id)?;

            if let Some(expense) = session.selected_expenses().iter().find(|e| e.id == id) {
                print!(
                    "{}",
                    format_expense_details(expense, &session.currency().symbol, &settings.date_format)
                );
            }
        }

        ExpenseCommands::Edit {
            id,
            period,
            amount,
            category,
            date,
            remarks,
        } => {
            session.select_period(period_service.parse_or_current(period.as_deref())?)?;
            let id = resolve_expense_id(session, &id)?;

            let update = ExpenseUpdate {
                date: date.as_deref().map(parse_date).transpose()?,
                category: category.as_deref().map(parse_category).transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                remarks,
            };
            if update.is_empty() {
                println!("Nothing to change. Pass --amount, --category, --date or --remarks.");
                return Ok(());
            }

            if session.update_expense(id, &update)? {
                println!("Updated {}", id);
            } else {
                println!("Expense {} no longer exists", id);
            }
        }

        ExpenseCommands::Delete { id, period } => {
            session.select_period(period_service.parse_or_current(period.as_deref())?)?;
            let id = resolve_expense_id(session, &id)?;

            match session.delete_expense(id)? {
                Some(expense) => println!(
                    "Deleted {} ({} {})",
                    expense.id,
                    expense.category,
                    expense.amount.format_with_symbol(&session.currency().symbol)
                ),
                None => println!("Expense {} no longer exists", id),
            }
        }
    }

    Ok(())
}

/// Find the one expense of the selected month matching a typed ID or prefix
fn resolve_expense_id(session: &Session, fragment: &str) -> DimeResult<ExpenseId> {
    if let Ok(id) = ExpenseId::parse(fragment) {
        return Ok(id);
    }

    let matches: Vec<ExpenseId> = session
        .selected_expenses()
        .iter()
        .map(|e| e.id)
        .filter(|id| id.matches_prefix(fragment))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(DimeError::expense_not_found(fragment)),
        _ => Err(DimeError::Validation(format!(
            "'{}' matches {} expenses; use a longer prefix",
            fragment,
            matches.len()
        ))),
    }
}

pub(crate) fn parse_amount(s: &str) -> DimeResult<Money> {
    Money::parse(s).map_err(|e| DimeError::Validation(e.to_string()))
}

fn parse_date(s: &str) -> DimeResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        DimeError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

fn parse_category(s: &str) -> DimeResult<Category> {
    s.parse()
        .map_err(|e: crate::models::CategoryParseError| DimeError::Validation(e.to_string()))
}
