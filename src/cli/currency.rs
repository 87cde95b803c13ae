//! Currency CLI commands

use clap::Subcommand;

use crate::display::format_currency_list;
use crate::error::{DimeError, DimeResult};
use crate::models::Currency;
use crate::services::Session;

/// Currency subcommands
#[derive(Subcommand, Debug)]
pub enum CurrencyCommands {
    /// Show the active display currency
    Show,

    /// Change the display currency
    Set {
        /// Currency code (USD, EUR, GBP, INR, JPY, CAD, AUD)
        code: String,
    },

    /// List supported currencies
    List,
}

/// Handle a currency command
pub fn handle_currency_command(session: &mut Session, cmd: CurrencyCommands) -> DimeResult<()> {
    match cmd {
        CurrencyCommands::Show => println!("{}", session.currency()),

        CurrencyCommands::Set { code } => {
            let currency = Currency::find(&code)
                .ok_or_else(|| DimeError::Validation(format!("Unsupported currency: {}", code)))?;
            session.set_currency(currency)?;
            println!("Display currency set to {}", session.currency());
        }

        CurrencyCommands::List => print!("{}", format_currency_list(session.currency())),
    }

    Ok(())
}
