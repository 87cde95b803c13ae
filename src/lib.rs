//! Dime - monthly income and expense tracking
//!
//! This library provides the engine behind the `dime` command: expenses and
//! a salary stored per calendar month, a one-time upgrade from the older
//! single-list layout, and monthly and yearly summaries computed on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, periods, money, categories)
//! - `storage`: Key-value persistence, monthly records and legacy migration
//! - `services`: Business logic layer (ledger, currency, session)
//! - `reports`: Derived monthly and yearly views
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use dime::config::{paths::DimePaths, settings::Settings};
//! use dime::services::Session;
//!
//! let paths = DimePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut session = Session::open(&paths, &settings)?;
//! let rollup = session.yearly_rollup(2024)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{DimeError, DimeResult};
