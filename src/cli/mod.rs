//! Command-line interface - argument parsing and the shared command context.
//!
//! The six dashboard views are subcommands: `overview`, `salary`, `expense`,
//! `monthly`, `annual` and `compare`. Each invocation runs one
//! read-modify-render cycle against the ledger and exits.

/// Handlers for every subcommand
pub mod commands;
/// Currency, table and chart rendering
pub mod format;

use crate::config::AppConfig;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use std::path::PathBuf;

/// Shared data available to all commands.
/// Holds the database connection and the loaded settings.
pub struct AppContext {
    /// Database connection for all store operations
    pub database: DatabaseConnection,
    /// Loaded application settings
    pub config: AppConfig,
}

impl AppContext {
    /// Creates a new `AppContext` from an open connection and loaded settings.
    #[must_use]
    pub const fn new(database: DatabaseConnection, config: AppConfig) -> Self {
        Self { database, config }
    }
}

/// Personal finance ledger: salary, expenses and reports.
#[derive(Parser, Debug)]
#[command(name = "finance-buddy", version)]
pub struct Cli {
    /// Path to the TOML settings file
    #[arg(
        long,
        global = true,
        env = "FINANCE_BUDDY_CONFIG",
        default_value = "config.toml"
    )]
    pub config: PathBuf,

    /// Database connection string; overrides the settings file
    #[arg(long, global = true, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    #[allow(missing_docs)]
    pub command: Command,
}

impl Cli {
    /// Parses the process arguments.
    #[must_use]
    pub fn init() -> Self {
        Self::parse()
    }
}

/// Dashboard views.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ledger summary and usage
    Overview,
    /// Record, list or delete salary deposits
    #[command(subcommand)]
    Salary(SalaryCommand),
    /// Record, list or delete expenses
    #[command(subcommand)]
    Expense(ExpenseCommand),
    /// Expenses of one month by category
    Monthly(MonthlyArgs),
    /// Expenses of one year by month
    Annual(AnnualArgs),
    /// Salary against expenses for one month
    Compare(CompareArgs),
}

/// Salary entry view.
#[derive(Subcommand, Debug)]
pub enum SalaryCommand {
    /// Record a salary deposit
    Add {
        /// Deposit date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Deposited amount
        #[arg(long)]
        amount: Decimal,
    },
    /// Delete a salary row by id
    Delete {
        /// Id of the row to delete
        #[arg(long)]
        id: Option<i64>,
    },
    /// Show all salary rows
    List,
}

/// Expense entry view.
#[derive(Subcommand, Debug)]
pub enum ExpenseCommand {
    /// Record an expense, optionally split into monthly installments
    Add {
        /// Purchase date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Spending category
        #[arg(long)]
        category: String,
        /// Where the purchase was made
        #[arg(long, default_value = "")]
        establishment: String,
        /// Total purchase amount
        #[arg(long)]
        amount: Decimal,
        /// Number of monthly installments
        #[arg(long, default_value_t = 1)]
        installments: u32,
    },
    /// Delete one expense row by id
    Delete {
        /// Id of the row to delete
        #[arg(long)]
        id: Option<i64>,
    },
    /// Show all expense rows
    List,
}

/// Monthly report filters. Missing values default to the latest period with data.
#[derive(Args, Debug)]
pub struct MonthlyArgs {
    /// Year to report on
    #[arg(long)]
    pub year: Option<String>,
    /// Month to report on (1-12)
    #[arg(long)]
    pub month: Option<String>,
    /// Only chart these categories (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,
}

/// Annual report filters.
#[derive(Args, Debug)]
pub struct AnnualArgs {
    /// Year to report on; defaults to the latest year with expenses
    #[arg(long)]
    pub year: Option<String>,
}

/// Comparison filters.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Year to compare
    #[arg(long)]
    pub year: Option<String>,
    /// Month to compare (1-12)
    #[arg(long)]
    pub month: Option<String>,
}
