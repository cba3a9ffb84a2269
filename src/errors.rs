//! Unified error type for finance-buddy.
//!
//! Every fallible operation in the crate returns [`Result`], so callers can use `?`
//! from the store layer all the way up to the CLI.

use thiserror::Error;

/// All errors surfaced by the ledger, the reports and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before anything was written (bad installment count,
    /// non-positive amount, empty category, calendar overflow).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the input
        message: String,
    },

    /// A delete was requested without selecting a record id.
    #[error("No {table} record selected; pick an id before deleting")]
    EmptySelection {
        /// Table the delete was aimed at (`salary` or `expenses`)
        table: &'static str,
    },

    /// A report filter matched zero records.
    #[error("No data available for {filter}")]
    NoDataForFilter {
        /// Human-readable description of the filter
        filter: String,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Details about the failure
        message: String,
    },

    /// Store failure. Not recovered; aborts the current action.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
