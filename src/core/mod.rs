//! Core business logic - framework-agnostic ledger operations and reports.
//!
//! `amortization` and `aggregate` are pure; `salary`, `expense` and `report` take an
//! explicit database handle so every call can be pointed at an in-memory store.

pub mod aggregate;
pub mod amortization;
pub mod expense;
pub mod report;
pub mod salary;

use chrono::{Datelike, NaiveDate};

/// Day, month and year of a date in the form they are stored next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    /// Day of month
    pub day: i32,
    /// Two-digit month (`"03"`)
    pub month: String,
    /// Four-digit year (`"2024"`)
    pub year: String,
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self {
            // day() is at most 31
            #[allow(clippy::cast_possible_wrap)]
            day: date.day() as i32,
            month: format!("{:02}", date.month()),
            year: format!("{:04}", date.year()),
        }
    }
}
