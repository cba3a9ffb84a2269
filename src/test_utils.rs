//! Shared test utilities for finance-buddy.
//!
//! This module provides common helpers for setting up in-memory test databases and
//! building records with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        DateParts,
        expense::{self, NewExpense},
        salary,
    },
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all store-backed tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a valid `NaiveDate`.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn parse_date(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}

/// Builds an unsaved salary model for pure-function tests.
/// `date` is `YYYY-MM-DD`; the date parts are derived from it.
pub fn salary_model(id: i64, date: &str, amount: Decimal) -> entities::salary::Model {
    let date = parse_date(date);
    let DateParts { day, month, year } = DateParts::from(date);
    entities::salary::Model {
        id,
        date,
        day,
        month,
        year,
        amount,
    }
}

/// Builds an unsaved expense model for pure-function tests.
///
/// # Defaults
/// * `establishment`: `"Test establishment"`
pub fn expense_model(
    id: i64,
    date: &str,
    category: &str,
    amount: Decimal,
) -> entities::expense::Model {
    let date = parse_date(date);
    let DateParts { day, month, year } = DateParts::from(date);
    entities::expense::Model {
        id,
        date,
        day,
        month,
        year,
        category: category.to_string(),
        establishment: "Test establishment".to_string(),
        amount,
    }
}

/// Stores a salary of 5000 on `date`.
pub async fn create_test_salary(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<entities::salary::Model> {
    salary::create_salary(db, date, Decimal::from(5000)).await
}

/// Stores a one-off expense and returns its single row.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    date: NaiveDate,
    category: &str,
    amount: Decimal,
) -> Result<entities::expense::Model> {
    let mut created = expense::create_expense(
        db,
        NewExpense::single(date, category, "Test establishment", amount),
    )
    .await?;
    Ok(created.remove(0))
}
