//! Report generation business logic.
//!
//! This module builds the monthly, annual and salary-vs-expense views on top of
//! [`crate::core::aggregate`]. Each async report loads the tables it needs and hands
//! the rows to a pure `*_from_records` builder, which is what the unit tests exercise
//! directly. A filter that matches nothing yields [`Error::NoDataForFilter`]; the
//! CLI shows that as information rather than a failure.

use crate::{
    core::{
        aggregate::{
            GroupKey, MoneyRecord, aggregate_by, available_categories, available_years,
            count_for, normalize_month, sum_amounts, total_for,
        },
        expense::list_expenses,
        salary::list_salaries,
    },
    entities::{expense, salary},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use std::collections::{BTreeMap, BTreeSet};

/// Expenses of one month, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    /// Selected year
    pub year: String,
    /// Selected month, two digits
    pub month: String,
    /// Total spent in the month across all categories
    pub total: Decimal,
    /// Per-category totals, restricted to the requested categories if any were given
    pub by_category: BTreeMap<String, Decimal>,
    /// Every category with spending in the month
    pub categories: Vec<String>,
    /// Number of expense rows in the month
    pub record_count: usize,
}

/// Expenses of one year, grouped by month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualReport {
    /// Selected year
    pub year: String,
    /// Total spent in the year
    pub total: Decimal,
    /// Per-month totals keyed by two-digit month
    pub by_month: BTreeMap<String, Decimal>,
}

/// Salary against expenses for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Selected year
    pub year: String,
    /// Selected month, two digits
    pub month: String,
    /// Sum of expense rows in the month
    pub total_expenses: Decimal,
    /// Sum of salary rows in the month
    pub net_salary: Decimal,
    /// `net_salary - total_expenses`
    pub balance: Decimal,
    /// Expenses as a percentage of salary + expenses, one decimal place
    pub expense_share: Decimal,
    /// Salary as a percentage of salary + expenses, one decimal place
    pub salary_share: Decimal,
}

/// Whole-ledger summary for the landing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    /// Number of salary rows
    pub salary_count: usize,
    /// Number of expense rows
    pub expense_count: usize,
    /// Sum of all salary rows
    pub total_salary: Decimal,
    /// Sum of all expense rows
    pub total_expenses: Decimal,
    /// Years with at least one salary or expense row, ascending
    pub years: Vec<String>,
    /// Most recent date across both tables
    pub latest_date: Option<NaiveDate>,
}

fn no_data(year: &str, month: Option<&str>) -> Error {
    let filter = match month {
        Some(month) => format!("{}/{}", normalize_month(month), year.trim()),
        None => format!("year {}", year.trim()),
    };
    Error::NoDataForFilter { filter }
}

/// Builds a [`MonthlyReport`] from already loaded expense rows.
///
/// # Errors
/// [`Error::NoDataForFilter`] when no expense falls in the month.
pub fn monthly_from_records(
    expenses: &[expense::Model],
    year: &str,
    month: &str,
    categories: &[String],
) -> Result<MonthlyReport> {
    let record_count = count_for(expenses, year, Some(month));
    if record_count == 0 {
        return Err(no_data(year, Some(month)));
    }

    let mut by_category = aggregate_by(expenses, GroupKey::Category, year, Some(month));
    if !categories.is_empty() {
        by_category.retain(|category, _| categories.iter().any(|c| c.trim() == category.as_str()));
    }

    Ok(MonthlyReport {
        year: year.trim().to_string(),
        month: normalize_month(month),
        total: total_for(expenses, year, Some(month)),
        by_category,
        categories: available_categories(expenses, year, Some(month)),
        record_count,
    })
}

/// Builds an [`AnnualReport`] from already loaded expense rows.
///
/// # Errors
/// [`Error::NoDataForFilter`] when no expense falls in the year.
pub fn annual_from_records(expenses: &[expense::Model], year: &str) -> Result<AnnualReport> {
    let by_month = aggregate_by(expenses, GroupKey::Month, year, None);
    if by_month.is_empty() {
        return Err(no_data(year, None));
    }

    Ok(AnnualReport {
        year: year.trim().to_string(),
        total: sum_amounts(by_month.values().copied()),
        by_month,
    })
}

/// Percentage of `part` in `whole`, one decimal place. Zero when `whole` is zero.
#[must_use]
pub fn share_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part / whole * Decimal::ONE_HUNDRED).round_dp(1)
}

/// Builds a [`ComparisonReport`] from already loaded rows.
///
/// # Errors
/// [`Error::NoDataForFilter`] unless the month has both salary and expense rows.
pub fn comparison_from_records(
    salaries: &[salary::Model],
    expenses: &[expense::Model],
    year: &str,
    month: &str,
) -> Result<ComparisonReport> {
    if count_for(salaries, year, Some(month)) == 0 || count_for(expenses, year, Some(month)) == 0
    {
        return Err(no_data(year, Some(month)));
    }

    let total_expenses = total_for(expenses, year, Some(month));
    let net_salary = total_for(salaries, year, Some(month));
    let whole = total_expenses.saturating_add(net_salary);

    Ok(ComparisonReport {
        year: year.trim().to_string(),
        month: normalize_month(month),
        total_expenses,
        net_salary,
        balance: net_salary.saturating_sub(total_expenses),
        expense_share: share_percent(total_expenses, whole),
        salary_share: share_percent(net_salary, whole),
    })
}

/// Builds an [`Overview`] from already loaded rows. Never fails; an empty ledger
/// gives zero counts.
#[must_use]
pub fn overview_from_records(salaries: &[salary::Model], expenses: &[expense::Model]) -> Overview {
    let years: BTreeSet<String> = available_years(salaries)
        .into_iter()
        .chain(available_years(expenses))
        .collect();
    let latest_date = salaries
        .iter()
        .map(MoneyRecord::date)
        .chain(expenses.iter().map(MoneyRecord::date))
        .max();

    Overview {
        salary_count: salaries.len(),
        expense_count: expenses.len(),
        total_salary: sum_amounts(salaries.iter().map(MoneyRecord::amount)),
        total_expenses: sum_amounts(expenses.iter().map(MoneyRecord::amount)),
        years: years.into_iter().collect(),
        latest_date,
    }
}

/// Monthly expense report, optionally limited to `categories`.
pub async fn monthly_report(
    db: &DatabaseConnection,
    year: &str,
    month: &str,
    categories: &[String],
) -> Result<MonthlyReport> {
    let expenses = list_expenses(db).await?;
    monthly_from_records(&expenses, year, month, categories)
}

/// Annual expense report grouped by month.
pub async fn annual_report(db: &DatabaseConnection, year: &str) -> Result<AnnualReport> {
    let expenses = list_expenses(db).await?;
    annual_from_records(&expenses, year)
}

/// Salary-vs-expense comparison for one month.
pub async fn comparison_report(
    db: &DatabaseConnection,
    year: &str,
    month: &str,
) -> Result<ComparisonReport> {
    let salaries = list_salaries(db).await?;
    let expenses = list_expenses(db).await?;
    comparison_from_records(&salaries, &expenses, year, month)
}

/// Whole-ledger overview.
pub async fn overview(db: &DatabaseConnection) -> Result<Overview> {
    let salaries = list_salaries(db).await?;
    let expenses = list_expenses(db).await?;
    Ok(overview_from_records(&salaries, &expenses))
}
