//! Report aggregation over dated money records.
//!
//! Functions here are pure and work on any slice of [`MoneyRecord`]s, so the same
//! code sums salary rows and expense rows. Results are `BTreeMap`s: iteration order
//! is the key order, never the input order.

use crate::entities::{expense, salary};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

/// A dated amount that can be filtered by year/month and grouped.
pub trait MoneyRecord {
    /// Date the record is attributed to
    fn date(&self) -> NaiveDate;
    /// Stored four-digit year
    fn year(&self) -> &str;
    /// Stored month (two digits for rows written by this crate)
    fn month(&self) -> &str;
    /// Record amount
    fn amount(&self) -> Decimal;
    /// Spending category; `None` for records that have none (salary)
    fn category(&self) -> Option<&str> {
        None
    }
}

impl MoneyRecord for salary::Model {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn year(&self) -> &str {
        &self.year
    }

    fn month(&self) -> &str {
        &self.month
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl MoneyRecord for expense::Model {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn year(&self) -> &str {
        &self.year
    }

    fn month(&self) -> &str {
        &self.month
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

/// What to group aggregated amounts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    /// One entry per spending category
    Category,
    /// One entry per two-digit month
    Month,
}

/// Canonical two-digit form of a month string, so `"3"` and `"03"` compare equal.
/// Values that are not numbers are returned trimmed but otherwise untouched.
#[must_use]
pub fn normalize_month(month: &str) -> String {
    let trimmed = month.trim();
    trimmed
        .parse::<u32>()
        .map_or_else(|_| trimmed.to_string(), |m| format!("{m:02}"))
}

fn in_period<R: MoneyRecord>(record: &R, year: &str, month: Option<&str>) -> bool {
    record.year().trim() == year.trim()
        && month.is_none_or(|m| normalize_month(record.month()) == normalize_month(m))
}

/// Sums `amount` per group for the records that fall in `year` (and `month`, when
/// given).
///
/// Only groups with at least one matching record appear in the result. An empty
/// input, or one where every record is filtered out, gives an empty map. Records
/// without a category are skipped when grouping by [`GroupKey::Category`].
#[must_use]
pub fn aggregate_by<R: MoneyRecord>(
    records: &[R],
    key: GroupKey,
    year: &str,
    month: Option<&str>,
) -> BTreeMap<String, Decimal> {
    let mut groups = BTreeMap::new();

    for record in records.iter().filter(|r| in_period(*r, year, month)) {
        let group = match key {
            GroupKey::Category => match record.category() {
                Some(category) => category.to_string(),
                None => continue,
            },
            GroupKey::Month => normalize_month(record.month()),
        };
        let total = groups.entry(group).or_insert(Decimal::ZERO);
        *total = total.saturating_add(record.amount());
    }

    groups
}

/// Total amount of the records in `year` (and `month`, when given).
#[must_use]
pub fn total_for<R: MoneyRecord>(records: &[R], year: &str, month: Option<&str>) -> Decimal {
    sum_amounts(
        records
            .iter()
            .filter(|r| in_period(*r, year, month))
            .map(MoneyRecord::amount),
    )
}

/// Sums amounts without panicking; a total past `Decimal::MAX` stays at the limit.
#[must_use]
pub fn sum_amounts<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Number of records in `year` (and `month`, when given).
#[must_use]
pub fn count_for<R: MoneyRecord>(records: &[R], year: &str, month: Option<&str>) -> usize {
    records
        .iter()
        .filter(|r| in_period(*r, year, month))
        .count()
}

/// Distinct years present in `records`, ascending.
#[must_use]
pub fn available_years<R: MoneyRecord>(records: &[R]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.year().trim().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct two-digit months present in `year`, ascending.
#[must_use]
pub fn available_months<R: MoneyRecord>(records: &[R], year: &str) -> Vec<String> {
    records
        .iter()
        .filter(|r| in_period(*r, year, None))
        .map(|r| normalize_month(r.month()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct categories present in `year` (and `month`, when given), ascending.
#[must_use]
pub fn available_categories<R: MoneyRecord>(
    records: &[R],
    year: &str,
    month: Option<&str>,
) -> Vec<String> {
    records
        .iter()
        .filter(|r| in_period(*r, year, month))
        .filter_map(|r| r.category().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
