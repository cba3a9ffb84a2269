//! Installment amortization - splits one purchase into dated monthly installments.
//!
//! Every installment except the last carries the same base amount; the last one
//! absorbs whatever remainder the division left, so the group always sums back to
//! the purchase total exactly. This module is pure: it never touches the store.

use crate::errors::{Error, Result};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

/// Fractional digits kept on the per-installment base amount.
///
/// Keeping the base at a fixed scale means `base * (count - 1)` and the running sum
/// of installments never exceed `Decimal`'s 28-digit mantissa, so both are exact.
pub const BASE_SCALE: u32 = 10;

/// One dated slice of an amortized purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Installment {
    /// Zero-based position in the group
    pub index: u32,
    /// Date the installment is attributed to
    pub date: NaiveDate,
    /// Amount charged for this installment
    pub amount: Decimal,
}

/// Splits `total` into `count` monthly installments starting at `start_date`.
///
/// Installment `i` is dated `start_date + i months`. When the start day does not
/// exist in the target month it is clamped to that month's last day; each date is
/// computed from `start_date` so a clamp in February does not leak into March.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `count` is zero or a date falls outside
/// the supported calendar range.
pub fn amortize(total: Decimal, start_date: NaiveDate, count: u32) -> Result<Vec<Installment>> {
    if count < 1 {
        return Err(Error::invalid(format!(
            "installment count must be at least 1, got {count}"
        )));
    }

    let base = total
        .checked_div(Decimal::from(count))
        .ok_or_else(|| Error::invalid("installment amount overflowed"))?
        .round_dp(BASE_SCALE);
    let last = base
        .checked_mul(Decimal::from(count - 1))
        .and_then(|spread| total.checked_sub(spread))
        .ok_or_else(|| Error::invalid("installment amount overflowed"))?;

    (0..count)
        .map(|index| {
            let date = add_months_clamped(start_date, index)?;
            let amount = if index + 1 == count { last } else { base };
            Ok(Installment {
                index,
                date,
                amount,
            })
        })
        .collect()
}

/// Adds `months` calendar months to `date`, clamping the day to the end of the
/// target month when needed (Jan 31 + 1 month is Feb 28, or Feb 29 in leap years).
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the result would overflow `NaiveDate`.
pub fn add_months_clamped(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| Error::invalid(format!("{date} + {months} months is out of range")))
}
