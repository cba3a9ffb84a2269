//! Salary business logic - recording, listing and deleting salary deposits.
//!
//! There is no update: a wrong entry is deleted and recorded again.

use crate::{
    core::DateParts,
    entities::{Salary, salary},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, info};

/// Records a salary deposit on `date`. The amount must be positive.
pub async fn create_salary(
    db: &DatabaseConnection,
    date: NaiveDate,
    amount: Decimal,
) -> Result<salary::Model> {
    if amount <= Decimal::ZERO {
        return Err(Error::invalid(format!(
            "salary amount must be positive, got {amount}"
        )));
    }

    let DateParts { day, month, year } = DateParts::from(date);
    let salary_model = salary::ActiveModel {
        date: Set(date),
        day: Set(day),
        month: Set(month),
        year: Set(year),
        amount: Set(amount),
        ..Default::default()
    };

    let result = salary_model.insert(db).await?;
    info!(id = result.id, %date, %amount, "Salary recorded");
    Ok(result)
}

/// Returns every salary row, oldest first.
pub async fn list_salaries(db: &DatabaseConnection) -> Result<Vec<salary::Model>> {
    Salary::find()
        .order_by_asc(salary::Column::Date)
        .order_by_asc(salary::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes the salary row with the selected id.
///
/// `None` means nothing was selected and fails with [`Error::EmptySelection`]
/// without touching the store. An id that does not exist is a no-op.
pub async fn delete_salary(db: &DatabaseConnection, salary_id: Option<i64>) -> Result<()> {
    let salary_id = salary_id.ok_or(Error::EmptySelection { table: "salary" })?;

    let result = Salary::delete_by_id(salary_id).exec(db).await?;
    if result.rows_affected == 0 {
        debug!(id = salary_id, "No salary row to delete");
    } else {
        info!(id = salary_id, "Salary deleted");
    }
    Ok(())
}
