//! Expense business logic - recording, listing and deleting expenses.
//!
//! An expense paid in installments is amortized first and written as one row per
//! installment. The rows of a group are inserted inside a single database
//! transaction, so either the whole group is stored or none of it is.

use crate::{
    core::{DateParts, amortization::amortize},
    entities::{Expense, expense},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// Form input for a new expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// Purchase date; the first installment is attributed to it
    pub date: NaiveDate,
    /// Spending category
    pub category: String,
    /// Where the purchase was made
    pub establishment: String,
    /// Full purchase amount
    pub total: Decimal,
    /// Number of monthly installments (1 for a one-off expense)
    pub installments: u32,
}

impl NewExpense {
    /// A one-off expense (single installment).
    pub fn single(
        date: NaiveDate,
        category: impl Into<String>,
        establishment: impl Into<String>,
        total: Decimal,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            establishment: establishment.into(),
            total,
            installments: 1,
        }
    }
}

/// Records an expense, splitting it into monthly installments when
/// `installments > 1`. Returns the stored rows in installment order.
///
/// Nothing is written if the input is rejected.
pub async fn create_expense(
    db: &DatabaseConnection,
    new_expense: NewExpense,
) -> Result<Vec<expense::Model>> {
    let category = new_expense.category.trim().to_string();
    let establishment = new_expense.establishment.trim().to_string();

    if category.is_empty() {
        return Err(Error::invalid("expense category cannot be empty"));
    }

    if new_expense.total <= Decimal::ZERO {
        return Err(Error::invalid(format!(
            "expense amount must be positive, got {}",
            new_expense.total
        )));
    }

    let installments = amortize(new_expense.total, new_expense.date, new_expense.installments)?;
    debug!(
        count = installments.len(),
        total = %new_expense.total,
        "Expense amortized"
    );

    let txn = db.begin().await?;
    let mut created = Vec::with_capacity(installments.len());

    for installment in installments {
        let DateParts { day, month, year } = DateParts::from(installment.date);
        let expense_model = expense::ActiveModel {
            date: Set(installment.date),
            day: Set(day),
            month: Set(month),
            year: Set(year),
            category: Set(category.clone()),
            establishment: Set(establishment.clone()),
            amount: Set(installment.amount),
            ..Default::default()
        };
        created.push(expense_model.insert(&txn).await?);
    }

    txn.commit().await?;

    info!(
        rows = created.len(),
        %category,
        total = %new_expense.total,
        "Expense recorded"
    );
    Ok(created)
}

/// Returns every expense row, oldest first.
pub async fn list_expenses(db: &DatabaseConnection) -> Result<Vec<expense::Model>> {
    Expense::find()
        .order_by_asc(expense::Column::Date)
        .order_by_asc(expense::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes the expense row with the selected id. Only that row goes; other
/// installments of the same purchase stay.
///
/// `None` fails with [`Error::EmptySelection`] without touching the store. An id
/// that does not exist is a no-op.
pub async fn delete_expense(db: &DatabaseConnection, expense_id: Option<i64>) -> Result<()> {
    let expense_id = expense_id.ok_or(Error::EmptySelection { table: "expenses" })?;

    let result = Expense::delete_by_id(expense_id).exec(db).await?;
    if result.rows_affected == 0 {
        debug!(id = expense_id, "No expense row to delete");
    } else {
        info!(id = expense_id, "Expense deleted");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_single_expense_creates_one_row() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_expense(
            &db,
            NewExpense::single(ymd(2024, 3, 15), "Food", "Market", dec!(300)),
        )
        .await?;

        assert_eq!(created.len(), 1);
        let row = &created[0];
        assert_eq!(row.date, ymd(2024, 3, 15));
        assert_eq!(row.day, 15);
        assert_eq!(row.month, "03");
        assert_eq!(row.year, "2024");
        assert_eq!(row.category, "Food");
        assert_eq!(row.establishment, "Market");
        assert_eq!(row.amount, dec!(300));
        Ok(())
    }

    #[tokio::test]
    async fn test_installments_create_dated_rows() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_expense(
            &db,
            NewExpense {
                installments: 3,
                ..NewExpense::single(ymd(2023, 1, 31), "Home", "Furniture Store", dec!(600))
            },
        )
        .await?;

        let dates: Vec<_> = created.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![ymd(2023, 1, 31), ymd(2023, 2, 28), ymd(2023, 3, 31)]);
        assert!(created.iter().all(|e| e.amount == dec!(200)));

        // Day tracks the stored (clamped) date
        assert_eq!(created[1].day, 28);
        assert_eq!(created[1].month, "02");
        Ok(())
    }

    #[tokio::test]
    async fn test_installments_roll_into_next_year() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_expense(
            &db,
            NewExpense {
                installments: 4,
                ..NewExpense::single(ymd(2023, 11, 10), "Travel", "Airline", dec!(1000))
            },
        )
        .await?;

        let periods: Vec<_> = created
            .iter()
            .map(|e| (e.year.as_str(), e.month.as_str()))
            .collect();
        assert_eq!(
            periods,
            vec![("2023", "11"), ("2023", "12"), ("2024", "01"), ("2024", "02")]
        );
        let sum: Decimal = created.iter().map(|e| e.amount).sum();
        assert_eq!(sum, dec!(1000));
        Ok(())
    }

    #[tokio::test]
    async fn test_uneven_installments_sum_exactly_after_storage() -> Result<()> {
        let db = setup_test_db().await?;

        let groups = [
            (ymd(2024, 1, 15), dec!(100), 3),
            (ymd(2025, 1, 15), dec!(59.90), 24),
        ];
        for (date, total, installments) in groups {
            let created = create_expense(
                &db,
                NewExpense {
                    installments,
                    ..NewExpense::single(date, "Bills", "Utility", total)
                },
            )
            .await?;
            assert_eq!(created.len(), installments as usize);
            assert_eq!(created.iter().map(|e| e.amount).sum::<Decimal>(), total);

            let ids: Vec<_> = created.iter().map(|e| e.id).collect();
            let stored: Decimal = list_expenses(&db)
                .await?
                .iter()
                .filter(|e| ids.contains(&e.id))
                .map(|e| e.amount)
                .sum();
            assert_eq!(stored, total);
        }

        let thirds: Vec<_> = list_expenses(&db)
            .await?
            .into_iter()
            .take(3)
            .map(|e| e.amount)
            .collect();
        assert_eq!(
            thirds,
            vec![dec!(33.3333333333), dec!(33.3333333333), dec!(33.3333333334)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_installments_writes_nothing() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_expense(
            &db,
            NewExpense {
                installments: 0,
                ..NewExpense::single(ymd(2024, 3, 15), "Food", "Market", dec!(300))
            },
        )
        .await;

        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
        assert!(list_expenses(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;

        let blank_category =
            create_expense(&db, NewExpense::single(ymd(2024, 3, 15), "  ", "Market", dec!(10)))
                .await;
        assert!(matches!(blank_category, Err(Error::InvalidArgument { .. })));

        let zero_amount =
            create_expense(&db, NewExpense::single(ymd(2024, 3, 15), "Food", "Market", dec!(0)))
                .await;
        assert!(matches!(zero_amount, Err(Error::InvalidArgument { .. })));

        assert!(list_expenses(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_text_fields_are_trimmed() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_expense(
            &db,
            NewExpense::single(ymd(2024, 3, 15), " Food ", " Market\n", dec!(10)),
        )
        .await?;

        assert_eq!(created[0].category, "Food");
        assert_eq!(created[0].establishment, "Market");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_removes_only_selected_installment() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_expense(
            &db,
            NewExpense {
                installments: 2,
                ..NewExpense::single(ymd(2024, 1, 10), "Tech", "Store", dec!(500))
            },
        )
        .await?;

        delete_expense(&db, Some(created[0].id)).await?;

        let remaining = list_expenses(&db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, created[1].id);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_expense_is_noop() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_expense(&db, ymd(2024, 1, 10), "Food", dec!(20)).await?;

        delete_expense(&db, Some(424_242)).await?;

        assert_eq!(list_expenses(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_without_selection() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_expense(&db, None).await;

        assert!(matches!(
            result,
            Err(Error::EmptySelection { table: "expenses" })
        ));
        Ok(())
    }
}
