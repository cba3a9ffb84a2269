//! Expense entity - One expense row, or one installment of a split purchase.
//!
//! A purchase paid in N installments is stored as N independent rows; nothing links
//! them after insertion, so each can be deleted on its own.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Date the expense (or installment) is attributed to
    pub date: Date,
    /// Day of month of `date`
    pub day: i32,
    /// Two-digit month of `date`
    pub month: String,
    /// Four-digit year of `date`
    pub year: String,
    /// Free-text spending category (e.g. "Food")
    pub category: String,
    /// Where the money was spent
    pub establishment: String,
    /// Amount of this row; positive, the table implies an outflow
    #[sea_orm(column_type = "Decimal(Some((16, 10)))")]
    pub amount: Decimal,
}

/// `Expense` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
