//! Salary entity - One salary deposit attributed to a calendar date.
//!
//! `day`, `month` and `year` are derived from `date` when the row is written and
//! stored alongside it so reports can filter without parsing dates.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Salary database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salary")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Date the deposit is attributed to
    pub date: Date,
    /// Day of month of `date`
    pub day: i32,
    /// Two-digit month of `date` (`"03"`)
    pub month: String,
    /// Four-digit year of `date` (`"2024"`)
    pub year: String,
    /// Deposited amount
    #[sea_orm(column_type = "Decimal(Some((16, 10)))")]
    pub amount: Decimal,
}

/// `Salary` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
